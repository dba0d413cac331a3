//! # sqlsplit-core
//!
//! A clause-splitting SQL front end. It turns query text into a typed
//! [`Query`] and renders SQL conditions as boolean expression strings.
//!
//! This crate provides:
//! - A clause locator that ignores keywords inside brackets and quoted literals
//! - One analyzer per clause (SELECT, FROM, the JOIN family, ORDER BY, ...)
//! - A condition lexer and recursive descent parser that re-enters the query
//!   parser for sub-selects
//! - A resolver rendering conditions with `==`, `&&` and `||`
//!
//! ## Parsing a query
//!
//! ```rust
//! use sqlsplit_core::parse_query;
//!
//! let query = parse_query("SELECT name AS n FROM users u LIMIT 10").unwrap();
//! assert_eq!(query.clause_names(), vec!["SELECT", "FROM", "LIMIT"]);
//!
//! let select = query.select.unwrap();
//! assert_eq!(select[0].name, "name");
//! assert_eq!(select[0].alias, "n");
//! assert_eq!(query.limit.unwrap().nb, Some(10));
//! ```
//!
//! ## Condition expressions
//!
//! ```rust
//! use sqlsplit_core::parse_condition_to_expression;
//!
//! let expr = parse_condition_to_expression("a = 1 AND b = 2 OR c = 3").unwrap();
//! assert_eq!(expr, " a == 1 && b == 2 || c == 3");
//! ```
//!
//! ## Strict conditions
//!
//! Malformed conditions are parsed best-effort by default. Strict options
//! turn them into errors:
//!
//! ```rust
//! use sqlsplit_core::{ParserOptions, QueryParser};
//!
//! let parser = QueryParser::new(ParserOptions::new().strict_conditions(true));
//! assert!(parser.parse("SELECT a FROM t WHERE (a = 1").is_err());
//! ```

pub mod analyzer;
pub mod ast;
pub mod clause;
pub mod condition;
pub mod error;
pub mod options;
pub mod parser;

pub use analyzer::{analyze_clause, analyze_named, get_name_and_alias, protected_split};
pub use ast::{Condition, JoinType, Logic, OrderDirection, Query};
pub use clause::{Clause, locate_clauses, normalize_set_operations, split_clauses};
pub use condition::{CondParser, parse_condition, resolve_condition};
pub use error::{ParseError, Result};
pub use options::ParserOptions;
pub use parser::{QueryParser, parse_condition_to_expression, parse_query};
