//! Condition parsing
//!
//! WHERE, HAVING and JOIN ON texts are tokenized, parsed into a
//! [`Condition`](crate::ast::Condition) tree and can be rendered back as a
//! boolean expression string.

pub mod lexer;
mod parser;
mod resolver;

pub use parser::{CondParser, parse_condition};
pub use resolver::resolve_condition;
