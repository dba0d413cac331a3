//! Clause pipeline
//!
//! Normalizes set operations, locates the top-level clause keywords and
//! cuts the query into one text segment per clause.

mod keyword;
mod locator;
mod preprocess;
mod scan;
mod splitter;

pub use keyword::{CLAUSE_KEYWORDS, Clause, SET_OPERATION_KEYWORDS};
pub use locator::locate_clauses;
pub use preprocess::normalize_set_operations;
pub use scan::{ClauseMatch, find_top_level_keywords, is_wrapped, matching_paren, unwrap_parens};
pub use splitter::{ClauseSegment, split_clauses};
