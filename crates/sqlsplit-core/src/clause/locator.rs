//! Clause location.

use tracing::debug;

use super::keyword::CLAUSE_KEYWORDS;
use super::scan::{ClauseMatch, find_top_level_keywords};

/// Locates the top-level clauses of a (set-operation normalized) query.
///
/// The result is ordered by position and free of overlaps: where two
/// spellings start at the same offset the longest one is kept, and plain
/// `JOIN` is reported as `INNER JOIN`. A query without any recognized
/// keyword yields an empty list.
#[must_use]
pub fn locate_clauses(text: &str) -> Vec<ClauseMatch> {
    let matches = find_top_level_keywords(text, CLAUSE_KEYWORDS);
    debug!(
        clauses = ?matches.iter().map(|m| m.clause.as_str()).collect::<Vec<_>>(),
        "Located clauses"
    );
    matches
}
