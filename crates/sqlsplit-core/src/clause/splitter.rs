//! Clause splitting.

use super::keyword::Clause;
use super::scan::ClauseMatch;

/// The text of one located clause, keyword excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseSegment<'a> {
    pub clause: Clause,
    pub text: &'a str,
}

/// Cuts `text` into one segment per located clause.
///
/// Each segment runs from the end of its keyword to the start of the next
/// one. Anything before the first keyword is discarded.
#[must_use]
pub fn split_clauses<'a>(text: &'a str, matches: &[ClauseMatch]) -> Vec<ClauseSegment<'a>> {
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = matches.get(i + 1).map_or(text.len(), |next| next.start);
            ClauseSegment {
                clause: m.clause,
                text: &text[m.end..end],
            }
        })
        .collect()
}
