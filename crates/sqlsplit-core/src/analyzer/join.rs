//! JOIN analyzer and join normalization.

use super::text::find_outside_literal;
use crate::ast::JoinType;
use crate::clause::Clause;

/// A join clause whose condition has not been parsed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSource {
    pub table: String,
    pub alias: String,
    /// Raw ON condition text, empty when the join has none.
    pub condition: String,
}

/// Analyzes the text following a JOIN keyword: `<table> [AS <alias>] [ON <condition>]`.
#[must_use]
pub fn analyze_join(text: &str) -> JoinSource {
    let (target, condition) = match find_outside_literal(text, " ON ", false) {
        Some(pos) => (&text[..pos], text[pos + 4..].trim()),
        None => (text, ""),
    };

    let (table, alias) = match find_outside_literal(target, " AS ", false) {
        Some(pos) => (&target[..pos], target[pos + 4..].trim()),
        None => (target, ""),
    };

    JoinSource {
        table: table.trim().to_string(),
        alias: alias.to_string(),
        condition: condition.to_string(),
    }
}

/// Maps a join clause to its join type.
#[must_use]
pub const fn join_type(clause: Clause) -> Option<JoinType> {
    match clause {
        Clause::LeftJoin => Some(JoinType::Left),
        Clause::InnerJoin => Some(JoinType::Inner),
        Clause::RightJoin => Some(JoinType::Right),
        Clause::FullJoin => Some(JoinType::Full),
        _ => None,
    }
}

/// Merges the directional join clauses into one list tagged with their type.
///
/// The result is grouped by type (LEFT, INNER, RIGHT, FULL), each group in
/// source order; it does not follow the overall source order.
#[must_use]
pub fn normalize_joins(joins: Vec<(JoinType, JoinSource)>) -> Vec<(JoinType, JoinSource)> {
    const ORDER: [JoinType; 4] = [JoinType::Left, JoinType::Inner, JoinType::Right, JoinType::Full];

    let mut joins = joins;
    joins.sort_by_key(|(kind, _)| ORDER.iter().position(|o| o == kind));
    joins
}
