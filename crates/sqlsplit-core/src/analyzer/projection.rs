//! SELECT and FROM analyzers.

use std::sync::LazyLock;

use regex::Regex;

use super::text::{get_name_and_alias, protected_split};
use crate::ast::{FromItem, SelectItem};

/// Splits an expression into its identifier terms.
static TERM_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s()*/%+-]+").expect("Invalid term separator regex"));

/// Leading words that mark an expression as an aggregate call.
const AGGREGATES: &[&str] = &["SUM", "MIN", "MAX", "COUNT", "AVG", "DISTINCT"];

/// Analyzes a SELECT projection list.
#[must_use]
pub fn analyze_select(text: &str) -> Vec<SelectItem> {
    protected_split(',', text)
        .iter()
        .filter(|item| !item.is_empty())
        .map(|item| {
            let (name, alias) = get_name_and_alias(item);
            let terms = expression_terms(&name);
            SelectItem { name, terms, alias }
        })
        .collect()
}

/// Returns the terms of a multi-term expression that is not an aggregate call.
fn expression_terms(name: &str) -> Option<Vec<String>> {
    if name == "*" {
        return None;
    }

    let terms: Vec<String> = TERM_SEPARATOR
        .split(name)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect();

    let is_aggregate = terms
        .first()
        .is_some_and(|first| AGGREGATES.iter().any(|agg| first.eq_ignore_ascii_case(agg)));

    (!is_aggregate && terms.len() > 1).then_some(terms)
}

/// Analyzes a FROM table list.
#[must_use]
pub fn analyze_from(text: &str) -> Vec<FromItem> {
    protected_split(',', text)
        .iter()
        .filter(|item| !item.is_empty())
        .map(|item| {
            let (table, alias) = get_name_and_alias(item);
            FromItem { table, alias }
        })
        .collect()
}
