//! ORDER BY, GROUP BY, PIVOT and LIMIT analyzers.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::text::protected_split;
use crate::ast::{GroupByItem, LimitSpec, OrderByItem, OrderDirection, PivotItem};
use crate::error::{ParseError, Result};

static ORDER_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([\w.]+)(?:\s+(ASC|DESC)\b)?").expect("Invalid ORDER BY regex")
});

static LEADING_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.]+").expect("Invalid column name regex"));

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("Invalid integer regex"));

/// Analyzes an ORDER BY list.
///
/// # Errors
///
/// Returns [`ParseError::InvalidOrderBy`] when an entry has tokens after its
/// column that are not a direction.
pub fn analyze_order_by(text: &str) -> Result<Vec<OrderByItem>> {
    let mut items = Vec::new();
    for entry in protected_split(',', text) {
        let Some(caps) = ORDER_ENTRY.captures(&entry) else {
            continue;
        };

        let order = match caps.get(2) {
            Some(direction) => {
                OrderDirection::from_keyword(direction.as_str()).unwrap_or_default()
            }
            None if entry.split_whitespace().count() > 1 => {
                return Err(ParseError::InvalidOrderBy(entry.clone()));
            }
            None => OrderDirection::Asc,
        };

        items.push(OrderByItem {
            column: caps[1].to_string(),
            order,
        });
    }
    Ok(items)
}

fn leading_names(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(',')
        .filter_map(|entry| LEADING_NAME.find(entry))
        .map(|name| name.as_str().to_string())
}

/// Analyzes a GROUP BY list.
#[must_use]
pub fn analyze_group_by(text: &str) -> Vec<GroupByItem> {
    leading_names(text)
        .map(|column| GroupByItem { column })
        .collect()
}

/// Analyzes a PIVOT list.
#[must_use]
pub fn analyze_pivot(text: &str) -> Vec<PivotItem> {
    leading_names(text)
        .map(|name| PivotItem {
            name,
            alias: String::new(),
        })
        .collect()
}

/// Analyzes a LIMIT clause. Only the row count is read; `from` is always 0.
///
/// A clause that does not start with an integer in `i64` range (`LIMIT ALL`,
/// an overflowing count) gives a limit without a row count.
#[must_use]
pub fn analyze_limit(text: &str) -> LimitSpec {
    let text = text.trim();
    let count = LEADING_INTEGER
        .find(text)
        .and_then(|m| m.as_str().parse::<i64>().ok());
    match count {
        Some(nb) => LimitSpec::new(nb),
        None => {
            debug!(limit = text, "LIMIT without a row count");
            LimitSpec::unbounded()
        }
    }
}
