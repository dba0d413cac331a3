//! Clause analyzers
//!
//! One function per clause kind turns the raw clause text into a typed
//! value. Conditions and set-operation operands stay raw here; they are
//! parsed once every clause has been analyzed.

mod join;
mod listing;
mod projection;
mod text;

use tracing::trace;

pub use join::{JoinSource, analyze_join, join_type, normalize_joins};
pub use listing::{analyze_group_by, analyze_limit, analyze_order_by, analyze_pivot};
pub use projection::{analyze_from, analyze_select};
pub use text::{find_outside_literal, get_name_and_alias, protected_split};

use crate::ast::{FromItem, GroupByItem, JoinType, LimitSpec, OrderByItem, PivotItem, SelectItem};
use crate::clause::Clause;
use crate::error::{ParseError, Result};

/// The analyzed value of one clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseValue {
    Select(Vec<SelectItem>),
    From(Vec<FromItem>),
    Join(JoinType, JoinSource),
    Where(String),
    Having(String),
    GroupBy(Vec<GroupByItem>),
    OrderBy(Vec<OrderByItem>),
    Limit(LimitSpec),
    Pivot(Vec<PivotItem>),
    /// Operand text of a set operation.
    SetOperation(Clause, String),
}

type Analyzer = fn(Clause, &str) -> Result<ClauseValue>;

fn select(_: Clause, text: &str) -> Result<ClauseValue> {
    Ok(ClauseValue::Select(analyze_select(text)))
}

fn from(_: Clause, text: &str) -> Result<ClauseValue> {
    Ok(ClauseValue::From(analyze_from(text)))
}

fn join(clause: Clause, text: &str) -> Result<ClauseValue> {
    let kind = join_type(clause).ok_or_else(|| ParseError::UnknownClause(clause.to_string()))?;
    Ok(ClauseValue::Join(kind, analyze_join(text)))
}

fn where_(_: Clause, text: &str) -> Result<ClauseValue> {
    Ok(ClauseValue::Where(text.trim().to_string()))
}

fn having(_: Clause, text: &str) -> Result<ClauseValue> {
    Ok(ClauseValue::Having(text.trim().to_string()))
}

fn group_by(_: Clause, text: &str) -> Result<ClauseValue> {
    Ok(ClauseValue::GroupBy(analyze_group_by(text)))
}

fn order_by(_: Clause, text: &str) -> Result<ClauseValue> {
    analyze_order_by(text).map(ClauseValue::OrderBy)
}

fn limit(_: Clause, text: &str) -> Result<ClauseValue> {
    Ok(ClauseValue::Limit(analyze_limit(text)))
}

fn pivot(_: Clause, text: &str) -> Result<ClauseValue> {
    Ok(ClauseValue::Pivot(analyze_pivot(text)))
}

fn set_operation(clause: Clause, text: &str) -> Result<ClauseValue> {
    Ok(ClauseValue::SetOperation(clause, text.trim().to_string()))
}

/// Analyzer registered for each clause.
const ANALYZERS: &[(Clause, Analyzer)] = &[
    (Clause::Select, select),
    (Clause::From, from),
    (Clause::LeftJoin, join),
    (Clause::InnerJoin, join),
    (Clause::RightJoin, join),
    (Clause::FullJoin, join),
    (Clause::Where, where_),
    (Clause::Having, having),
    (Clause::GroupBy, group_by),
    (Clause::OrderBy, order_by),
    (Clause::Limit, limit),
    (Clause::Pivot, pivot),
    (Clause::Union, set_operation),
    (Clause::UnionAll, set_operation),
    (Clause::Intersect, set_operation),
    (Clause::Except, set_operation),
];

/// Runs the analyzer registered for `clause` on its text.
///
/// # Errors
///
/// Returns [`ParseError::UnknownClause`] if no analyzer is registered, or
/// [`ParseError::InvalidOrderBy`] from the ORDER BY analyzer.
pub fn analyze_clause(clause: Clause, text: &str) -> Result<ClauseValue> {
    let analyzer = ANALYZERS
        .iter()
        .find(|(registered, _)| *registered == clause)
        .map(|(_, analyzer)| *analyzer)
        .ok_or_else(|| ParseError::UnknownClause(clause.to_string()))?;

    trace!(clause = %clause, text = text.trim(), "Analyzing clause");
    analyzer(clause, text)
}

/// Runs the analyzer registered under a clause name such as `"ORDER BY"`.
///
/// # Errors
///
/// Returns [`ParseError::UnknownClause`] for a name without an analyzer.
pub fn analyze_named(name: &str, text: &str) -> Result<ClauseValue> {
    let clause = Clause::from_str(name)
        .ok_or_else(|| ParseError::UnknownClause(name.trim().to_ascii_uppercase()))?;
    analyze_clause(clause, text)
}

/// Analyzed clauses of one query, before condition parsing.
///
/// Repeated list clauses are concatenated in source order; repeated WHERE
/// and HAVING texts are kept side by side and combined with AND once parsed;
/// a repeated LIMIT replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseSet {
    pub select: Option<Vec<SelectItem>>,
    pub from: Option<Vec<FromItem>>,
    pub joins: Vec<(JoinType, JoinSource)>,
    pub where_clause: Vec<String>,
    pub having: Vec<String>,
    pub group_by: Option<Vec<GroupByItem>>,
    pub order_by: Option<Vec<OrderByItem>>,
    pub limit: Option<LimitSpec>,
    pub pivot: Option<Vec<PivotItem>>,
    pub set_operations: Vec<(Clause, String)>,
}

fn extend<T>(slot: &mut Option<Vec<T>>, items: Vec<T>) {
    slot.get_or_insert_with(Vec::new).extend(items);
}

impl ClauseSet {
    /// Adds one analyzed clause.
    pub fn insert(&mut self, value: ClauseValue) {
        match value {
            ClauseValue::Select(items) => extend(&mut self.select, items),
            ClauseValue::From(items) => extend(&mut self.from, items),
            ClauseValue::Join(kind, source) => self.joins.push((kind, source)),
            ClauseValue::Where(text) => self.where_clause.push(text),
            ClauseValue::Having(text) => self.having.push(text),
            ClauseValue::GroupBy(items) => extend(&mut self.group_by, items),
            ClauseValue::OrderBy(items) => extend(&mut self.order_by, items),
            ClauseValue::Limit(spec) => self.limit = Some(spec),
            ClauseValue::Pivot(items) => extend(&mut self.pivot, items),
            ClauseValue::SetOperation(clause, text) => self.set_operations.push((clause, text)),
        }
    }
}
