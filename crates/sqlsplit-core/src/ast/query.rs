//! Query AST types.

use serde::{Serialize, Serializer};

use super::condition::Condition;

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Parses a direction keyword (case-insensitive).
    #[must_use]
    pub fn from_keyword(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("ASC") {
            Some(Self::Asc)
        } else if s.eq_ignore_ascii_case("DESC") {
            Some(Self::Desc)
        } else {
            None
        }
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN (and plain JOIN).
    Inner,
    /// LEFT JOIN.
    Left,
    /// RIGHT JOIN.
    Right,
    /// FULL JOIN.
    Full,
}

impl JoinType {
    /// Returns the tag used in the serialized AST.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "inner",
            Self::Left => "left",
            Self::Right => "right",
            Self::Full => "full",
        }
    }
}

impl Serialize for OrderDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for JoinType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A projected column in the SELECT clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectItem {
    /// Expression text (`*` allowed).
    pub name: String,
    /// Identifier tokens of a multi-term arithmetic expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<String>>,
    /// Alias, empty if none.
    #[serde(rename = "as")]
    pub alias: String,
}

/// A source table in the FROM clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FromItem {
    /// Table name or derived-table text.
    pub table: String,
    /// Alias, empty if none.
    #[serde(rename = "as")]
    pub alias: String,
}

/// A joined table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinItem {
    /// Table name.
    pub table: String,
    /// Alias, empty if none.
    #[serde(rename = "as")]
    pub alias: String,
    /// The ON condition.
    pub cond: Condition,
    /// The join type.
    #[serde(rename = "type")]
    pub join_type: JoinType,
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderByItem {
    /// Column name.
    pub column: String,
    /// Direction.
    pub order: OrderDirection,
}

/// A GROUP BY entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupByItem {
    /// Column name.
    pub column: String,
}

/// A PIVOT entry. The alias is reserved for callers and always empty after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotItem {
    pub name: String,
    #[serde(rename = "as")]
    pub alias: String,
}

/// A LIMIT clause. Offsets are not part of the surface, so `from` is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitSpec {
    /// Row count; `None` (serialized as `null`) when the clause holds no
    /// integer, as in `LIMIT ALL`.
    pub nb: Option<i64>,
    pub from: i64,
}

impl LimitSpec {
    /// Creates a limit with a zero offset.
    #[must_use]
    pub const fn new(nb: i64) -> Self {
        Self {
            nb: Some(nb),
            from: 0,
        }
    }

    /// Creates a limit without a row count.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { nb: None, from: 0 }
    }
}

/// A parsed query: one optional slot per clause kind.
///
/// A slot is `Some` exactly when the clause was located in the input. The
/// four directional join clauses are merged into [`Query::join`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Query {
    #[serde(rename = "SELECT", skip_serializing_if = "Option::is_none")]
    pub select: Option<Vec<SelectItem>>,
    #[serde(rename = "FROM", skip_serializing_if = "Option::is_none")]
    pub from: Option<Vec<FromItem>>,
    #[serde(rename = "JOIN", skip_serializing_if = "Option::is_none")]
    pub join: Option<Vec<JoinItem>>,
    #[serde(rename = "WHERE", skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<Condition>,
    #[serde(rename = "GROUP BY", skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<GroupByItem>>,
    #[serde(rename = "HAVING", skip_serializing_if = "Option::is_none")]
    pub having: Option<Condition>,
    #[serde(rename = "ORDER BY", skip_serializing_if = "Option::is_none")]
    pub order_by: Option<Vec<OrderByItem>>,
    #[serde(rename = "LIMIT", skip_serializing_if = "Option::is_none")]
    pub limit: Option<LimitSpec>,
    #[serde(rename = "PIVOT", skip_serializing_if = "Option::is_none")]
    pub pivot: Option<Vec<PivotItem>>,
    #[serde(rename = "UNION", skip_serializing_if = "Option::is_none")]
    pub union: Option<Vec<Query>>,
    #[serde(rename = "UNION ALL", skip_serializing_if = "Option::is_none")]
    pub union_all: Option<Vec<Query>>,
    #[serde(rename = "INTERSECT", skip_serializing_if = "Option::is_none")]
    pub intersect: Option<Vec<Query>>,
    #[serde(rename = "EXCEPT", skip_serializing_if = "Option::is_none")]
    pub except: Option<Vec<Query>>,
}

impl Query {
    /// Returns the names of the clauses present, in a fixed canonical order.
    #[must_use]
    pub fn clause_names(&self) -> Vec<&'static str> {
        let slots = [
            ("SELECT", self.select.is_some()),
            ("FROM", self.from.is_some()),
            ("JOIN", self.join.is_some()),
            ("WHERE", self.where_clause.is_some()),
            ("GROUP BY", self.group_by.is_some()),
            ("HAVING", self.having.is_some()),
            ("ORDER BY", self.order_by.is_some()),
            ("LIMIT", self.limit.is_some()),
            ("PIVOT", self.pivot.is_some()),
            ("UNION", self.union.is_some()),
            ("UNION ALL", self.union_all.is_some()),
            ("INTERSECT", self.intersect.is_some()),
            ("EXCEPT", self.except.is_some()),
        ];
        slots
            .into_iter()
            .filter_map(|(name, present)| present.then_some(name))
            .collect()
    }

    /// Returns true if no clause was located.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clause_names().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_direction() {
        assert_eq!(OrderDirection::Asc.as_str(), "ASC");
        assert_eq!(OrderDirection::from_keyword("desc"), Some(OrderDirection::Desc));
        assert_eq!(OrderDirection::from_keyword("down"), None);
    }

    #[test]
    fn test_join_type() {
        assert_eq!(JoinType::Inner.as_str(), "inner");
        assert_eq!(JoinType::Full.as_str(), "full");
    }

    #[test]
    fn test_tags_serialize_as_str() {
        assert_eq!(serde_json::to_value(JoinType::Left).unwrap(), "left");
        assert_eq!(serde_json::to_value(OrderDirection::Desc).unwrap(), "DESC");
    }

    #[test]
    fn test_unbounded_limit_serializes_null() {
        assert_eq!(
            serde_json::to_value(LimitSpec::unbounded()).unwrap(),
            serde_json::json!({"nb": null, "from": 0})
        );
    }

    #[test]
    fn test_clause_names() {
        let query = Query {
            select: Some(vec![]),
            limit: Some(LimitSpec::new(5)),
            ..Query::default()
        };
        assert_eq!(query.clause_names(), vec!["SELECT", "LIMIT"]);
        assert!(Query::default().is_empty());
    }
}
