//! Condition AST types (WHERE, HAVING and JOIN ON).

use serde::{Serialize, Serializer};

use super::query::Query;

/// Logical connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logic {
    And,
    Or,
}

impl Logic {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// Parses a connective keyword (case-insensitive).
    #[must_use]
    pub fn from_keyword(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("AND") {
            Some(Self::And)
        } else if s.eq_ignore_ascii_case("OR") {
            Some(Self::Or)
        } else {
            None
        }
    }
}

impl Serialize for Logic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A sub-select attached to a condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Subquery {
    /// The sub-select as it appeared in the source.
    #[serde(skip)]
    pub sql: String,
    /// The parsed sub-select.
    pub query: Query,
}

/// A parsed condition.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Condition {
    /// A chain of terms joined by the same connective.
    Logical {
        logic: Logic,
        terms: Vec<Condition>,
    },
    /// `left operator right`, where the operator may span two words (`IS NOT`).
    Comparison {
        operator: String,
        left: Box<Condition>,
        right: Box<Condition>,
    },
    /// An identifier, quoted literal, bind variable or arithmetic expression.
    Literal(String),
    /// A nested SELECT.
    Subquery(Box<Subquery>),
    /// Nothing could be parsed at this position.
    #[default]
    Empty,
}

impl Condition {
    /// Creates a literal node.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Creates a comparison node.
    #[must_use]
    pub fn comparison(operator: impl Into<String>, left: Self, right: Self) -> Self {
        Self::Comparison {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Joins `self` and `other` with `logic`, appending to `self` when it is
    /// already a chain of the same connective.
    #[must_use]
    pub fn chain(self, logic: Logic, other: Self) -> Self {
        match self {
            Self::Logical {
                logic: current,
                mut terms,
            } if current == logic => {
                terms.push(other);
                Self::Logical { logic, terms }
            }
            left => Self::Logical {
                logic,
                terms: vec![left, other],
            },
        }
    }

    /// Returns the literal text, if this is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the sub-select, if this is one.
    #[must_use]
    pub fn as_query(&self) -> Option<&Query> {
        match self {
            Self::Subquery(sub) => Some(&sub.query),
            _ => None,
        }
    }

    /// Returns true for the empty fallthrough node.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
