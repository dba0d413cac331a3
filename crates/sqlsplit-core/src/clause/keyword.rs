//! Clause keywords recognized by the clause locator.

use std::fmt;

/// A top-level clause of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    Select,
    From,
    LeftJoin,
    RightJoin,
    InnerJoin,
    FullJoin,
    OrderBy,
    GroupBy,
    Having,
    Where,
    Limit,
    UnionAll,
    Union,
    Intersect,
    Except,
    Pivot,
}

/// Keyword spellings and the clause each one introduces.
///
/// Plain `JOIN` is a synonym of `INNER JOIN`. Multi-word spellings match
/// any run of whitespace between their words.
pub const CLAUSE_KEYWORDS: &[(&str, Clause)] = &[
    ("SELECT", Clause::Select),
    ("FROM", Clause::From),
    ("JOIN", Clause::InnerJoin),
    ("LEFT JOIN", Clause::LeftJoin),
    ("RIGHT JOIN", Clause::RightJoin),
    ("INNER JOIN", Clause::InnerJoin),
    ("FULL JOIN", Clause::FullJoin),
    ("ORDER BY", Clause::OrderBy),
    ("GROUP BY", Clause::GroupBy),
    ("HAVING", Clause::Having),
    ("WHERE", Clause::Where),
    ("LIMIT", Clause::Limit),
    ("UNION ALL", Clause::UnionAll),
    ("UNION", Clause::Union),
    ("INTERSECT", Clause::Intersect),
    ("EXCEPT", Clause::Except),
    ("PIVOT", Clause::Pivot),
];

/// Spellings of the set operations, handled by the preprocessor.
pub const SET_OPERATION_KEYWORDS: &[(&str, Clause)] = &[
    ("UNION ALL", Clause::UnionAll),
    ("UNION", Clause::Union),
    ("INTERSECT", Clause::Intersect),
    ("EXCEPT", Clause::Except),
];

impl Clause {
    /// Returns the canonical clause name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::LeftJoin => "LEFT JOIN",
            Self::RightJoin => "RIGHT JOIN",
            Self::InnerJoin => "INNER JOIN",
            Self::FullJoin => "FULL JOIN",
            Self::OrderBy => "ORDER BY",
            Self::GroupBy => "GROUP BY",
            Self::Having => "HAVING",
            Self::Where => "WHERE",
            Self::Limit => "LIMIT",
            Self::UnionAll => "UNION ALL",
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::Pivot => "PIVOT",
        }
    }

    /// Looks up a clause by name (case-insensitive, whitespace-normalized).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        CLAUSE_KEYWORDS
            .iter()
            .find(|(spelling, _)| spelling.eq_ignore_ascii_case(&normalized))
            .map(|(_, clause)| *clause)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
