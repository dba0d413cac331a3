//! Query parser: the clause pipeline followed by condition and set-operation
//! parsing.

use tracing::debug;

use crate::analyzer::{ClauseSet, analyze_clause, normalize_joins};
use crate::ast::{Condition, JoinItem, Logic, Query};
use crate::clause::{Clause, locate_clauses, normalize_set_operations, split_clauses, unwrap_parens};
use crate::condition::{parse_condition, resolve_condition};
use crate::error::Result;
use crate::options::ParserOptions;

/// Table and alias of the synthetic query wrapped around a bare condition.
const PLACEHOLDER_QUERY: &str = "SELECT A FROM c WHERE ";

/// Parses queries with a fixed set of options.
///
/// Sub-selects found in conditions and set-operation operands are parsed by
/// the same parser, so they share its options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryParser {
    options: ParserOptions,
}

impl QueryParser {
    /// Creates a parser with the given options.
    #[must_use]
    pub const fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Returns the parser options.
    #[must_use]
    pub const fn options(&self) -> ParserOptions {
        self.options
    }

    /// Parses a query.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownClause`](crate::ParseError::UnknownClause)
    /// or [`ParseError::InvalidOrderBy`](crate::ParseError::InvalidOrderBy)
    /// from the clause analyzers, and the condition errors of strict mode.
    pub fn parse(&self, sql: &str) -> Result<Query> {
        let normalized = normalize_set_operations(sql);
        let matches = locate_clauses(&normalized);

        let mut clauses = ClauseSet::default();
        for segment in split_clauses(&normalized, &matches) {
            clauses.insert(analyze_clause(segment.clause, segment.text)?);
        }

        self.build(clauses)
    }

    fn build(&self, clauses: ClauseSet) -> Result<Query> {
        let ClauseSet {
            select,
            from,
            joins,
            where_clause,
            having,
            group_by,
            order_by,
            limit,
            pivot,
            set_operations,
        } = clauses;

        let join = if joins.is_empty() {
            None
        } else {
            let items = normalize_joins(joins)
                .into_iter()
                .map(|(join_type, source)| {
                    Ok(JoinItem {
                        cond: self.conditions(&[source.condition])?.unwrap_or_default(),
                        table: source.table,
                        alias: source.alias,
                        join_type,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Some(items)
        };

        let mut query = Query {
            select,
            from,
            join,
            where_clause: self.conditions(&where_clause)?,
            group_by,
            having: self.conditions(&having)?,
            order_by,
            limit,
            pivot,
            ..Query::default()
        };

        for (clause, text) in set_operations {
            let operand = unwrap_parens(&text);
            debug!(operation = %clause, sql = operand, "Parsing set operation operand");
            let parsed = self.parse(operand)?;
            let slot = match clause {
                Clause::UnionAll => &mut query.union_all,
                Clause::Intersect => &mut query.intersect,
                Clause::Except => &mut query.except,
                _ => &mut query.union,
            };
            slot.get_or_insert_with(Vec::new).push(parsed);
        }

        Ok(query)
    }

    /// Parses the texts of one condition clause and combines them with AND.
    fn conditions(&self, texts: &[String]) -> Result<Option<Condition>> {
        let mut combined: Option<Condition> = None;
        for text in texts {
            let condition = parse_condition(text, self)?;
            combined = Some(match combined {
                None | Some(Condition::Empty) => condition,
                Some(previous) if condition.is_empty() => previous,
                Some(previous) => previous.chain(Logic::And, condition),
            });
        }
        Ok(combined)
    }

    /// Renders a bare condition as a boolean expression string.
    ///
    /// The condition is parsed as the WHERE clause of a placeholder query.
    /// An empty string is returned when no condition comes out of it.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`QueryParser::parse`].
    pub fn condition_to_expression(&self, text: &str) -> Result<String> {
        let query = self.parse(&format!("{PLACEHOLDER_QUERY}{text}"))?;
        Ok(query
            .where_clause
            .as_ref()
            .map(resolve_condition)
            .unwrap_or_default())
    }
}

/// Parses a query with default options.
///
/// # Errors
///
/// See [`QueryParser::parse`].
pub fn parse_query(sql: &str) -> Result<Query> {
    QueryParser::default().parse(sql)
}

/// Renders a bare condition as a boolean expression string with default
/// options.
///
/// # Errors
///
/// See [`QueryParser::condition_to_expression`].
pub fn parse_condition_to_expression(text: &str) -> Result<String> {
    QueryParser::default().condition_to_expression(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{JoinType, LimitSpec};

    #[test]
    fn test_parse_simple() {
        let query = parse_query("SELECT a, b FROM t WHERE a = 1 LIMIT 5").unwrap();
        assert_eq!(query.clause_names(), vec!["SELECT", "FROM", "WHERE", "LIMIT"]);
        assert_eq!(query.limit, Some(LimitSpec::new(5)));
    }

    #[test]
    fn test_no_clauses() {
        assert!(parse_query("hello world").unwrap().is_empty());
    }

    #[test]
    fn test_join_condition_parsed() {
        let query = parse_query("SELECT a FROM t LEFT JOIN u ON t.id = u.id").unwrap();
        let joins = query.join.unwrap();
        assert_eq!(joins[0].join_type, JoinType::Left);
        assert_eq!(
            joins[0].cond,
            Condition::comparison("=", Condition::literal("t.id"), Condition::literal("u.id"))
        );
    }

    #[test]
    fn test_join_without_condition_is_empty() {
        let query = parse_query("SELECT a FROM t JOIN u").unwrap();
        assert_eq!(query.join.unwrap()[0].cond, Condition::Empty);
    }

    #[test]
    fn test_repeated_where_combined_with_and() {
        let query = parse_query("SELECT a FROM t WHERE a = 1 WHERE b = 2").unwrap();
        assert!(matches!(
            query.where_clause,
            Some(Condition::Logical { logic: Logic::And, ref terms }) if terms.len() == 2
        ));
    }

    #[test]
    fn test_set_operation_slots() {
        let query =
            parse_query("SELECT a FROM b UNION ALL SELECT c FROM d INTERSECT (SELECT e FROM f)")
                .unwrap();
        assert_eq!(query.union_all.as_ref().map(Vec::len), Some(1));
        assert_eq!(query.intersect.as_ref().map(Vec::len), Some(1));
        assert!(query.union.is_none());
    }

    #[test]
    fn test_condition_to_expression() {
        assert_eq!(
            parse_condition_to_expression("a = 1 AND b = 2 OR c = 3").unwrap(),
            " a == 1 && b == 2 || c == 3"
        );
        assert_eq!(parse_condition_to_expression("").unwrap(), "");
    }

    #[test]
    fn test_options_reach_subselects() {
        let strict = QueryParser::new(ParserOptions::new().strict_conditions(true));
        assert!(strict.parse("SELECT a FROM t WHERE x IN (SELECT y FROM z WHERE q = )").is_err());
        assert!(parse_query("SELECT a FROM t WHERE x IN (SELECT y FROM z WHERE q = )").is_ok());
    }
}
