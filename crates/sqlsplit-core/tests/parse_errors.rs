//! Tests for parse errors, lenient and strict.

mod common;
use common::*;

use sqlsplit_core::ast::{Condition, Logic};
use sqlsplit_core::{ParseError, analyze_named};

#[test]
fn error_order_by_extra_tokens() {
    assert_eq!(
        parse_err("SELECT a FROM t ORDER BY a NULLS LAST"),
        ParseError::InvalidOrderBy("a NULLS LAST".to_string())
    );
}

#[test]
fn error_unknown_clause_name() {
    assert_eq!(
        analyze_named("VACUUM", "t").unwrap_err(),
        ParseError::UnknownClause("VACUUM".to_string())
    );
}

#[test]
fn error_in_subselect_propagates() {
    assert!(matches!(
        parse_err("SELECT a FROM t WHERE x IN (SELECT y FROM z ORDER BY y sideways)"),
        ParseError::InvalidOrderBy(_)
    ));
}

#[test]
fn error_in_set_operation_propagates() {
    assert!(matches!(
        parse_err("SELECT a FROM b UNION SELECT c FROM d ORDER BY c up"),
        ParseError::InvalidOrderBy(_)
    ));
}

#[test]
fn lenient_missing_operand_is_empty() {
    assert_eq!(
        where_of("SELECT a FROM t WHERE a = AND b = 1"),
        Condition::comparison("=", lit("a"), Condition::Empty)
            .chain(Logic::And, cmp("=", "b", "1"))
    );
}

#[test]
fn lenient_group_closed_at_end_of_input() {
    assert_eq!(where_of("SELECT a FROM t WHERE (a = 1"), cmp("=", "a", "1"));
    assert_eq!(
        where_of("SELECT a FROM t WHERE (a = 1 OR b = 2"),
        cmp("=", "a", "1").chain(Logic::Or, cmp("=", "b", "2"))
    );
}

#[test]
fn lenient_trailing_tokens_dropped() {
    assert_eq!(where_of("SELECT a FROM t WHERE a = 1 )"), cmp("=", "a", "1"));
    assert_eq!(where_of("SELECT a FROM t WHERE a = 1 b c"), cmp("=", "a", "1"));
}

#[test]
fn strict_unbalanced_group() {
    assert_eq!(
        parse_strict_err("SELECT a FROM t WHERE (a = 1"),
        ParseError::UnbalancedGroup { position: 0 }
    );
}

#[test]
fn strict_missing_operand() {
    assert!(matches!(
        parse_strict_err("SELECT a FROM t WHERE a = AND b = 1"),
        ParseError::UnexpectedToken { ref found, position: 4 } if found == "AND"
    ));
}

#[test]
fn strict_trailing_input() {
    assert_eq!(
        parse_strict_err("SELECT a FROM t WHERE a = 1 )"),
        ParseError::TrailingInput { position: 6 }
    );
}

#[test]
fn strict_applies_to_join_conditions() {
    assert!(matches!(
        parse_strict_err("SELECT a FROM t JOIN u ON t.id ="),
        ParseError::UnexpectedToken { .. }
    ));
}

#[test]
fn strict_accepts_well_formed_conditions() {
    let query = strict()
        .parse("SELECT a FROM t JOIN u ON t.id = u.id WHERE (a = 1 OR b IN (1, 2)) AND c IS NULL")
        .unwrap();
    assert!(query.where_clause.is_some());
}

#[test]
fn error_messages() {
    assert_eq!(
        parse_err("SELECT a FROM t ORDER BY a b").to_string(),
        "Invalid ORDER BY: a b"
    );
}
