#![allow(dead_code)]

use sqlsplit_core::ast::{Condition, Query};
use sqlsplit_core::{
    ParseError, ParserOptions, QueryParser, parse_condition_to_expression, parse_query,
};

pub fn parse(sql: &str) -> Query {
    parse_query(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse_query(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn strict() -> QueryParser {
    QueryParser::new(ParserOptions::new().strict_conditions(true))
}

pub fn parse_strict_err(sql: &str) -> ParseError {
    strict()
        .parse(sql)
        .expect_err(&format!("Expected strict parse error for: {sql}"))
}

pub fn expression(text: &str) -> String {
    parse_condition_to_expression(text)
        .unwrap_or_else(|e| panic!("Failed to resolve: {text}\nError: {e:?}"))
}

pub fn where_of(sql: &str) -> Condition {
    parse(sql)
        .where_clause
        .unwrap_or_else(|| panic!("Expected WHERE in: {sql}"))
}

pub fn lit(text: &str) -> Condition {
    Condition::literal(text)
}

pub fn cmp(op: &str, left: &str, right: &str) -> Condition {
    Condition::comparison(op, lit(left), lit(right))
}
