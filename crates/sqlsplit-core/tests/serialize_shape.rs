//! Tests for the serialized mapping shape of parsed queries.

mod common;
use common::*;

use serde_json::{Value, json};

fn to_json(sql: &str) -> Value {
    serde_json::to_value(parse(sql)).expect("Serializable query")
}

#[test]
fn clause_names_as_keys() {
    let value = to_json("SELECT a AS x, b + c FROM t u ORDER BY a DESC LIMIT 3");
    assert_eq!(
        value,
        json!({
            "SELECT": [
                {"name": "a", "as": "x"},
                {"name": "b + c", "terms": ["b", "c"], "as": ""},
            ],
            "FROM": [{"table": "t u", "as": ""}],
            "ORDER BY": [{"column": "a", "order": "DESC"}],
            "LIMIT": {"nb": 3, "from": 0},
        })
    );
}

#[test]
fn join_and_conditions() {
    let value = to_json(
        "SELECT a FROM t LEFT JOIN u AS v ON t.id = v.id WHERE a = 1 AND b IS NULL",
    );
    assert_eq!(
        value["JOIN"],
        json!([{
            "table": "u",
            "as": "v",
            "cond": {"operator": "=", "left": "t.id", "right": "v.id"},
            "type": "left",
        }])
    );
    assert_eq!(
        value["WHERE"],
        json!({
            "logic": "AND",
            "terms": [
                {"operator": "=", "left": "a", "right": "1"},
                {"operator": "IS", "left": "b", "right": "NULL"},
            ],
        })
    );
}

#[test]
fn subselect_is_nested_map() {
    let value = to_json("SELECT a FROM t WHERE x IN (SELECT y FROM z)");
    assert_eq!(
        value["WHERE"]["right"],
        json!({
            "SELECT": [{"name": "y", "as": ""}],
            "FROM": [{"table": "z", "as": ""}],
        })
    );
}

#[test]
fn union_is_list_of_queries() {
    let value = to_json("SELECT a FROM b UNION SELECT c FROM d");
    assert_eq!(value["UNION"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["UNION"][0]["FROM"], json!([{"table": "d", "as": ""}]));
}

#[test]
fn absent_clauses_omitted() {
    let value = to_json("SELECT a FROM b");
    let keys: Vec<&String> = value.as_object().expect("Query map").keys().collect();
    assert_eq!(keys.len(), 2);
    assert!(value.get("WHERE").is_none());
}

#[test]
fn missing_join_condition_is_null() {
    let value = to_json("SELECT a FROM b JOIN c");
    assert_eq!(value["JOIN"][0]["cond"], Value::Null);
}
