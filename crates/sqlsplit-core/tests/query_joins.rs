//! Tests for JOIN analysis and join normalization.

mod common;
use common::*;

use sqlsplit_core::ast::{Condition, JoinType, Logic};

#[test]
fn left_then_inner() {
    let joins = parse(
        "SELECT a FROM t LEFT JOIN u ON t.id = u.tid INNER JOIN v ON v.id = t.vid",
    )
    .join
    .unwrap();
    assert_eq!(joins.len(), 2);
    assert_eq!(joins[0].join_type, JoinType::Left);
    assert_eq!(joins[0].table, "u");
    assert_eq!(joins[1].join_type, JoinType::Inner);
    assert_eq!(joins[1].table, "v");
}

#[test]
fn grouped_by_type_not_source_order() {
    let joins = parse(
        "SELECT a FROM t RIGHT JOIN r ON 1 = 1 JOIN i ON 1 = 1 FULL JOIN f ON 1 = 1 \
         LEFT JOIN l ON 1 = 1",
    )
    .join
    .unwrap();
    let order: Vec<(JoinType, &str)> = joins
        .iter()
        .map(|j| (j.join_type, j.table.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            (JoinType::Left, "l"),
            (JoinType::Inner, "i"),
            (JoinType::Right, "r"),
            (JoinType::Full, "f"),
        ]
    );
}

#[test]
fn plain_join_is_inner() {
    let joins = parse("SELECT a FROM t JOIN u ON t.id = u.id").join.unwrap();
    assert_eq!(joins[0].join_type, JoinType::Inner);
}

#[test]
fn alias_and_condition() {
    let joins = parse("SELECT a FROM t left join orders as o on o.uid = t.id and o.total > 5")
        .join
        .unwrap();
    assert_eq!(joins[0].table, "orders");
    assert_eq!(joins[0].alias, "o");
    assert_eq!(
        joins[0].cond,
        Condition::Logical {
            logic: Logic::And,
            terms: vec![cmp("=", "o.uid", "t.id"), cmp(">", "o.total", "5")],
        }
    );
}

#[test]
fn join_without_condition() {
    let joins = parse("SELECT a FROM t JOIN u").join.unwrap();
    assert_eq!(joins[0].table, "u");
    assert_eq!(joins[0].cond, Condition::Empty);
}

#[test]
fn join_on_derived_table() {
    let joins = parse(
        "SELECT a FROM t1 JOIN (SELECT b FROM c JOIN d ON c.x = d.x) AS s ON s.b = t1.a",
    )
    .join
    .unwrap();
    assert_eq!(joins.len(), 1);
    assert_eq!(joins[0].table, "(SELECT b FROM c JOIN d ON c.x = d.x)");
    assert_eq!(joins[0].alias, "s");
    assert_eq!(joins[0].cond, cmp("=", "s.b", "t1.a"));
}

#[test]
fn join_keyword_spacing() {
    let joins = parse("SELECT a FROM t LEFT   JOIN u ON x = y").join.unwrap();
    assert_eq!(joins[0].join_type, JoinType::Left);
    assert_eq!(joins[0].table, "u");
}
