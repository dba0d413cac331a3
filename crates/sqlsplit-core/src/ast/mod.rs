//! Abstract Syntax Tree (AST) types for queries and conditions.

mod condition;
mod query;

pub use condition::{Condition, Logic, Subquery};
pub use query::{
    FromItem, GroupByItem, JoinItem, JoinType, LimitSpec, OrderByItem, OrderDirection, PivotItem,
    Query, SelectItem,
};
