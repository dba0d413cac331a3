//! Rendering of conditions as boolean expression strings.
//!
//! `a = 1 AND b = 2 OR c = 3` renders as `" a == 1 && b == 2 || c == 3"`:
//! every comparison is prefixed with a space, `=` becomes `==`, and the
//! connectives become `&&` and `||`. The result is meant for display or for
//! an expression evaluator, not for round-tripping.

use crate::ast::{Condition, Logic};

/// Renders a condition as a boolean expression.
///
/// A nested chain is rendered in place without a connective in front of it,
/// so `(a = 1 OR b = 2) AND c = 3` gives `" a == 1 || b == 2 && c == 3"`.
#[must_use]
pub fn resolve_condition(condition: &Condition) -> String {
    match condition {
        Condition::Logical { logic, terms } => resolve_terms(*logic, terms),
        other => resolve_terms(Logic::Or, std::slice::from_ref(other)),
    }
}

const fn connective(logic: Logic) -> &'static str {
    match logic {
        Logic::And => " &&",
        Logic::Or => " ||",
    }
}

fn resolve_terms(logic: Logic, terms: &[Condition]) -> String {
    let mut out = String::new();
    for term in terms {
        if let Condition::Logical {
            logic: inner,
            terms: inner_terms,
        } = term
        {
            out.push_str(&resolve_terms(*inner, inner_terms));
            continue;
        }

        let rendered = render_term(term);
        if rendered.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(connective(logic));
        }
        out.push_str(&rendered);
    }
    out
}

fn render_term(term: &Condition) -> String {
    match term {
        Condition::Comparison {
            operator,
            left,
            right,
        } => {
            let operator = if operator == "=" { "==" } else { operator.as_str() };
            let left = render_operand(left);
            let right = render_operand(right);
            let body: Vec<&str> = [left.as_str(), operator, right.as_str()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect();
            format!(" {}", body.join(" "))
        }
        Condition::Empty => String::new(),
        other => format!(" {}", render_operand(other)),
    }
}

fn render_operand(operand: &Condition) -> String {
    match operand {
        Condition::Literal(text) => text.clone(),
        Condition::Subquery(sub) => format!("({})", sub.sql),
        Condition::Empty => String::new(),
        nested => resolve_condition(nested).trim_start().to_string(),
    }
}
