//! Set-operation normalization.

use std::borrow::Cow;

use super::keyword::SET_OPERATION_KEYWORDS;
use super::scan::{find_top_level_keywords, is_wrapped};

/// Rewrites every top-level `UNION ALL`, `UNION`, `INTERSECT` and `EXCEPT`
/// so that its right-hand operand is bracketed: `<KEYWORD> (<operand>) `.
///
/// Only the text before the first set operation stays unbracketed, which
/// keeps the clause keywords of every later operand away from the clause
/// locator. Operands that are already one bracket group are kept as they are.
/// Text without a set operation is returned unchanged.
#[must_use]
pub fn normalize_set_operations(text: &str) -> Cow<'_, str> {
    let matches = find_top_level_keywords(text, SET_OPERATION_KEYWORDS);
    let Some(first) = matches.first() else {
        return Cow::Borrowed(text);
    };

    let mut normalized = String::with_capacity(text.len() + 4 * matches.len());
    normalized.push_str(&text[..first.start]);

    for (i, m) in matches.iter().enumerate() {
        let operand_end = matches.get(i + 1).map_or(text.len(), |next| next.start);
        let operand = text[m.end..operand_end].trim();

        normalized.push_str(m.clause.as_str());
        normalized.push(' ');
        if is_wrapped(operand) {
            normalized.push_str(operand);
        } else {
            normalized.push('(');
            normalized.push_str(operand);
            normalized.push(')');
        }
        normalized.push(' ');
    }

    Cow::Owned(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_set_operation_is_borrowed() {
        let sql = "SELECT a FROM b WHERE c = 1";
        assert!(matches!(normalize_set_operations(sql), Cow::Borrowed(s) if s == sql));
    }

    #[test]
    fn test_union_operand_bracketed() {
        assert_eq!(
            normalize_set_operations("SELECT a FROM b UNION SELECT c FROM d"),
            "SELECT a FROM b UNION (SELECT c FROM d) "
        );
    }

    #[test]
    fn test_chain_of_operations() {
        assert_eq!(
            normalize_set_operations(
                "SELECT a FROM b union all SELECT c FROM d EXCEPT SELECT e FROM f"
            ),
            "SELECT a FROM b UNION ALL (SELECT c FROM d) EXCEPT (SELECT e FROM f) "
        );
    }

    #[test]
    fn test_bracketed_operand_kept() {
        assert_eq!(
            normalize_set_operations("SELECT a FROM b INTERSECT (SELECT c FROM d)"),
            "SELECT a FROM b INTERSECT (SELECT c FROM d) "
        );
    }

    #[test]
    fn test_nested_set_operation_untouched() {
        let sql = "SELECT a FROM (SELECT b FROM c UNION SELECT d FROM e) AS t";
        assert_eq!(normalize_set_operations(sql), sql);
    }
}
