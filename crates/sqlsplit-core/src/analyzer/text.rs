//! Literal-aware string helpers shared by the clause analyzers.

/// Splits `text` on `separator`, ignoring separators inside quoted literals
/// (`'`, `"`, `` ` ``) or brackets. Every part is trimmed.
#[must_use]
pub fn protected_split(separator: char, text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;

    for c in text.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' | '`' => quote = Some(c),
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                _ if c == separator && depth == 0 => {
                    parts.push(current.trim().to_string());
                    current.clear();
                    continue;
                }
                _ => {}
            },
        }
        current.push(c);
    }
    parts.push(current.trim().to_string());
    parts
}

/// Finds `needle` (ASCII case-insensitive) at bracket depth zero, outside
/// `'...'`, `"..."` and `[...]` literals. Returns the first or the last
/// occurrence.
#[must_use]
pub fn find_outside_literal(haystack: &str, needle: &str, last: bool) -> Option<usize> {
    let bytes = haystack.as_bytes();
    let needle = needle.as_bytes();
    let mut closing: Option<u8> = None;
    let mut depth = 0usize;
    let mut found = None;

    for (i, &b) in bytes.iter().enumerate() {
        if let Some(close) = closing {
            if b == close {
                closing = None;
            }
            continue;
        }
        match b {
            b'\'' | b'"' => closing = Some(b),
            b'[' => closing = Some(b']'),
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => {
                let matched = bytes
                    .get(i..i + needle.len())
                    .is_some_and(|window| window.eq_ignore_ascii_case(needle));
                if matched {
                    if !last {
                        return Some(i);
                    }
                    found = Some(i);
                }
            }
            _ => {}
        }
    }
    found
}

/// Separates a trailing `AS <alias>` from a SELECT or FROM item.
///
/// The last ` AS ` outside a quoted or bracketed literal is used, so a name
/// may contain the text "as" inside a quoted identifier. Quotes (`'`, `"`)
/// and brackets (`[...]`) around the alias are removed. The alias is empty
/// when there is none.
#[must_use]
pub fn get_name_and_alias(item: &str) -> (String, String) {
    let Some(pos) = find_outside_literal(item, " AS ", true) else {
        return (item.trim().to_string(), String::new());
    };

    let alias = item[pos + 4..].trim();
    if alias.is_empty() {
        return (item.trim().to_string(), String::new());
    }

    let unquoted = [('\'', '\''), ('"', '"'), ('[', ']')]
        .iter()
        .find_map(|&(open, close)| {
            alias
                .strip_prefix(open)
                .and_then(|rest| rest.strip_suffix(close))
        })
        .unwrap_or(alias);

    (item[..pos].trim().to_string(), unquoted.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_split_brackets_and_quotes() {
        assert_eq!(
            protected_split(',', "a, COUNT(b, c), 'x,y', `p,q`"),
            vec!["a", "COUNT(b, c)", "'x,y'", "`p,q`"]
        );
    }

    #[test]
    fn test_protected_split_empty_parts() {
        assert_eq!(protected_split(',', "a,,b,"), vec!["a", "", "b", ""]);
        assert_eq!(protected_split(',', ""), vec![""]);
    }

    #[test]
    fn test_find_outside_literal() {
        assert_eq!(find_outside_literal("x as y AS z", " AS ", false), Some(1));
        assert_eq!(find_outside_literal("x as y AS z", " AS ", true), Some(6));
        assert_eq!(find_outside_literal("'a AS b'", " AS ", true), None);
        assert_eq!(find_outside_literal("[a AS b] AS c", " AS ", true), Some(8));
        assert_eq!(find_outside_literal("f(a AS b) AS c", " AS ", false), Some(9));
        assert_eq!(find_outside_literal("f(a AS b)", " AS ", true), None);
    }

    #[test]
    fn test_alias_inside_brackets_ignored() {
        assert_eq!(
            get_name_and_alias("CAST(x AS INT)"),
            ("CAST(x AS INT)".to_string(), String::new())
        );
        assert_eq!(
            get_name_and_alias("CAST(x AS INT) AS n"),
            ("CAST(x AS INT)".to_string(), "n".to_string())
        );
    }

    #[test]
    fn test_alias_quote_styles() {
        for item in ["x AS 'y'", "x AS \"y\"", "x AS [y]", "x AS y", "x as y"] {
            assert_eq!(
                get_name_and_alias(item),
                ("x".to_string(), "y".to_string()),
                "{item}"
            );
        }
    }

    #[test]
    fn test_alias_inside_literal_ignored() {
        assert_eq!(
            get_name_and_alias("'has AS inside' AS label"),
            ("'has AS inside'".to_string(), "label".to_string())
        );
        assert_eq!(
            get_name_and_alias("[col AS x]"),
            ("[col AS x]".to_string(), String::new())
        );
    }

    #[test]
    fn test_no_alias() {
        assert_eq!(get_name_and_alias("users"), ("users".to_string(), String::new()));
        assert_eq!(get_name_and_alias("basket"), ("basket".to_string(), String::new()));
    }
}
