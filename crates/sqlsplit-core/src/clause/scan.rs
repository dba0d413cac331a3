//! Bracket- and quote-aware keyword scanning.
//!
//! Keywords are only recognized at bracket depth zero and outside quoted
//! literals, so sub-queries and string contents never produce clause
//! boundaries. The scan works on bytes: every keyword is ASCII, so match
//! positions are always valid `str` boundaries.

use super::keyword::Clause;

/// One located keyword occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseMatch {
    /// The clause the keyword introduces.
    pub clause: Clause,
    /// Byte offset of the first keyword character.
    pub start: usize,
    /// Byte offset just past the last keyword character.
    pub end: usize,
}

const fn is_quote(b: u8) -> bool {
    matches!(b, b'\'' | b'"' | b'`')
}

const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

/// Finds every top-level keyword occurrence, left to right.
///
/// At each candidate position the longest matching spelling wins; the scan
/// then resumes after it, so a shorter spelling nested in a longer one
/// (`JOIN` inside `INNER JOIN`) is never reported twice.
#[must_use]
pub fn find_top_level_keywords(text: &str, keywords: &[(&str, Clause)]) -> Vec<ClauseMatch> {
    let bytes = text.as_bytes();
    let mut matches = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        if let Some(q) = quote {
            if b == q {
                quote = None;
            }
            pos += 1;
            continue;
        }

        match b {
            _ if is_quote(b) => quote = Some(b),
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && (pos == 0 || !is_word_byte(bytes[pos - 1])) => {
                if let Some((end, clause)) = longest_keyword_at(bytes, pos, keywords) {
                    matches.push(ClauseMatch {
                        clause,
                        start: pos,
                        end,
                    });
                    pos = end;
                    continue;
                }
            }
            _ => {}
        }
        pos += 1;
    }

    matches
}

fn longest_keyword_at(
    bytes: &[u8],
    pos: usize,
    keywords: &[(&str, Clause)],
) -> Option<(usize, Clause)> {
    keywords
        .iter()
        .filter_map(|(spelling, clause)| {
            match_keyword(bytes, pos, spelling).map(|end| (end, *clause))
        })
        .max_by_key(|(end, _)| *end)
}

/// Matches `spelling` at `pos`, returning the end offset.
///
/// The keyword must be followed by whitespace or `(`; a keyword at the very
/// end of the input introduces nothing and is not matched.
fn match_keyword(bytes: &[u8], pos: usize, spelling: &str) -> Option<usize> {
    let mut i = pos;
    for (n, word) in spelling.split(' ').enumerate() {
        if n > 0 {
            let gap_start = i;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i == gap_start {
                return None;
            }
        }
        let candidate = bytes.get(i..i + word.len())?;
        if !candidate.eq_ignore_ascii_case(word.as_bytes()) {
            return None;
        }
        i += word.len();
    }

    match bytes.get(i) {
        Some(b) if b.is_ascii_whitespace() || *b == b'(' => Some(i),
        _ => None,
    }
}

/// Returns the offset of the bracket closing the one at `open`, skipping
/// brackets inside quoted literals.
#[must_use]
pub fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'(') {
        return None;
    }
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    for (i, &b) in bytes.iter().enumerate().skip(open) {
        if let Some(q) = quote {
            if b == q {
                quote = None;
            }
            continue;
        }
        match b {
            _ if is_quote(b) => quote = Some(b),
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Returns true when the whole of `text` is one balanced bracket group.
#[must_use]
pub fn is_wrapped(text: &str) -> bool {
    text.starts_with('(') && matching_paren(text, 0) == Some(text.len() - 1)
}

/// Strips every layer of brackets enclosing the whole of `text`.
#[must_use]
pub fn unwrap_parens(text: &str) -> &str {
    let mut inner = text.trim();
    while is_wrapped(inner) {
        inner = inner[1..inner.len() - 1].trim();
    }
    inner
}
