//! Token types for the condition lexer.

use super::Span;

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier, number, function call or dotted quoted identifier.
    Word,
    /// Quoted literal, quotes included.
    String,
    /// `(` or `)`.
    Group,
    /// Comparison operator or one of `IN`, `IS`, `NOT`, `LIKE`.
    Operator,
    /// `+ - * / %`
    MathOperator,
    /// `AND` or `OR`.
    Logic,
    /// `?`
    BindVariable,
    /// End of input.
    Eot,
    /// A skipped character.
    Empty,
}

/// A token with its text and span in the condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Token text. Keyword operators and connectives are upper-cased.
    pub value: String,
    /// The location in the condition text.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub fn is_eot(&self) -> bool {
        self.kind == TokenKind::Eot
    }

    /// Returns true for an opening bracket.
    #[must_use]
    pub fn is_open_group(&self) -> bool {
        self.kind == TokenKind::Group && self.value == "("
    }

    /// Returns true for a closing bracket.
    #[must_use]
    pub fn is_close_group(&self) -> bool {
        self.kind == TokenKind::Group && self.value == ")"
    }
}
