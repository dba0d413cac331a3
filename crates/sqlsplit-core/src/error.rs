//! Error types for query and condition parsing.

/// Errors raised while turning query text into a [`Query`](crate::ast::Query).
///
/// Only the first two variants can occur with default options. The
/// remaining ones are raised by condition parsing when
/// [`ParserOptions::strict_conditions`](crate::ParserOptions::strict_conditions)
/// is enabled; the lenient parser degrades to partial or empty nodes instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A clause name has no registered analyzer.
    #[error("Can't analyze statement {0}")]
    UnknownClause(String),

    /// An ORDER BY entry carries tokens that are not a direction.
    #[error("Invalid ORDER BY: {0}")]
    InvalidOrderBy(String),

    /// A condition token that cannot start an operand.
    #[error("Unexpected token '{found}' in condition at position {position}")]
    UnexpectedToken {
        /// Text of the offending token (empty at end of input).
        found: String,
        /// Byte offset in the condition text.
        position: usize,
    },

    /// A parenthesized group without its closing bracket.
    #[error("Unbalanced group in condition starting at position {position}")]
    UnbalancedGroup {
        /// Byte offset of the opening bracket.
        position: usize,
    },

    /// Tokens left over after a complete condition.
    #[error("Unexpected trailing input in condition at position {position}")]
    TrailingInput {
        /// Byte offset of the first unconsumed token.
        position: usize,
    },
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ParseError::UnknownClause("TRUNCATE".into()).to_string(),
            "Can't analyze statement TRUNCATE"
        );
        assert_eq!(
            ParseError::InvalidOrderBy("name NULLS FIRST".into()).to_string(),
            "Invalid ORDER BY: name NULLS FIRST"
        );
        assert_eq!(
            ParseError::UnbalancedGroup { position: 4 }.to_string(),
            "Unbalanced group in condition starting at position 4"
        );
    }
}
