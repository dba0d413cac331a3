//! Parser configuration.

/// Options shared by a top-level parse and every sub-select it re-enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    /// Raise errors for malformed conditions instead of returning partial
    /// or empty nodes.
    pub strict_conditions: bool,
}

impl ParserOptions {
    /// Creates lenient options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strict_conditions: false,
        }
    }

    /// Sets strict condition parsing.
    #[must_use]
    pub const fn strict_conditions(mut self, strict: bool) -> Self {
        self.strict_conditions = strict;
        self
    }
}
