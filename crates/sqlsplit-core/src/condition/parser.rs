//! Recursive descent parser for conditions.
//!
//! ```text
//! logical    := condition ( (AND | OR) condition )*
//! condition  := base [ operator [operator] base ]
//! base       := word | string | ? | [mathop] word | group
//! group      := '(' ( SELECT ... | in-list | logical ) ')'
//! ```
//!
//! A group following an `IN` operator is kept as a literal list; a group
//! starting with `SELECT` is handed back to the query parser.

use tracing::debug;

use super::lexer::{Lexer, Span, Token, TokenKind};
use crate::analyzer::protected_split;
use crate::ast::{Condition, Logic, Subquery};
use crate::error::{ParseError, Result};
use crate::parser::QueryParser;

/// Parses one condition text. Sub-selects are parsed with `queries`.
pub struct CondParser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    current: Token,
    queries: &'a QueryParser,
}

impl<'a> CondParser<'a> {
    /// Creates a parser for `source`.
    #[must_use]
    pub fn new(source: &'a str, queries: &'a QueryParser) -> Self {
        let mut lexer = Lexer::new(source);
        let current = Self::next_significant(&mut lexer);
        Self {
            source,
            lexer,
            current,
            queries,
        }
    }

    fn next_significant(lexer: &mut Lexer<'_>) -> Token {
        loop {
            let token = lexer.next_token();
            if token.kind != TokenKind::Empty {
                return token;
            }
        }
    }

    fn strict(&self) -> bool {
        self.queries.options().strict_conditions
    }

    fn advance(&mut self) -> Token {
        let next = Self::next_significant(&mut self.lexer);
        std::mem::replace(&mut self.current, next)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Parses the whole condition.
    ///
    /// An empty text gives [`Condition::Empty`].
    ///
    /// # Errors
    ///
    /// With strict options, returns an error for a token that cannot start
    /// an operand, an unclosed bracket or leftover tokens. A sub-select
    /// propagates its own parse error in either mode.
    pub fn parse(mut self) -> Result<Condition> {
        if self.current.is_eot() {
            return Ok(Condition::Empty);
        }

        let condition = self.parse_logical()?;
        if !self.current.is_eot() {
            self.leftover()?;
        }
        Ok(condition)
    }

    /// Reports unconsumed tokens at the current position.
    fn leftover(&self) -> Result<()> {
        let position = self.current.span.start;
        if self.strict() {
            return Err(ParseError::TrailingInput { position });
        }
        debug!(
            position,
            rest = self.source[position..].trim(),
            "Ignoring trailing condition tokens"
        );
        Ok(())
    }

    fn parse_logical(&mut self) -> Result<Condition> {
        let mut condition = self.parse_condition()?;
        while self.check(TokenKind::Logic) {
            let Some(logic) = Logic::from_keyword(&self.current.value) else {
                break;
            };
            self.advance();
            let right = self.parse_condition()?;
            condition = condition.chain(logic, right);
        }
        Ok(condition)
    }

    fn parse_condition(&mut self) -> Result<Condition> {
        // Prefix operator, as in `NOT flag`.
        let left = if self.check(TokenKind::Operator) {
            Condition::Empty
        } else {
            self.parse_base("")?
        };

        if !self.check(TokenKind::Operator) {
            return Ok(left);
        }

        let mut operator = self.advance().value;
        if self.check(TokenKind::Operator) {
            operator.push(' ');
            operator.push_str(&self.advance().value);
        }
        let right = self.parse_base(&operator)?;
        Ok(Condition::comparison(operator, left, right))
    }

    fn parse_base(&mut self, operator: &str) -> Result<Condition> {
        match self.current.kind {
            TokenKind::Word | TokenKind::String | TokenKind::BindVariable => {
                let text = self.advance().value;
                self.extend_arithmetic(text).map(Condition::Literal)
            }
            TokenKind::MathOperator if matches!(self.current.value.as_str(), "-" | "+") => {
                let sign = self.advance().value;
                match self.current.kind {
                    TokenKind::Word | TokenKind::BindVariable => {
                        let text = format!("{sign}{}", self.advance().value);
                        self.extend_arithmetic(text).map(Condition::Literal)
                    }
                    _ => self.unexpected(),
                }
            }
            TokenKind::Group if self.current.is_open_group() => self.parse_group(operator),
            _ => self.unexpected(),
        }
    }

    fn unexpected(&self) -> Result<Condition> {
        let position = self.current.span.start;
        if self.strict() {
            return Err(ParseError::UnexpectedToken {
                found: self.current.value.clone(),
                position,
            });
        }
        debug!(position, token = %self.current.value, "Condition operand missing");
        Ok(Condition::Empty)
    }

    /// Appends a run of arithmetic (`a + b * (c - 1)`) to an operand.
    fn extend_arithmetic(&mut self, mut text: String) -> Result<String> {
        if !self.check(TokenKind::MathOperator) {
            return Ok(text);
        }
        loop {
            match self.current.kind {
                TokenKind::MathOperator
                | TokenKind::Word
                | TokenKind::String
                | TokenKind::BindVariable => {
                    text.push(' ');
                    text.push_str(&self.advance().value);
                }
                TokenKind::Group if self.current.is_open_group() => {
                    let open = self.advance().span;
                    let close = self.close_group(open)?;
                    text.push(' ');
                    text.push_str(self.slice(open.start, close.end));
                }
                _ => return Ok(text),
            }
        }
    }

    /// Consumes tokens up to and including the bracket closing `open`, with
    /// the current token just inside the group. Returns the span of the
    /// closing bracket; an unclosed group in lenient mode gets an empty span
    /// at the end of the text.
    fn close_group(&mut self, open: Span) -> Result<Span> {
        let mut depth = 1usize;
        loop {
            if self.current.is_eot() {
                if self.strict() {
                    return Err(ParseError::UnbalancedGroup {
                        position: open.start,
                    });
                }
                debug!(position = open.start, "Unclosed group in condition");
                return Ok(Span::new(self.source.len(), self.source.len()));
            }
            if self.current.is_open_group() {
                depth += 1;
            } else if self.current.is_close_group() {
                depth -= 1;
                if depth == 0 {
                    return Ok(self.advance().span);
                }
            }
            self.advance();
        }
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source[start..end.max(start)].trim()
    }

    fn parse_group(&mut self, operator: &str) -> Result<Condition> {
        let open = self.advance().span;

        if self.check(TokenKind::Word) && self.current.value.eq_ignore_ascii_case("SELECT") {
            let start = self.current.span.start;
            let close = self.close_group(open)?;
            let sql = self.slice(start, close.start);
            debug!(sql, "Parsing sub-select in condition");
            let query = self.queries.parse(sql)?;
            return Ok(Condition::Subquery(Box::new(Subquery {
                sql: sql.to_string(),
                query,
            })));
        }

        if operator == "IN" || operator.ends_with(" IN") {
            let close = self.close_group(open)?;
            let list = protected_split(',', self.slice(open.end, close.start))
                .into_iter()
                .filter(|item| !item.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            return Ok(Condition::Literal(list));
        }

        let inner = self.parse_logical()?;
        let rest_start = self.current.span.start;
        let leftover = !self.current.is_close_group() && !self.current.is_eot();

        match inner {
            Condition::Literal(text) => {
                let close = self.close_group(open)?;
                let rest = self.slice(rest_start, close.start);
                let grouped = if rest.is_empty() {
                    format!("({text})")
                } else {
                    format!("({text} {rest})")
                };
                self.extend_arithmetic(grouped).map(Condition::Literal)
            }
            inner => {
                if leftover {
                    self.leftover()?;
                }
                self.close_group(open)?;
                Ok(inner)
            }
        }
    }
}

/// Parses a WHERE, HAVING or JOIN ON condition.
///
/// # Errors
///
/// See [`CondParser::parse`].
pub fn parse_condition(text: &str, queries: &QueryParser) -> Result<Condition> {
    CondParser::new(text, queries).parse()
}
