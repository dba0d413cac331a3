//! Condition tokenizer implementation.

use super::{Span, Token, TokenKind};
use crate::ast::Logic;

/// Words read as comparison operators.
const KEYWORD_OPERATORS: &[&str] = &["IN", "IS", "NOT", "LIKE"];

/// A lexer that tokenizes a condition.
pub struct Lexer<'a> {
    /// The condition text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

const fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"' | '`')
}

const fn is_comparison_char(c: char) -> bool {
    matches!(c, '!' | '=' | '<' | '>')
}

fn is_word_start(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given condition.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        let span = Span::new(self.start, self.pos);
        Token::new(kind, span.slice(self.input), span)
    }

    /// Scans a word: everything up to an unbracketed space or `)`, or a
    /// comparison character. Quoted parts and bracketed arguments are kept
    /// whole, so `COUNT(a, b)` and `name='x y'` style fragments stay together.
    fn scan_word(&mut self) -> Token {
        let mut quote: Option<char> = None;
        let mut depth = 0i32;

        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            match quote {
                Some(q) if c == q => quote = None,
                Some(_) => {
                    self.advance();
                    continue;
                }
                None if is_quote(c) => {
                    quote = Some(c);
                    self.advance();
                    continue;
                }
                None => {}
            }

            if c == ')' && depth <= 0 {
                break;
            }
            if is_comparison_char(c) || (c.is_whitespace() && depth <= 0) {
                break;
            }
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            self.advance();
        }

        let mut token = self.make_token(TokenKind::Word);
        let upper = token.value.to_ascii_uppercase();
        if let Some(logic) = Logic::from_keyword(&upper) {
            token.kind = TokenKind::Logic;
            token.value = logic.as_str().to_string();
        } else if KEYWORD_OPERATORS.contains(&upper.as_str()) {
            token.kind = TokenKind::Operator;
            token.value = upper;
        }
        token
    }

    /// Consumes a quoted segment starting at the current position. A doubled
    /// quote inside the segment is an escaped quote.
    fn consume_quoted(&mut self, quote: char) {
        self.advance();
        while let Some(c) = self.advance() {
            if c == quote {
                if self.peek() == Some(quote) {
                    self.advance();
                    continue;
                }
                break;
            }
        }
    }

    /// Scans a quoted literal. A quoted identifier followed by `.` and
    /// another part (`"t"."col"`, `` `t`.col ``) becomes a single word.
    fn scan_quoted(&mut self, quote: char) -> Token {
        self.consume_quoted(quote);

        let mut kind = TokenKind::String;
        while self.peek() == Some('.') {
            match self.peek_next() {
                Some(q) if is_quote(q) => {
                    self.advance();
                    self.consume_quoted(q);
                }
                Some(c) if is_word_start(c) => {
                    self.advance();
                    while self.peek().is_some_and(is_word_start) {
                        self.advance();
                    }
                }
                _ => break,
            }
            kind = TokenKind::Word;
        }
        self.make_token(kind)
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
        self.start = self.pos;

        let Some(c) = self.peek() else {
            return self.make_token(TokenKind::Eot);
        };

        match c {
            c if is_word_start(c) => self.scan_word(),
            c if is_quote(c) => self.scan_quoted(c),
            '(' | ')' => {
                self.advance();
                self.make_token(TokenKind::Group)
            }
            '?' => {
                self.advance();
                self.make_token(TokenKind::BindVariable)
            }
            '+' | '-' | '*' | '/' | '%' => {
                self.advance();
                self.make_token(TokenKind::MathOperator)
            }
            c if is_comparison_char(c) => {
                self.advance();
                let pair = matches!(
                    (c, self.peek()),
                    ('<' | '>' | '!', Some('=')) | ('<', Some('>'))
                );
                if pair {
                    self.advance();
                }
                self.make_token(TokenKind::Operator)
            }
            _ => {
                self.advance();
                self.make_token(TokenKind::Empty)
            }
        }
    }

    /// Tokenizes the entire condition, ending with [`TokenKind::Eot`].
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eot = token.is_eot();
            tokens.push(token);
            if is_eot {
                break;
            }
        }
        tokens
    }
}
