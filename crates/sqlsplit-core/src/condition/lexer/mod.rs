//! Condition lexer
//!
//! A character scanner producing the tokens of a WHERE, HAVING or ON
//! condition.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::Lexer;
