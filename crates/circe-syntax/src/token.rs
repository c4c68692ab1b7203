//! Token definitions produced by the Circe lexer.
//!
//! The language has very few lexical categories:
//!
//! - **Punctuation**: `(` and `)`
//! - **Numbers**: `-?[0-9]+`, kept as raw text
//! - **Symbols**: the four arithmetic operators `+ - * /`
//! - **Special**: end-of-input marker
//!
//! # Examples
//!
//! ```rust
//! use circe_syntax::{Token, TokenKind};
//!
//! let open = Token { kind: TokenKind::LParen, line: 1, col: 1 };
//! let plus = Token { kind: TokenKind::Symbol("+".to_string()), line: 1, col: 2 };
//! let one = Token { kind: TokenKind::Number("1".to_string()), line: 1, col: 4 };
//! assert_eq!(plus.kind.describe(), "'+'");
//! # let _ = (open, one);
//! ```

/// Token types that can be produced by the Circe lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeric literal, exactly as written.
    ///
    /// The text is not converted here: a literal that does not fit in a
    /// 64-bit integer still lexes, and the reader turns it into an
    /// `Invalid number` error value.
    ///
    /// Examples: `42`, `-7`, `99999999999999999999`
    Number(String),

    /// An operator symbol: one of `+`, `-`, `*`, `/`
    Symbol(String),

    /// Left parenthesis `(`
    LParen,

    /// Right parenthesis `)`
    RParen,

    /// End-of-input marker - indicates no more tokens
    Eof,
}

impl TokenKind {
    /// Short human-readable rendering used in parse error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Number(text) => format!("number {}", text),
            TokenKind::Symbol(sym) => format!("'{}'", sym),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// A token with its source location.
///
/// Positions are 1-based and point at the first character of the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type and semantic content of this token
    pub kind: TokenKind,

    /// Line number in the source (1-based)
    pub line: usize,

    /// Column number in the source (1-based)
    pub col: usize,
}
