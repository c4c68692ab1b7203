//! Circe lexer: converts source text into tokens.
use circe_syntax::error::{error_at, Result};
use circe_syntax::token::{Token, TokenKind};
use tracing::trace;

/// Streaming character scanner that produces tokens with positions.
pub struct Lexer {
    src: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    /// Create a new lexer over the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            src: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }
    fn peek_next(&self) -> Option<char> {
        self.src.get(self.pos + 1).copied()
    }
    fn advance(&mut self) -> Option<char> {
        let ch = self.src.get(self.pos).copied();
        if let Some(c) = ch {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> Token {
        let start_line = self.line;
        let start_col = self.col;
        let mut s = String::new();
        if self.peek() == Some('-') {
            s.push('-');
            self.advance();
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
        Token {
            kind: TokenKind::Number(s),
            line: start_line,
            col: start_col,
        }
    }

    /// Tokenize the entire input into a vector of tokens ending with Eof.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let line = self.line;
            let col = self.col;
            let kind = match self.peek() {
                None => {
                    tokens.push(Token {
                        kind: TokenKind::Eof,
                        line,
                        col,
                    });
                    break;
                }
                Some(c) if c.is_ascii_digit() => {
                    tokens.push(self.read_number());
                    continue;
                }
                // a minus glued to a digit is a negative literal, not the operator
                Some('-') if self.peek_next().map_or(false, |n| n.is_ascii_digit()) => {
                    tokens.push(self.read_number());
                    continue;
                }
                Some('(') => TokenKind::LParen,
                Some(')') => TokenKind::RParen,
                Some(c @ ('+' | '-' | '*' | '/')) => TokenKind::Symbol(c.to_string()),
                Some(other) => {
                    return error_at(line, col, format!("Unexpected character '{}'", other));
                }
            };
            self.advance();
            tokens.push(Token { kind, line, col });
        }
        trace!(count = tokens.len(), "tokenized input");
        Ok(tokens)
    }
}
