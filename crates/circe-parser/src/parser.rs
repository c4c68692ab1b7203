//! Recursive-descent parser producing the generic labeled tree.
//!
//! Grammar:
//!
//! ```text
//! number : /-?[0-9]+/ ;
//! symbol : '+' | '-' | '*' | '/' ;
//! sexpr  : '(' <expr>* ')' ;
//! expr   : <number> | <symbol> | <sexpr> ;
//! circe  : /^/ <expr>* /$/ ;
//! ```

use circe_syntax::error::{error_at, Result};
use circe_syntax::token::{Token, TokenKind};
use circe_syntax::tree::{Node, CHAR_TAG, NUMBER_TAG, REGEX_TAG, ROOT_TAG, SEXPR_TAG, SYMBOL_TAG};
use tracing::debug;

/// Deepest s-expression nesting accepted.
///
/// Reading, evaluating and dropping a tree all recurse once per level.
pub const MAX_DEPTH: usize = 512;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    /// Create a parser over a token stream ending with `Eof`.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map_or(true, |tk| tk.kind != TokenKind::Eof) {
            let (line, col) = tokens.last().map_or((1, 1), |tk| (tk.line, tk.col + 1));
            tokens.push(Token {
                kind: TokenKind::Eof,
                line,
                col,
            });
        }
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> &Token {
        // never steps past the trailing Eof
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let tk = self.peek().clone();
        if tk.kind != TokenKind::Eof {
            self.pos += 1;
        }
        tk
    }

    fn at_eof(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Parse a whole input line: zero or more expressions between anchors.
    pub fn parse_program(&mut self) -> Result<Node> {
        let start = self.peek();
        let mut children = vec![Node::leaf(REGEX_TAG, "", start.line, start.col)];
        while !self.at_eof() {
            children.push(self.parse_expr()?);
        }
        let end = self.peek();
        children.push(Node::leaf(REGEX_TAG, "", end.line, end.col));
        let root = Node::branch(ROOT_TAG, children);
        debug!(nodes = root.size(), "parsed program");
        Ok(root)
    }

    /// Parse a single expression.
    pub fn parse_expr(&mut self) -> Result<Node> {
        let tk = self.advance();
        match tk.kind {
            TokenKind::Number(text) => Ok(Node::leaf(NUMBER_TAG, text, tk.line, tk.col)),
            TokenKind::Symbol(sym) => Ok(Node::leaf(SYMBOL_TAG, sym, tk.line, tk.col)),
            TokenKind::LParen => self.parse_sexpr(tk.line, tk.col),
            other => {
                let found = other.describe();
                let msg = match other {
                    TokenKind::RParen => format!("Unexpected {}", found),
                    _ => format!("Expected expression, found {}", found),
                };
                error_at(tk.line, tk.col, msg)
            }
        }
    }

    fn parse_sexpr(&mut self, line: usize, col: usize) -> Result<Node> {
        if self.depth >= MAX_DEPTH {
            return error_at(line, col, "Expression nested too deeply");
        }
        self.depth += 1;
        let mut children = vec![Node::leaf(CHAR_TAG, "(", line, col)];
        loop {
            let next = self.peek().kind.clone();
            match next {
                TokenKind::RParen => {
                    let close = self.advance();
                    children.push(Node::leaf(CHAR_TAG, ")", close.line, close.col));
                    break;
                }
                TokenKind::Eof => {
                    let eof = self.peek();
                    return error_at(
                        eof.line,
                        eof.col,
                        format!("Unclosed '(' opened at {}:{}", line, col),
                    );
                }
                _ => children.push(self.parse_expr()?),
            }
        }
        self.depth -= 1;
        Ok(Node::branch(SEXPR_TAG, children))
    }
}
