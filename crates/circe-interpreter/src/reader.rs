//! Conversion from the parser's labeled tree into a value tree.
//!
//! The parse tree only promises tag strings, so all knowledge of how tags are
//! spelled is kept in [`classify`]; the rest of the reader works on
//! [`NodeKind`].

use circe_syntax::tree::{Node, REGEX_TAG};
use tracing::debug;

use crate::error::EvalError;
use crate::value::{Sexpr, Value};

/// What a parse-tree node means to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Number,
    Symbol,
    /// The anonymous root or a parenthesized s-expression.
    Sexpr,
    /// Punctuation and anchors that carry no value.
    Noise,
}

/// Classifies a node by its tag and contents.
pub fn classify(node: &Node) -> NodeKind {
    if node.has_tag("number") {
        NodeKind::Number
    } else if node.has_tag("symbol") {
        NodeKind::Symbol
    } else if node.is_root() || node.has_tag("sexpr") {
        NodeKind::Sexpr
    } else {
        NodeKind::Noise
    }
}

fn is_noise(node: &Node) -> bool {
    matches!(node.contents.as_str(), "(" | ")" | "{" | "}") || node.tag == REGEX_TAG
}

/// Reads a whole tree into a value.
///
/// A stray noise node at the top (which a well-formed tree never has) reads
/// as an empty s-expression.
pub fn read(node: &Node) -> Value {
    match classify(node) {
        NodeKind::Number => read_number(node),
        NodeKind::Symbol => Value::symbol(node.contents.as_str()),
        NodeKind::Sexpr => Value::Sexpr(read_children(node)),
        NodeKind::Noise => Value::sexpr(),
    }
}

fn read_number(node: &Node) -> Value {
    match node.contents.parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(_) => {
            debug!(literal = %node.contents, line = node.line, col = node.col, "rejected number literal");
            EvalError::InvalidNumber.into()
        }
    }
}

fn read_children(node: &Node) -> Sexpr {
    let mut cells = Sexpr::new();
    for child in node.children.iter().filter(|c| !is_noise(c)) {
        cells.push(read(child));
    }
    cells
}
