//! Generic labeled parse tree handed from the parser to the reader.
//!
//! Every node carries a tag naming the grammar rules that produced it, joined
//! with `|` from outermost to innermost (`expr|number|regex` is a number that
//! was matched as an expression by a regular expression). Leaves carry the
//! matched text; interior nodes carry an ordered list of children.
//!
//! ```text
//! >
//!   regex
//!   expr|sexpr|>
//!     char:1:1 '('
//!     expr|symbol|char:1:2 '+'
//!     expr|number|regex:1:4 '1'
//!     expr|number|regex:1:6 '2'
//!     char:1:7 ')'
//!   regex
//! ```

use std::fmt;

/// Tag of the anonymous root node.
pub const ROOT_TAG: &str = ">";
/// Tag of a number leaf.
pub const NUMBER_TAG: &str = "expr|number|regex";
/// Tag of a symbol leaf.
pub const SYMBOL_TAG: &str = "expr|symbol|char";
/// Tag of an s-expression node.
pub const SEXPR_TAG: &str = "expr|sexpr|>";
/// Tag of a punctuation leaf such as `(`.
pub const CHAR_TAG: &str = "char";
/// Tag of the zero-width start and end anchors under the root.
pub const REGEX_TAG: &str = "regex";

/// One node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Rule names that produced this node, joined with `|`
    pub tag: String,
    /// Matched text for leaves, empty for interior nodes
    pub contents: String,
    /// Line of the first matched character (1-based)
    pub line: usize,
    /// Column of the first matched character (1-based)
    pub col: usize,
    /// Ordered children of an interior node
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a leaf holding `contents`.
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            tag: tag.into(),
            contents: contents.into(),
            line,
            col,
            children: Vec::new(),
        }
    }

    /// Creates an interior node positioned at its first child.
    pub fn branch(tag: impl Into<String>, children: Vec<Node>) -> Self {
        let (line, col) = children.first().map_or((1, 1), |c| (c.line, c.col));
        Self {
            tag: tag.into(),
            contents: String::new(),
            line,
            col,
            children,
        }
    }

    /// True when `rule` occurs anywhere in this node's tag.
    pub fn has_tag(&self, rule: &str) -> bool {
        self.tag.contains(rule)
    }

    /// True for the anonymous root.
    pub fn is_root(&self) -> bool {
        self.tag == ROOT_TAG
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{}", "  ".repeat(depth))?;
        if self.is_leaf() && !self.contents.is_empty() {
            writeln!(f, "{}:{}:{} '{}'", self.tag, self.line, self.col, self.contents)?;
        } else {
            writeln!(f, "{}", self.tag)?;
        }
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
