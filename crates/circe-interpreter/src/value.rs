//! Value types for the Circe interpreter.
//!
//! A [`Value`] is a tagged union over numbers, error messages, operator
//! symbols and s-expressions. An s-expression owns its children outright:
//! nothing is shared between containers, so dropping a tree releases every
//! node in it exactly once.

use std::fmt;

use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer
    Number(i64),
    /// A runtime error carrying its message
    Error(String),
    /// An operator name such as `+`
    Symbol(String),
    /// An ordered, owned list of values
    Sexpr(Sexpr),
}

impl Value {
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    pub fn error(err: EvalError) -> Self {
        Value::Error(err.to_string())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "symbol names are never empty");
        Value::Symbol(name)
    }

    /// An s-expression with no children.
    pub fn sexpr() -> Self {
        Value::Sexpr(Sexpr::new())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Short name of the variant, used in trace output.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Error(_) => "error",
            Value::Symbol(_) => "symbol",
            Value::Sexpr(_) => "sexpr",
        }
    }

    /// Number of value nodes in this tree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            Value::Sexpr(cells) => 1 + cells.iter().map(Value::node_count).sum::<usize>(),
            _ => 1,
        }
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::error(err)
    }
}

/// The children of an s-expression, in textual order.
///
/// Elements only ever enter through [`Sexpr::push`] (or collection from an
/// iterator), so order always matches the order they were read or produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sexpr {
    cells: Vec<Value>,
}

impl Sexpr {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Appends `child` as the new last element.
    pub fn push(&mut self, child: Value) {
        self.cells.push(child);
    }

    /// Builder form of [`Sexpr::push`].
    pub fn with(mut self, child: Value) -> Self {
        self.push(child);
        self
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.cells.iter()
    }

    /// Removes and returns the child at `index`, shifting later children left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Callers only pass indices obtained
    /// from iterating this same sexpr.
    pub fn pop(&mut self, index: usize) -> Value {
        self.cells.remove(index)
    }

    /// Takes the child at `index` and drops everything else.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn take(mut self, index: usize) -> Value {
        self.cells.swap_remove(index)
    }

    /// Position of the first error child, scanning left to right.
    pub fn first_error(&self) -> Option<usize> {
        self.cells.iter().position(Value::is_error)
    }
}

impl FromIterator<Value> for Sexpr {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Sexpr {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sexpr {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(msg) => write!(f, "Error: {}", msg),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::Sexpr(cells) => write!(f, "{}", cells),
        }
    }
}

impl fmt::Display for Sexpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, ")")
    }
}
