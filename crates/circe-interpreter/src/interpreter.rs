//! Read-and-evaluate session.

use circe_syntax::tree::Node;
use tracing::trace;

use crate::eval::eval;
use crate::reader::read;
use crate::value::Value;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MemoryStats {
    /// Number of trees read and evaluated
    pub evaluations: usize,
    /// Total value nodes built by the reader
    pub values_read: usize,
    /// Evaluations whose result was an error value
    pub errors: usize,
}

/// Runs parse trees through the reader and evaluator.
///
/// Results never depend on earlier calls; the interpreter only keeps
/// counters for the REPL's `:mem` command.
#[derive(Default, Debug)]
pub struct Interpreter {
    mem: MemoryStats,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn memory_stats(&self) -> MemoryStats {
        self.mem.clone()
    }

    pub fn reset(&mut self) {
        self.mem = MemoryStats::default();
    }

    /// Reads `tree` into a value and reduces it.
    pub fn run(&mut self, tree: &Node) -> Value {
        let value = read(tree);
        let read_count = value.node_count();
        trace!(nodes = read_count, "read tree");

        let result = eval(value);
        self.mem.evaluations += 1;
        self.mem.values_read += read_count;
        if result.is_error() {
            self.mem.errors += 1;
        }
        result
    }
}
