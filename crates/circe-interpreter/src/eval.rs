//! Reduction of value trees.

use tracing::{debug, trace};

use crate::builtin::builtin_op;
use crate::error::EvalError;
use crate::value::{Sexpr, Value};

/// Reduces `value` to its result.
///
/// Numbers, symbols and errors evaluate to themselves; s-expressions are
/// reduced by [`eval_sexpr`].
pub fn eval(value: Value) -> Value {
    match value {
        Value::Sexpr(cells) => eval_sexpr(cells),
        other => other,
    }
}

/// Evaluates every child, then collapses the s-expression.
///
/// - the leftmost error child, if any, is the result;
/// - `()` evaluates to itself;
/// - a single child is unwrapped;
/// - otherwise the head must be an operator symbol applied to the rest.
pub fn eval_sexpr(cells: Sexpr) -> Value {
    let mut cells: Sexpr = cells.into_iter().map(eval).collect();

    if let Some(index) = cells.first_error() {
        trace!(index, "error child short-circuits reduction");
        return cells.take(index);
    }

    match cells.len() {
        0 => Value::Sexpr(cells),
        1 => cells.take(0),
        _ => match cells.pop(0) {
            Value::Symbol(op) => {
                trace!(op = %op, operands = cells.len(), "dispatching");
                builtin_op(&op, cells)
            }
            head => {
                debug!(head = head.kind(), "sexpr head is not a symbol");
                EvalError::MissingLeadingOperator.into()
            }
        },
    }
}
