//! Builtin arithmetic operators.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::EvalError;
use crate::value::{Sexpr, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Div,
}

impl Builtin {
    pub const ALL: [Builtin; 4] = [Builtin::Add, Builtin::Sub, Builtin::Mul, Builtin::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
        }
    }

    /// Folds `rhs` into `acc`.
    ///
    /// Integer semantics are two's complement: overflow wraps, and division
    /// truncates toward zero.
    fn apply(self, acc: i64, rhs: i64) -> Result<i64, EvalError> {
        match self {
            Builtin::Add => Ok(acc.wrapping_add(rhs)),
            Builtin::Sub => Ok(acc.wrapping_sub(rhs)),
            Builtin::Mul => Ok(acc.wrapping_mul(rhs)),
            Builtin::Div if rhs == 0 => Err(EvalError::DivisionByZero),
            Builtin::Div => Ok(acc.wrapping_div(rhs)),
        }
    }
}

impl FromStr for Builtin {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Builtin::ALL
            .into_iter()
            .find(|b| b.symbol() == s)
            .ok_or(EvalError::InvalidOperator)
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies the operator named `op` to `operands`.
///
/// Every operand must be a number. `-` with a single operand negates it;
/// otherwise operands are folded left to right into the first one.
pub fn builtin_op(op: &str, operands: Sexpr) -> Value {
    match fold(op, operands) {
        Ok(n) => Value::number(n),
        Err(err) => {
            debug!(op, error = %err, "builtin failed");
            err.into()
        }
    }
}

fn fold(op: &str, operands: Sexpr) -> Result<i64, EvalError> {
    let numbers = operands
        .iter()
        .map(|v| v.as_number().ok_or(EvalError::NonNumberOperand))
        .collect::<Result<Vec<i64>, EvalError>>()?;
    let builtin: Builtin = op.parse()?;
    let (&first, rest) = numbers.split_first().ok_or(EvalError::NoOperands)?;
    trace!(%builtin, count = numbers.len(), "applying builtin");

    if builtin == Builtin::Sub && rest.is_empty() {
        return Ok(first.wrapping_neg());
    }
    rest.iter().try_fold(first, |acc, &rhs| builtin.apply(acc, rhs))
}
