//! Runtime error kinds.
//!
//! None of these abort evaluation. Each is turned into a [`Value::Error`]
//! whose message is the `Display` text below, and then travels through the
//! evaluator like any other value.
//!
//! [`Value::Error`]: crate::Value::Error

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// A numeric literal did not fit in a 64-bit signed integer.
    #[error("Invalid number")]
    InvalidNumber,

    /// An operator was applied to something other than a number.
    #[error("Cannot operate on non-number")]
    NonNumberOperand,

    /// `/` with a zero right-hand side.
    #[error("Division by zero")]
    DivisionByZero,

    /// A multi-element s-expression whose head is not an operator symbol.
    #[error("S-Expression does not start with symbol")]
    MissingLeadingOperator,

    /// An operator symbol outside `+ - * /`.
    #[error("Invalid operator")]
    InvalidOperator,

    /// An operator applied to an empty operand list.
    #[error("Operator passed no operands")]
    NoOperands,
}
