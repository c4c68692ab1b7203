//! Syntax error types shared by the Circe lexer, parser and command line.
//!
//! Runtime failures (division by zero, a bad operand) are not errors in this
//! sense: they are ordinary values produced by the evaluator. Everything in
//! this module describes input that never made it to a parse tree.
//!
//! # Examples
//!
//! ```rust
//! use circe_syntax::error::{Error, Result, error_at};
//!
//! fn close_paren(line: usize, col: usize) -> Result<()> {
//!     error_at(line, col, "Unexpected ')'")
//! }
//!
//! let err = close_paren(1, 4).unwrap_err();
//! assert_eq!(err.to_string(), "Unexpected ')' at 1:4");
//! assert_eq!(Error::new("Unexpected end of input").to_string(), "Unexpected end of input");
//! ```

use std::fmt;

/// An error that occurred while turning source text into a parse tree.
///
/// Carries a human-readable message and, when known, the 1-based line and
/// column the problem was found at. The command line uses the position to
/// draw a caret under the offending character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Human-readable error message
    pub msg: String,

    /// Optional line number in the source (1-based)
    pub line: Option<usize>,

    /// Optional column number in the source (1-based)
    pub col: Option<usize>,
}

impl Error {
    /// Creates a new error with the given message and no source location.
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            line: None,
            col: None,
        }
    }

    /// Creates a new error with the given message and source location.
    ///
    /// ```rust
    /// use circe_syntax::Error;
    ///
    /// let error = Error::with_span("Unexpected character 'x'", 1, 3);
    /// assert_eq!(error.to_string(), "Unexpected character 'x' at 1:3");
    /// ```
    pub fn with_span(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            msg: msg.into(),
            line: Some(line),
            col: Some(col),
        }
    }

    /// Returns the same error moved down by `offset` lines.
    ///
    /// Batch mode parses a file one line at a time; each line is lexed as if
    /// it were line 1, so the position has to be shifted back into the file.
    pub fn shifted(mut self, offset: usize) -> Self {
        if let Some(line) = self.line.as_mut() {
            *line += offset;
        }
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(l), Some(c)) = (self.line, self.col) {
            write!(f, "{} at {}:{}", self.msg, l, c)
        } else {
            write!(f, "{}", self.msg)
        }
    }
}

impl std::error::Error for Error {}

/// A specialized `Result` type for Circe front-end operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand for `Err(Error::with_span(msg, line, col))`.
pub fn error_at<T>(line: usize, col: usize, msg: impl Into<String>) -> Result<T> {
    Err(Error::with_span(msg, line, col))
}
