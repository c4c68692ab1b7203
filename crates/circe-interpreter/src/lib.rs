//! Circe interpreter: the value model and the reduction rules.
//!
//! Source text is turned into a labeled parse tree by `circe-parser`. This
//! crate takes it from there:
//!
//! 1. [`read`] converts the tree into a [`Value`], dropping punctuation;
//! 2. [`eval`] reduces s-expressions, dispatching operator symbols to the
//!    arithmetic [`builtin_op`];
//! 3. the result is printed through `Display`.
//!
//! Runtime failures are values too ([`Value::Error`]); nothing in this crate
//! returns `Err` or panics on user input.

pub mod builtin;
pub mod error;
pub mod eval;
pub mod interpreter;
pub mod reader;
pub mod value;

pub use builtin::{builtin_op, Builtin};
pub use error::EvalError;
pub use eval::{eval, eval_sexpr};
pub use interpreter::{Interpreter, MemoryStats};
pub use reader::{classify, read, NodeKind};
pub use value::{Sexpr, Value};

#[cfg(test)]
mod tests {
    use super::*;
    use circe_lexer::Lexer;
    use circe_parser::Parser;
    use pretty_assertions::assert_eq;

    fn run_line(input: &str) -> Result<Value, String> {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize().map_err(|e| format!("Lex error: {}", e.msg))?;
        let mut parser = Parser::new(tokens);
        let tree = parser.parse_program().map_err(|e| format!("Parse error: {}", e.msg))?;
        let mut interpreter = Interpreter::new();
        Ok(interpreter.run(&tree))
    }

    fn expect_output(input: &str, expected: &str) {
        match run_line(input) {
            Ok(value) => assert_eq!(value.to_string(), expected, "Input: {}", input),
            Err(e) => panic!("Line failed: {}\nInput: {}", e, input),
        }
    }

    fn expect_rejected(input: &str) {
        if let Ok(value) = run_line(input) {
            panic!("Expected a syntax error but got {} for: {}", value, input);
        }
    }

    #[test]
    fn test_number_literals_round_trip() {
        for n in [0i64, 7, -7, 42, 1_000_000, i64::MAX, i64::MIN] {
            expect_output(&n.to_string(), &n.to_string());
        }
        expect_output("007", "7");
        expect_output("-0", "0");
    }

    #[test]
    fn test_arithmetic() {
        expect_output("(+ 1 2 3)", "6");
        expect_output("(* 2 (+ 1 1))", "4");
        expect_output("(- 5)", "-5");
        expect_output("(- 10 4 3)", "3");
        expect_output("(/ 10 3)", "3");
        expect_output("(* (+ 1 2) (- 10 4) (/ 9 3))", "54");
    }

    #[test]
    fn test_top_level_is_an_implicit_sexpr() {
        expect_output("+ 1 2", "3");
        expect_output("- 8", "-8");
        expect_output("1 2", "Error: S-Expression does not start with symbol");
    }

    #[test]
    fn test_empty_forms() {
        expect_output("", "()");
        expect_output("()", "()");
        expect_output("(())", "()");
    }

    #[test]
    fn test_error_values() {
        expect_output("(/ 10 0)", "Error: Division by zero");
        expect_output("(+ 1 *)", "Error: Cannot operate on non-number");
        expect_output("(+ 1 ())", "Error: Cannot operate on non-number");
        expect_output("(1 2 3)", "Error: S-Expression does not start with symbol");
        expect_output("99999999999999999999", "Error: Invalid number");
        expect_output("(+ 1 99999999999999999999)", "Error: Invalid number");
    }

    #[test]
    fn test_first_error_left_to_right() {
        expect_output("(+ (/ 1 0) 99999999999999999999)", "Error: Division by zero");
        expect_output("(+ 99999999999999999999 (/ 1 0))", "Error: Invalid number");
        expect_output("(* (- 3) (+ 2 (/ 4 0)) (1 2))", "Error: Division by zero");
    }

    #[test]
    fn test_bare_symbols() {
        expect_output("+", "+");
        expect_output("(*)", "*");
    }

    #[test]
    fn test_syntax_errors_never_reach_the_evaluator() {
        expect_rejected("(+ 1 foo)");
        expect_rejected("(+ 1 2");
        expect_rejected(")");
    }

    #[test]
    fn test_interpreter_counters() {
        let tokens = Lexer::new("(+ 1 (/ 2 0))").tokenize().unwrap();
        let tree = Parser::new(tokens).parse_program().unwrap();
        let mut interpreter = Interpreter::new();

        assert_eq!(interpreter.run(&tree), Value::error(EvalError::DivisionByZero));
        assert_eq!(interpreter.run(&tree), Value::error(EvalError::DivisionByZero));
        let stats = interpreter.memory_stats();
        assert_eq!(stats.evaluations, 2);
        // 8 nodes per run: root, (+ 1 ...), +, 1, (/ 2 0), /, 2, 0
        assert_eq!(stats.values_read, 16);
        assert_eq!(stats.errors, 2);

        interpreter.reset();
        assert_eq!(interpreter.memory_stats(), MemoryStats::default());
    }
}
