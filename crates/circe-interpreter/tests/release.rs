//! Every allocation made during a read-eval-print cycle is released by the
//! time the cycle ends.
//!
//! A counting global allocator tracks live allocations per thread, so tests
//! running in parallel do not see each other's traffic.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use circe_interpreter::{builtin_op, eval, read, Interpreter, Sexpr, Value};
use circe_lexer::Lexer;
use circe_parser::Parser;

struct CountingAlloc;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

fn bump(delta: isize) {
    let _ = LIVE.try_with(|live| live.set(live.get() + delta));
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            bump(1);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        bump(-1);
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn live() -> isize {
    LIVE.with(Cell::get)
}

fn cycle(input: &str) -> String {
    let tokens = Lexer::new(input).tokenize().expect("Lexing should succeed");
    let tree = Parser::new(tokens).parse_program().expect("Parsing should succeed");
    let mut interpreter = Interpreter::new();
    interpreter.run(&tree).to_string()
}

/// Runs `f` once to settle lazy one-time state, then checks that a second
/// run leaves no live allocations behind.
fn assert_balanced<F: Fn()>(f: F) {
    f();
    let before = live();
    f();
    assert_eq!(live(), before, "allocations leaked");
}

const INPUTS: &[&str] = &[
    "",
    "42",
    "()",
    "(+ 1 2 3)",
    "(* 2 (+ 1 1))",
    "(- 5)",
    "(/ 10 0)",
    "(/ 10 0 7 8)",
    "(+ 1 *)",
    "(1 2 3)",
    "(+ (/ 1 0) (* 2 2) 99999999999999999999)",
    "((((((((1))))))))",
    "(* (+ 1 2) (- 10 4) (/ 9 3)) (+ 1)",
];

#[test]
fn full_cycles_release_everything() {
    for input in INPUTS {
        assert_balanced(|| {
            let out = cycle(input);
            assert!(!out.is_empty());
        });
    }
}

#[test]
fn error_paths_release_taken_operands() {
    assert_balanced(|| {
        let operands: Sexpr = [10, 2, 0, 5].into_iter().map(Value::number).collect();
        assert!(builtin_op("/", operands).is_error());
    });
    assert_balanced(|| {
        let operands = Sexpr::new()
            .with(Value::number(1))
            .with(Value::symbol("not-a-number"))
            .with(Value::Sexpr(Sexpr::new().with(Value::number(2))));
        assert!(builtin_op("+", operands).is_error());
    });
}

#[test]
fn collapsing_to_one_child_releases_the_shell() {
    assert_balanced(|| {
        let tokens = Lexer::new("(((7)))").tokenize().unwrap();
        let tree = Parser::new(tokens).parse_program().unwrap();
        let value = read(&tree);
        drop(tree);
        assert_eq!(eval(value), Value::number(7));
    });
}
