use owo_colors::OwoColorize;

use circe_lexer::Lexer;
use circe_parser::Parser;
use circe_syntax::error::{Error, Result};
use circe_syntax::tree::Node;

/// Lexes and parses one input into a tree.
pub fn parse_line(src: &str) -> Result<Node> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_program()
}

/// Net parenthesis depth of `src`, or `None` if it does not lex.
///
/// The REPL keeps reading continuation lines while this is positive.
pub fn open_parens(src: &str) -> Option<i64> {
    let tokens = Lexer::new(src).tokenize().ok()?;
    let mut depth = 0i64;
    for tk in &tokens {
        match tk.kind {
            circe_syntax::TokenKind::LParen => depth += 1,
            circe_syntax::TokenKind::RParen => depth -= 1,
            _ => {}
        }
    }
    Some(depth)
}

pub fn render_error(kind: &str, source: &str, err: &Error) {
    eprintln!("{}: {}", kind.red().bold(), err.msg.red());
    if let (Some(line), Some(col)) = (err.line, err.col) {
        eprintln!("  --> line {}, column {}", line, col);
        if let Some(src_line) = source.lines().nth(line - 1) {
            let line_num_str = format!("{:3} | ", line);
            eprintln!("     |");
            eprintln!("{}{}", line_num_str.bright_black(), src_line);

            let mut marker = String::new();
            marker.push_str(&" ".repeat(line_num_str.len()));
            if col > 1 {
                marker.push_str(&" ".repeat(col - 1));
            }
            marker.push('^');
            eprintln!("{}{}", marker.red(), " error here".red());
            eprintln!("     |");
        }
    }
    provide_error_suggestions(&err.msg);
}

pub fn provide_error_suggestions(err_msg: &str) {
    // Syntax errors
    if err_msg.contains("Unexpected character") {
        eprintln!("{}", "Help: Circe only understands integers, parentheses and + - * /.".yellow());
        eprintln!("    {}", "Example: (+ 1 (* 2 3))".bright_black());
    } else if err_msg.contains("Unclosed '('") {
        eprintln!("{}", "Help: Every '(' needs a matching ')'.".yellow());
    } else if err_msg.contains("Unexpected ')'") {
        eprintln!("{}", "Help: This ')' has no matching '('.".yellow());
    } else if err_msg.contains("nested too deeply") {
        eprintln!(
            "{}",
            format!("Help: Expressions may nest at most {} levels.", circe_parser::MAX_DEPTH).yellow()
        );
    }
    // Error values
    else if err_msg.contains("Division by zero") {
        eprintln!("{}", "Help: You cannot divide by zero.".yellow());
        eprintln!("    {}", "Every operand after the first one in (/ ...) must be non-zero".bright_black());
    } else if err_msg.contains("Cannot operate on non-number") {
        eprintln!("{}", "Help: Operators only accept numbers as operands.".yellow());
        eprintln!("    {}", "An operand that reduces to a symbol or () is rejected: (+ 1 -) is an error".bright_black());
    } else if err_msg.contains("does not start with symbol") {
        eprintln!("{}", "Help: A list of two or more items must start with an operator.".yellow());
        eprintln!("    {}", "Write (+ 1 2), not (1 2)".bright_black());
    } else if err_msg.contains("Invalid number") {
        eprintln!("{}", "Help: Numbers must fit in a 64-bit signed integer.".yellow());
        eprintln!(
            "    {}",
            format!("Range: {} to {}", i64::MIN, i64::MAX).bright_black()
        );
    }
}
