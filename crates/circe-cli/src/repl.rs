use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use circe_interpreter::{Interpreter, MemoryStats, Value};

use crate::common::{open_parens, parse_line, provide_error_suggestions, render_error};

pub struct ReplOptions {
    /// File to load history from and save it to
    pub history: Option<PathBuf>,
    /// Print the parse tree before each result
    pub show_tree: bool,
}

pub fn start_repl(options: ReplOptions) -> Result<()> {
    println!("{}", format!("Circe Version {}", env!("CARGO_PKG_VERSION")).bold().green());
    println!("{}", "Press Ctrl+c to Exit. Type :help for help.\n".dimmed());

    let mut editor = DefaultEditor::new().context("failed to initialise line editor")?;
    if let Some(path) = &options.history {
        if let Err(e) = editor.load_history(path) {
            debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    let mut interpreter = Interpreter::new();
    let mut show_tree = options.show_tree;
    let mut buffer = String::new();
    loop {
        let prompt = if buffer.is_empty() { "circe> " } else { "... > " };
        let line = match editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) if !buffer.is_empty() => {
                buffer.clear();
                continue;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye.");
                break;
            }
            Err(e) => return Err(e).context("failed to read input"),
        };
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            let _ = editor.add_history_entry(trimmed);
        }

        if buffer.is_empty() && trimmed.starts_with(':') {
            match trimmed {
                ":quit" | ":q" | ":exit" => {
                    println!("Goodbye.");
                    break;
                }
                ":help" | ":h" => print_help(),
                ":mem" => print_mem(&interpreter),
                ":tree" => {
                    show_tree = !show_tree;
                    let state = if show_tree { "on" } else { "off" };
                    println!("{}", format!("Parse trees {}.", state).yellow());
                }
                ":reset" => {
                    interpreter.reset();
                    println!("{}", "Counters reset.".yellow());
                }
                _ => println!("{}", "Unknown command. Type :help.".red()),
            }
            continue;
        }

        if !buffer.is_empty() {
            buffer.push('\n');
        }
        buffer.push_str(&line);

        if open_parens(&buffer).map_or(false, |depth| depth > 0) {
            continue;
        }

        match parse_line(&buffer) {
            Ok(tree) => {
                if show_tree {
                    print!("{}", tree.to_string().bright_black());
                }
                print_value(&interpreter.run(&tree));
            }
            Err(e) => render_error("Parse error", &buffer, &e),
        }
        buffer.clear();
    }

    if let Some(path) = &options.history {
        editor
            .save_history(path)
            .with_context(|| format!("failed to save history to {}", path.display()))?;
    }
    Ok(())
}

fn print_value(value: &Value) {
    match value {
        Value::Error(msg) => {
            println!("{}", value.to_string().red());
            provide_error_suggestions(msg);
        }
        _ => println!("{}", value.to_string().bright_blue()),
    }
}

fn print_help() {
    println!(
        "{}\n  {}  {}\n  {}  {}",
        "Commands:".bold(),
        ":help".yellow(),
        "Show this help",
        ":quit".yellow(),
        "Exit the REPL"
    );
    println!(
        "  {}  {}\n  {}  {}\n  {}  {}",
        ":mem".yellow(),
        "Show session counters",
        ":tree".yellow(),
        "Toggle printing the parse tree",
        ":reset".yellow(),
        "Reset session counters"
    );
    println!("Type an expression such as (+ 1 (* 2 3)). Unbalanced parentheses continue on the next line.");
}

fn print_mem(interpreter: &Interpreter) {
    let MemoryStats { evaluations, values_read, errors } = interpreter.memory_stats();
    println!("{}: {}", "evaluations".yellow(), evaluations);
    println!("{}: {}", "values read".yellow(), values_read);
    println!("{}: {}", "error results".yellow(), errors);
}
