mod common;
mod repl;

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use owo_colors::OwoColorize;
use tracing::debug;

use circe_interpreter::Interpreter;
use circe_syntax::tree::Node;

use crate::common::{parse_line, render_error};

#[derive(Parser, Debug)]
#[command(name = "circe", version, about = "Evaluate Circe s-expressions")]
struct Cli {
    /// File to evaluate, one expression per line; `-` reads standard input.
    /// Starts the REPL when omitted and stdin is a terminal.
    path: Option<PathBuf>,

    /// Evaluate an expression and print its result (repeatable)
    #[arg(short = 'e', long = "eval", value_name = "EXPR", action = ArgAction::Append)]
    exprs: Vec<String>,

    /// Print the parse tree before each result
    #[arg(long = "tree", default_value_t = false)]
    tree: bool,

    /// REPL history file
    #[arg(long = "history", env = "CIRCE_HISTORY", value_name = "FILE")]
    history: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// One unit of batch input.
struct Input<'a> {
    /// Text handed to the parser
    text: &'a str,
    /// Text shown when rendering a parse error
    source: &'a str,
    /// Lines preceding `text` within `source`
    offset: usize,
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
        .with(filter)
        .init();
}

/// Parses every input first, then evaluates them in order.
///
/// Returns `Ok(false)` after rendering the first parse error; nothing is
/// evaluated in that case.
fn run_batch(inputs: &[Input<'_>], show_tree: bool) -> Result<bool> {
    let mut trees: Vec<Node> = Vec::with_capacity(inputs.len());
    for input in inputs {
        match parse_line(input.text) {
            Ok(tree) => trees.push(tree),
            Err(e) => {
                render_error("Parse error", input.source, &e.shifted(input.offset));
                return Ok(false);
            }
        }
    }
    debug!(count = trees.len(), "parsed batch");

    let mut interpreter = Interpreter::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for tree in &trees {
        if show_tree {
            write!(out, "{}", tree)?;
        }
        writeln!(out, "{}", interpreter.run(tree))?;
    }
    out.flush()?;
    Ok(true)
}

fn source_inputs(src: &str) -> Vec<Input<'_>> {
    src.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(offset, text)| Input {
            text,
            source: src,
            offset,
        })
        .collect()
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut src = String::new();
    io::stdin()
        .read_to_string(&mut src)
        .context("Failed to read standard input")?;
    Ok(src)
}

fn run(cli: Cli) -> Result<bool> {
    if !cli.exprs.is_empty() {
        let inputs: Vec<Input<'_>> = cli
            .exprs
            .iter()
            .map(|e| Input {
                text: e,
                source: e,
                offset: 0,
            })
            .collect();
        return run_batch(&inputs, cli.tree);
    }

    match &cli.path {
        Some(path) if path.as_os_str() == "-" => {
            let src = read_stdin()?;
            run_batch(&source_inputs(&src), cli.tree)
        }
        Some(path) => {
            let src = read_file(path)?;
            run_batch(&source_inputs(&src), cli.tree)
        }
        None if io::stdin().is_terminal() => {
            repl::start_repl(repl::ReplOptions {
                history: cli.history,
                show_tree: cli.tree,
            })?;
            Ok(true)
        }
        None => {
            let src = read_stdin()?;
            run_batch(&source_inputs(&src), cli.tree)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), format!("{:#}", e).red());
            ExitCode::FAILURE
        }
    }
}
