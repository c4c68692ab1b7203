use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap().parent().unwrap().to_path_buf()
}

fn circe() -> Command {
    let mut cmd = Command::cargo_bin("circe").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn runs_arithmetic_demo() {
    let root = workspace_root();
    let mut cmd = circe();
    cmd.arg(root.join("demos/arithmetic.circe"));
    cmd.assert()
        .success()
        .stdout("6\n4\n-5\n3\nError: Division by zero\n54\n()\n");
}

#[test]
fn eval_flag_prints_each_result() {
    let mut cmd = circe();
    cmd.args(["-e", "(+ 1 2 3)", "-e", "(+ 1 *)"]);
    cmd.assert()
        .success()
        .stdout("6\nError: Cannot operate on non-number\n");
}

#[test]
fn reads_piped_stdin() {
    let mut cmd = circe();
    cmd.write_stdin("(- 5)\n(1 2)\n");
    cmd.assert()
        .success()
        .stdout("-5\nError: S-Expression does not start with symbol\n");
}

#[test]
fn piped_stdin_skips_blank_lines() {
    let mut cmd = circe();
    cmd.write_stdin("\n(+ 1 2)\n   \n(*)\n\n");
    cmd.assert().success().stdout("3\n*\n");
}

#[test]
fn dash_reads_stdin() {
    let mut cmd = circe();
    cmd.arg("-").write_stdin("99999999999999999999\n");
    cmd.assert().success().stdout("Error: Invalid number\n");
}

#[test]
fn tree_flag_dumps_parse_tree() {
    let mut cmd = circe();
    cmd.args(["--tree", "-e", "(- 5)"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("expr|sexpr|>"))
        .stdout(predicate::str::contains("expr|number|regex:1:4 '5'"))
        .stdout(predicate::str::ends_with("-5\n"));
}

#[test]
fn parse_error_is_nonzero_and_evaluates_nothing() {
    let src = "(+ 1 2)\n\n(+ 1 foo)\n";
    let tmp_dir = tempfile::tempdir().unwrap();
    let bad_path = tmp_dir.path().join("bad.circe");
    std::fs::write(&bad_path, src).unwrap();

    let mut cmd = circe();
    cmd.arg(bad_path);
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Parse error"))
        .stderr(predicate::str::contains("Unexpected character 'f'"))
        .stderr(predicate::str::contains("line 3, column 6"));
}

#[test]
fn unclosed_paren_is_reported() {
    let mut cmd = circe();
    cmd.args(["-e", "(* 2 (+ 1 1)"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unclosed '(' opened at 1:1"));
}

#[test]
fn missing_file_is_an_error() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let mut cmd = circe();
    cmd.arg(tmp_dir.path().join("missing.circe"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let mut cmd = circe();
    cmd.args(["-vv", "-e", "(/ 1 0)"]);
    cmd.assert()
        .success()
        .stdout("Error: Division by zero\n")
        .stderr(predicate::str::contains("builtin failed"));
}
