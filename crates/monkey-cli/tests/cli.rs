//! End-to-end tests for the `monkey` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn monkey() -> Command {
    let mut cmd = Command::cargo_bin("monkey").expect("monkey binary should build");
    cmd.env_remove("RUST_LOG")
        .env_remove("MONKEY_STRICT")
        .env_remove("MONKEY_DASH_IDENTIFIERS");
    cmd
}

#[test]
fn test_cli_help() {
    monkey()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version() {
    monkey()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_eval() {
    monkey()
        .args(["-e", "let five = 5;"])
        .assert()
        .success()
        .stdout("LET \"let\"\nIDENT \"five\"\n= \"=\"\nINT \"5\"\n; \";\"\nEOF \"\"\n");
}

#[test]
fn test_cli_eval_illegal_is_printed() {
    monkey()
        .args(["-e", "1 @ 2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ILLEGAL \"\""));
}

#[test]
fn test_cli_strict_fails_on_illegal() {
    monkey()
        .args(["--strict", "-e", "1 @ 2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Illegal character '@' at line 1, column 3"));
}

#[test]
fn test_cli_strict_from_env() {
    monkey()
        .env("MONKEY_STRICT", "true")
        .args(["-e", "#"])
        .assert()
        .failure();
}

#[test]
fn test_cli_dash_identifiers() {
    monkey()
        .args(["-e", "foo-bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- \"-\""));

    monkey()
        .args(["--dash-identifiers", "-e", "foo-bar"])
        .assert()
        .success()
        .stdout("IDENT \"foo-bar\"\nEOF \"\"\n");
}

#[test]
fn test_cli_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("main.monkey");
    std::fs::write(&path, "if (5 < 10) {\n  return true;\n}\n").expect("Failed to write source");

    monkey()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("IF \"if\"\n( \"(\"\nINT \"5\"\n"))
        .stdout(predicate::str::ends_with("} \"}\"\nEOF \"\"\n"));
}

#[test]
fn test_cli_missing_file() {
    monkey()
        .arg("does-not-exist.monkey")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read does-not-exist.monkey"));
}

#[test]
fn test_cli_eval_conflicts_with_file() {
    monkey().args(["-e", "1", "main.monkey"]).assert().failure();
}

#[test]
fn test_repl_reads_lines() {
    monkey()
        .write_stdin("10 != 9;\n\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Monkey Language"))
        .stdout(predicate::str::contains("!= \"!=\"\nINT \"9\"\n; \";\"\nEOF \"\"\n"));
}
