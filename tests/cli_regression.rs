// Regression tests: binary-level behavior of the exprcheck CLI.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn check_reports_every_valid_line() {
    let file = "tests/check_valid_input.txt";
    fs::write(file, "a+b\n\n(1+2)*3\n").unwrap();

    let mut cmd = Command::cargo_bin("exprcheck").unwrap();
    cmd.arg("check").arg(file);
    cmd.assert()
        .success()
        .stdout(contains(":1: ok").and(contains(":3: ok")));

    let _ = fs::remove_file(file);
}

#[test]
fn check_renders_miette_diagnostics_and_fails() {
    let file = "tests/check_invalid_input.txt";
    fs::write(file, "a+b\n12__3\n").unwrap();

    let mut cmd = Command::cargo_bin("exprcheck").unwrap();
    cmd.arg("check").arg(file);
    cmd.assert()
        .failure()
        .stderr(contains("exprcheck::parse::malformed_number").and(contains("expected a digit")));

    let _ = fs::remove_file(file);
}

#[test]
fn check_json_emits_the_sorted_summary() {
    let file = "tests/check_json_input.txt";
    fs::write(file, "beta+Alpha+beta*2\n").unwrap();

    let mut cmd = Command::cargo_bin("exprcheck").unwrap();
    cmd.arg("check").arg(file).arg("--json");
    let output = cmd.assert().success().get_output().stdout.clone();

    let reports: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(reports[0]["line"], 1);
    assert_eq!(reports[0]["identifiers"], serde_json::json!(["Alpha", "beta"]));
    assert_eq!(reports[0]["numbers"], serde_json::json!(["2"]));
    assert_eq!(reports[0]["max_depth"], 9);

    let _ = fs::remove_file(file);
}

#[test]
fn check_rejects_a_missing_file() {
    let mut cmd = Command::cargo_bin("exprcheck").unwrap();
    cmd.arg("check").arg("tests/no_such_file.txt");
    cmd.assert().failure().stderr(contains("Failed to read"));
}

#[test]
fn repl_reports_a_correct_expression() {
    let mut cmd = Command::cargo_bin("exprcheck").unwrap();
    cmd.arg("repl").write_stdin("a+b\nn\n");
    cmd.assert().success().stdout(
        contains("The input expression is correct.")
            .and(contains("Identifiers:"))
            .and(contains("Nesting level of calls:")),
    );
}

#[test]
fn repl_continues_while_the_answer_is_y() {
    let mut cmd = Command::cargo_bin("exprcheck").unwrap();
    cmd.arg("repl").write_stdin("1\ny\n2\nn\n");
    cmd.assert()
        .success()
        .stdout(contains("The input expression is correct.").count(2));
}

#[test]
fn repl_surfaces_diagnostics_without_dying() {
    let mut cmd = Command::cargo_bin("exprcheck").unwrap();
    cmd.arg("repl").write_stdin("12__3\nn\n");
    cmd.assert()
        .success()
        .stderr(contains("expected a digit"));
}

#[test]
fn repl_transcript_mirrors_the_session() {
    let path = std::env::temp_dir().join("exprcheck_transcript_test.txt");
    let _ = fs::remove_file(&path);

    let mut cmd = Command::cargo_bin("exprcheck").unwrap();
    cmd.arg("repl")
        .arg("--transcript")
        .arg(&path)
        .write_stdin("x*y\nn\n");
    cmd.assert().success();

    let transcript = fs::read_to_string(&path).unwrap();
    assert!(transcript.contains("Enter arithmetic expression: x*y"));
    assert!(transcript.contains("The input expression is correct."));
    assert!(transcript.contains("Nesting level of calls:"));

    let _ = fs::remove_file(&path);
}
