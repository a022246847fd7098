//! Integration tests for the `jsontree` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the view,
//! check, and stats subcommands through the actual binary, including
//! stdin/stdout piping, file I/O, depth collapsing, and error reporting
//! for structurally invalid input.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

/// Helper: path to the concat.json fixture (three concatenated roots).
fn concat_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/concat.json")
}

/// Helper: path to the duplicate.json fixture (invalid: duplicate key).
fn duplicate_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/duplicate.json")
}

// ─────────────────────────────────────────────────────────────────────────────
// View subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn view_stdin_to_stdout() {
    Command::cargo_bin("jsontree")
        .unwrap()
        .arg("view")
        .write_stdin(r#"{"name":"Alice","scores":[95,87]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON"))
        .stdout(predicate::str::contains("name"))
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("ARRAY"))
        .stdout(predicate::str::contains("95"));
}

#[test]
fn view_file_to_stdout() {
    Command::cargo_bin("jsontree")
        .unwrap()
        .args(["view", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("address"))
        .stdout(predicate::str::contains("Portland"));
}

#[test]
fn view_renders_null_label() {
    Command::cargo_bin("jsontree")
        .unwrap()
        .arg("view")
        .write_stdin(r#"{"email":null}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("NULL"));
}

#[test]
fn view_depth_collapses_children() {
    Command::cargo_bin("jsontree")
        .unwrap()
        .args(["view", "--depth", "1"])
        .write_stdin(r#"{"a":{"b":{"c":1}}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(". . ."))
        .stdout(predicate::str::contains("b").not());
}

#[test]
fn view_without_depth_shows_everything() {
    Command::cargo_bin("jsontree")
        .unwrap()
        .arg("view")
        .write_stdin(r#"{"a":{"b":{"c":1}}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("c"))
        .stdout(predicate::str::contains(". . .").not());
}

#[test]
fn view_file_to_file() {
    let output_path = "/tmp/jsontree-test-view-output.txt";
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("jsontree")
        .unwrap()
        .args(["view", "-i", sample_json_path(), "-o", output_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(content.contains("JSON"), "outline should contain 'JSON'");
    assert!(content.contains("scores"), "outline should contain 'scores'");

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn view_renders_every_concatenated_root() {
    Command::cargo_bin("jsontree")
        .unwrap()
        .args(["view", "-i", concat_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("stop"))
        .stdout(predicate::str::contains("trailing"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_single_document() {
    Command::cargo_bin("jsontree")
        .unwrap()
        .args(["check", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 root document"));
}

#[test]
fn check_counts_concatenated_documents() {
    Command::cargo_bin("jsontree")
        .unwrap()
        .args(["check", "-i", concat_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 root documents"));
}

#[test]
fn check_duplicate_property_fails() {
    Command::cargo_bin("jsontree")
        .unwrap()
        .args(["check", "-i", duplicate_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate property"));
}

#[test]
fn check_unterminated_input_fails() {
    Command::cargo_bin("jsontree")
        .unwrap()
        .arg("check")
        .write_stdin(r#"{"open": [1, 2"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unterminated"));
}

#[test]
fn check_missing_file_fails() {
    Command::cargo_bin("jsontree")
        .unwrap()
        .args(["check", "-i", "/nonexistent/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Stats subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stats_counts_nodes() {
    Command::cargo_bin("jsontree")
        .unwrap()
        .args(["stats", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Roots:      1"))
        .stdout(predicate::str::contains("Objects:    2"))
        .stdout(predicate::str::contains("Arrays:     1"))
        .stdout(predicate::str::contains("Properties: 8"))
        .stdout(predicate::str::contains("Scalars:    9"));
}

#[test]
fn stats_reports_depth() {
    Command::cargo_bin("jsontree")
        .unwrap()
        .arg("stats")
        .write_stdin(r#"{"a":{"b":{"c":1}}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Max depth:  4"));
}
