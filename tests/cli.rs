//! CLI integration tests for the `sq` binary
//!
//! Covers the non-interactive surface: help output and question file
//! validation. The TUI itself needs a terminal and is exercised through
//! the unit tests of the core state machines.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn sq() -> Command {
    Command::cargo_bin("sq").expect("binary builds")
}

fn question_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

const VALID_SET: &str = r#"[
  {
    "category": "Signs",
    "question": "What does a red octagon mean?",
    "options": ["Stop", "Give way"],
    "correctIndex": 0,
    "explanation": "A red octagon always means stop.",
    "reference": "Rule 10",
    "link": "https://example.com/signs"
  },
  {
    "category": "Lights",
    "question": "What does a single amber light mean?",
    "options": ["Go", "Stop at the line", "Speed up"],
    "correctIndex": 1,
    "explanation": "Amber means stop unless you have crossed the line.",
    "reference": "Rule 175",
    "link": "https://example.com/lights"
  }
]"#;

#[test]
fn help_mentions_the_wheel() {
    sq().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("spinning category wheel"));
}

#[test]
fn validate_accepts_a_valid_file() {
    let file = question_file(VALID_SET);
    sq().arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All 2 questions are valid."));
}

#[test]
fn validate_rejects_out_of_range_correct_index() {
    let file = question_file(
        r#"[{
            "category": "Signs",
            "question": "Q?",
            "options": ["A", "B"],
            "correctIndex": 2,
            "explanation": "E",
            "reference": "R",
            "link": "https://example.com"
        }]"#,
    );
    sq().arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("BAD [0] Invalid question in category 'Signs'"))
        .stderr(predicate::str::contains("failed validation"));
}

#[test]
fn validate_rejects_single_option_records() {
    let file = question_file(
        r#"[{
            "category": "Lights",
            "question": "Q?",
            "options": ["A"],
            "correctIndex": 0,
            "explanation": "E",
            "reference": "R",
            "link": "https://example.com"
        }]"#,
    );
    sq().arg("validate").arg(file.path()).assert().failure();
}

#[test]
fn validate_rejects_an_empty_collection() {
    let file = question_file("[]");
    sq().arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("question set is empty"));
}

#[test]
fn validate_reports_missing_files() {
    sq().arg("validate")
        .arg("/no/such/questions.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read question file"));
}

#[test]
fn validate_accepts_data_flag_instead_of_positional() {
    let file = question_file(VALID_SET);
    sq().arg("--data")
        .arg(file.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 2 questions are valid."));
}

#[test]
fn validate_rejects_malformed_json() {
    let file = question_file("{ not json ]");
    sq().arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse question file"));
}
