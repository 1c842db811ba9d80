//! CLI integration tests for formcheck
//!
//! These run the compiled binary end to end and check stdout, stderr, and
//! exit codes for each command.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const FORM: &str = r#"
[form]
title = "Signup"

[[fields]]
id = "name"
label = "Full Name"
validation = { required = true, minLength = 2 }

[[fields]]
id = "email"
label = "Email"
fieldType = "email"
validation = { required = true, pattern = "^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\\.[a-zA-Z]{2,}$" }

[[fields]]
id = "age"
label = "Age"
fieldType = "number"
validation = { min = 18, max = 120 }
"#;

fn formcheck() -> Command {
    let mut cmd = Command::cargo_bin("formcheck").unwrap();
    cmd.env_remove("FORMCHECK_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// CHECK
// ============================================================================

#[test]
fn test_check_passes_valid_submission() {
    let dir = TempDir::new().unwrap();
    let form = write(&dir, "form.toml", FORM);
    let responses = write(
        &dir,
        "responses.json",
        r#"{"name": "Ada", "email": "ada@example.com", "age": 36}"#,
    );

    formcheck()
        .args(["--color", "never", "check", "--form"])
        .arg(&form)
        .arg("--responses")
        .arg(&responses)
        .assert()
        .success()
        .stdout(predicate::str::contains("Form: Signup"))
        .stdout(predicate::str::contains("Submission 1: valid ✓"))
        .stdout(predicate::str::contains("Check PASSED"))
        .stderr(predicate::str::contains("Checking 1 submission(s) against 3 field(s)"));
}

#[test]
fn test_check_fails_invalid_submission() {
    let dir = TempDir::new().unwrap();
    let form = write(&dir, "form.toml", FORM);
    let responses = write(
        &dir,
        "responses.json",
        r#"[{"name": "", "email": "nope", "age": "12"}]"#,
    );

    formcheck()
        .args(["check", "--color", "never", "--form"])
        .arg(&form)
        .arg("--responses")
        .arg(&responses)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Submission 1: 3 error(s) ✗"))
        .stdout(predicate::str::contains("  name (Full Name): Full Name is required"))
        .stdout(predicate::str::contains(
            "  email (Email): Email must be: a valid email address",
        ))
        .stdout(predicate::str::contains("  age (Age): Age must be at least 18"))
        .stdout(predicate::str::contains("Check FAILED"));
}

#[test]
fn test_check_jsonl_output() {
    let dir = TempDir::new().unwrap();
    let form = write(&dir, "form.toml", FORM);
    let responses = write(
        &dir,
        "responses.jsonl",
        "{\"name\": \"Ada\", \"email\": \"ada@example.com\"}\n{\"name\": \"B\", \"email\": \"b@example.com\"}\n",
    );

    let output = formcheck()
        .args(["check", "--format", "jsonl", "--form"])
        .arg(&form)
        .arg("--responses")
        .arg(&responses)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());

    let records: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records[0]["type"], "error");
    assert_eq!(records[0]["submission"], 2);
    assert_eq!(records[0]["field"], "name");
    assert_eq!(records[0]["message"], "Full Name must be at least 2 characters");

    let status = records.last().unwrap();
    assert_eq!(status["type"], "status");
    assert_eq!(status["passed"], false);
    assert_eq!(status["submissions"], 2);
    assert_eq!(status["invalid"], 1);
    assert_eq!(status["totalErrors"], 1);
}

#[test]
fn test_check_malformed_responses_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let form = write(&dir, "form.toml", FORM);
    let responses = write(&dir, "responses.jsonl", "{\"name\": \"Ada\"}\n{broken\n");

    formcheck()
        .args(["check", "--form"])
        .arg(&form)
        .arg("--responses")
        .arg(&responses)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_check_missing_form_is_error() {
    let dir = TempDir::new().unwrap();
    let responses = write(&dir, "responses.json", "{}");

    formcheck()
        .args(["check", "--form"])
        .arg(dir.path().join("missing.toml"))
        .arg("--responses")
        .arg(&responses)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_check_warns_about_inconsistent_config() {
    let dir = TempDir::new().unwrap();
    let form = write(
        &dir,
        "form.toml",
        "[[fields]]\nid = \"code\"\nvalidation = { minLength = 5, maxLength = 2 }\n",
    );
    let responses = write(&dir, "responses.json", "{}");

    formcheck()
        .args(["check", "--form"])
        .arg(&form)
        .arg("--responses")
        .arg(&responses)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "minLength (5) is greater than maxLength (2)",
        ));

    formcheck()
        .args(["check", "--strict", "--form"])
        .arg(&form)
        .arg("--responses")
        .arg(&responses)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid value for code"));
}

#[test]
fn test_check_malformed_pattern_fails_open() {
    let dir = TempDir::new().unwrap();
    let form = write(
        &dir,
        "form.toml",
        "[[fields]]\nid = \"code\"\nvalidation = { pattern = \"[\" }\n",
    );
    let responses = write(&dir, "responses.json", r#"{"code": "anything"}"#);

    formcheck()
        .args(["check", "--form"])
        .arg(&form)
        .arg("--responses")
        .arg(&responses)
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid validation pattern"));
}

// ============================================================================
// BUILD
// ============================================================================

#[test]
fn test_build_prints_merged_config() {
    formcheck()
        .args(["build", "--required", "minLength=3", "maxLength=20", "alphanumeric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"required\": true"))
        .stdout(predicate::str::contains("\"minLength\": 3"))
        .stdout(predicate::str::contains("\"maxLength\": 20"))
        .stdout(predicate::str::contains("\"pattern\": \"^[a-zA-Z0-9]+$\""));
}

#[test]
fn test_build_unknown_rule() {
    formcheck()
        .args(["build", "bogus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"required\": false"))
        .stderr(predicate::str::contains("skipping unknown validation rule"));

    formcheck()
        .args(["build", "--strict", "bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Rule not found: bogus"));
}

// ============================================================================
// CATALOG
// ============================================================================

#[test]
fn test_rules_for_phone() {
    formcheck()
        .args(["rules", "phone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rules for field type 'phone'"))
        .stdout(predicate::str::contains("indianPhone (contact)"))
        .stdout(predicate::str::contains("email (contact)").not());
}

#[test]
fn test_rules_unknown_type_notes_fallback() {
    formcheck()
        .args(["rules", "signature"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not a recognized field type"))
        .stdout(predicate::str::contains("minLength (text)"));
}

#[test]
fn test_patterns_jsonl() {
    let output = formcheck().args(["patterns", "-f", "jsonl"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let keys: Vec<String> = stdout
        .lines()
        .map(|line| {
            let record: serde_json::Value = serde_json::from_str(line).unwrap();
            record["key"].as_str().unwrap().to_string()
        })
        .collect();
    assert!(keys.contains(&"email".to_string()));
    assert!(keys.contains(&"usn".to_string()));
}

// ============================================================================
// LINT
// ============================================================================

#[test]
fn test_lint() {
    let dir = TempDir::new().unwrap();
    let clean = write(&dir, "clean.toml", FORM);
    let broken = write(
        &dir,
        "broken.json",
        r#"{"fields": [{"id": "age", "validation": {"min": 50, "max": 10}}]}"#,
    );

    formcheck()
        .args(["lint", "--form"])
        .arg(&clean)
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found."));

    formcheck()
        .args(["lint", "--form"])
        .arg(&broken)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("age: min (50) is greater than max (10)"))
        .stdout(predicate::str::contains("1 issue(s) in 1 field(s)"));
}
