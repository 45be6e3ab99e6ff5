/// End-to-end tests for the cbom-consistency CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_exit_code_help() {
    cargo_bin_cmd!("cbom-consistency").arg("--help").assert().code(0);
}

#[test]
fn test_exit_code_version() {
    cargo_bin_cmd!("cbom-consistency").arg("--version").assert().code(0);
}

/// Exit code 2: Invalid arguments (no input files)
#[test]
fn test_exit_code_no_files() {
    cargo_bin_cmd!("cbom-consistency").assert().code(2);
}

/// Exit code 2: Invalid arguments (unknown option)
#[test]
fn test_exit_code_unknown_option() {
    cargo_bin_cmd!("cbom-consistency")
        .args(["--invalid-option", "cbom.json"])
        .assert()
        .code(2);
}

#[test]
fn test_matching_summary_passes() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "cbom.json",
        r#"{
            "findings": [
                {"algorithm": "RSA-2048", "risk": "HIGH"},
                {"algorithm": "ML-KEM-768", "risk": "LOW", "quantum_resistant": true}
            ],
            "summary": {
                "vulnerable_assets": 1,
                "quantum_safe_assets": 1,
                "risk_breakdown": {"HIGH": 1, "LOW": 1}
            }
        }"#,
    );

    cargo_bin_cmd!("cbom-consistency")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[OK]"))
        .stdout(predicate::str::contains("summary matches findings"));
}

#[test]
fn test_mismatched_summary_fails_with_bullets() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "stale.json",
        r#"{
            "findings": [{"algorithm": "RSA-2048", "risk": "HIGH"}],
            "summary": {"vulnerable_assets": 0}
        }"#,
    );

    cargo_bin_cmd!("cbom-consistency")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAIL]"))
        .stdout(predicate::str::contains(
            "  - summary.vulnerable_assets=0 != computed 1",
        ));
}

#[test]
fn test_empty_summary_passes() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "nosummary.json",
        r#"{"findings": [{"risk": "CRITICAL"}]}"#,
    );

    cargo_bin_cmd!("cbom-consistency").arg(&path).assert().code(0);
}

#[test]
fn test_invalid_json_fails_without_aborting_batch() {
    let dir = TempDir::new().unwrap();
    let bad = write_fixture(&dir, "bad.json", "{broken");
    let good = write_fixture(&dir, "good.json", r#"{"findings": []}"#);

    cargo_bin_cmd!("cbom-consistency")
        .args([&bad, &good])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("invalid JSON:"))
        .stdout(predicate::str::contains("[OK]"));
}

#[test]
fn test_missing_file_reports_fail() {
    cargo_bin_cmd!("cbom-consistency")
        .arg("/nonexistent/cbom.json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAIL] /nonexistent/cbom.json"));
}

#[test]
fn test_multiple_files_one_line_each() {
    let dir = TempDir::new().unwrap();
    let a = write_fixture(&dir, "a.json", r#"{"findings": []}"#);
    let b = write_fixture(&dir, "b.json", r#"{"findings": []}"#);

    let assert = cargo_bin_cmd!("cbom-consistency").args([&a, &b]).assert().code(0);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output.lines().count(), 2);
}
