/// End-to-end tests for the cbom-schema CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const VALID_CBOM: &str = r#"{
    "bomFormat": "CycloneDX",
    "specVersion": "1.6",
    "metadata": {
        "tools": [{"name": "qvs-scanner", "version": "2.0.0"}],
        "timestamp": "2024-06-01T12:00:00Z"
    },
    "components": [
        {
            "name": "rsa-keygen",
            "properties": [{"name": "cbom:algorithm", "value": "RSA-2048"}]
        }
    ]
}"#;

const LEGACY_CRYPTO_CBOM: &str = r#"{
    "bomFormat": "CycloneDX",
    "specVersion": "1.6",
    "metadata": {
        "tools": [{"name": "qvs-scanner"}],
        "timestamp": "2024-06-01T12:00:00Z"
    },
    "components": [
        {"name": "legacy", "crypto": {"algorithm": "RSA"}}
    ]
}"#;

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_exit_code_help() {
    cargo_bin_cmd!("cbom-schema").arg("--help").assert().code(0);
}

/// Exit code 2: Invalid arguments (no input files)
#[test]
fn test_exit_code_no_files() {
    cargo_bin_cmd!("cbom-schema").assert().code(2);
}

#[test]
fn test_valid_document_passes() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "cbom.json", VALID_CBOM);

    cargo_bin_cmd!("cbom-schema")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Valid CycloneDX 1.6 CBOM"));
}

#[test]
fn test_missing_fields_fail_with_error_tags() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "empty.json", "{}");

    cargo_bin_cmd!("cbom-schema")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAIL]"))
        .stdout(predicate::str::contains(
            "  [ERROR] Missing required field: bomFormat",
        ))
        .stdout(predicate::str::contains(
            "  [ERROR] Missing required field: specVersion",
        ))
        .stdout(predicate::str::contains("  [ERROR] Missing metadata section"));
}

#[test]
fn test_wrong_spec_version_reports_value() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "old.json",
        r#"{"bomFormat": "CycloneDX", "specVersion": "1.4", "metadata": {"tools": [{"name": "x"}], "timestamp": "2024-01-01T00:00:00Z"}}"#,
    );

    cargo_bin_cmd!("cbom-schema")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Expected specVersion '1.6', got '1.4'",
        ));
}

#[test]
fn test_legacy_crypto_warning_passes_by_default() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "legacy.json", LEGACY_CRYPTO_CBOM);

    // A warning-only document still passes, and warnings stay quiet.
    cargo_bin_cmd!("cbom-schema")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[OK]"));
}

#[test]
fn test_strict_mode_fails_on_warnings_and_promotes_them() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "legacy.json", LEGACY_CRYPTO_CBOM);

    cargo_bin_cmd!("cbom-schema")
        .args([path.to_str().unwrap(), "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FAIL]"))
        .stdout(predicate::str::contains(
            "  [ERROR] Component 0 (legacy) has .crypto field (should use .properties in 1.6)",
        ));
}

#[test]
fn test_invalid_json_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "bad.json", "not json at all");

    cargo_bin_cmd!("cbom-schema")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid JSON:"));
}

#[test]
fn test_batch_fails_if_any_file_fails() {
    let dir = TempDir::new().unwrap();
    let good = write_fixture(&dir, "good.json", VALID_CBOM);
    let bad = write_fixture(&dir, "bad.json", "{}");

    cargo_bin_cmd!("cbom-schema")
        .args([&good, &bad])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[OK]"))
        .stdout(predicate::str::contains("[FAIL]"));
}
