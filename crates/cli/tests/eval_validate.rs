//! Integration tests for `dxp eval` and `dxp validate`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn dxp(config_home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dxp"));
    cmd.env("XDG_CONFIG_HOME", config_home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn eval_with_and_without_braces() {
    let tmp = tempdir().unwrap();

    dxp(tmp.path())
        .args(["eval", "{{DATE + 1 day}}", "--date", "2026-12-31"])
        .assert()
        .success()
        .stdout("2027-01-01\n");

    dxp(tmp.path())
        .args(["eval", "DATE - 1 month", "--date", "2026-03-31"])
        .assert()
        .success()
        .stdout("2026-02-28\n");
}

#[test]
fn eval_plain_variable() {
    let tmp = tempdir().unwrap();

    dxp(tmp.path())
        .args(["eval", "RATE", "--var", "RATE=2.50"])
        .assert()
        .success()
        .stdout("2.5\n");
}

#[test]
fn eval_parse_failure() {
    let tmp = tempdir().unwrap();

    dxp(tmp.path())
        .args(["eval", "date + 1 day"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("FAIL dxp eval"))
        .stdout(predicate::str::contains("PARSE_ERROR: expected a variable name"));
}

#[test]
fn eval_undefined_variable() {
    let tmp = tempdir().unwrap();

    dxp(tmp.path())
        .args(["eval", "DUE + 1 week"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("UNDEFINED_VARIABLE: undefined variable: DUE"));
}

#[test]
fn eval_rejects_invalid_date_flag() {
    let tmp = tempdir().unwrap();

    dxp(tmp.path())
        .args(["eval", "DATE", "--date", "2026-02-30"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("is not a valid date"));
}

#[test]
fn validate_all_ok() {
    let tmp = tempdir().unwrap();

    dxp(tmp.path())
        .args(["validate", "DATE + 1 day", "{{UNDEFINED_BUT_VALID - 2 years}}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK   DATE + 1 day"))
        .stdout(predicate::str::contains("OK   {{UNDEFINED_BUT_VALID - 2 years}}"));
}

#[test]
fn validate_reports_each_failure() {
    let tmp = tempdir().unwrap();

    dxp(tmp.path())
        .args(["validate", "DATE + 1 day", "{{A + 0 days}}", "A + 2 fortnights"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("OK   DATE + 1 day"))
        .stdout(predicate::str::contains("FAIL {{A + 0 days}}"))
        .stdout(predicate::str::contains("unknown unit 'fortnights'"))
        .stdout(predicate::str::contains("2 of 3 expressions invalid"));
}
