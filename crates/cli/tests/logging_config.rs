use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("dxp.log");

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1

[logging]
level = "error"
file_level = "debug"
file = "{}"
"#,
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dxp"));
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .args(["render", "--date", "2026-01-15"])
        .write_stdin("{{DATE}} {{MISSING}}")
        .assert()
        .success();

    assert!(log_file.exists(), "Log file should be created");
    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("substituted expression"), "log was: {log}");
    assert!(log.contains("expression failed"), "log was: {log}");
}

#[test]
fn test_stderr_quiet_at_error_level() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "version = 1\n[logging]\nlevel = \"error\"\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dxp"));
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .args(["eval", "DATE", "--date", "2026-01-15"])
        .assert()
        .success()
        .stdout("2026-01-15\n")
        .stderr("");
}

#[test]
fn test_unwritable_log_file_fails() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let log_file = dir.path().join("missing-dir/dxp.log");
    fs::write(
        &config_path,
        format!("version = 1\n[logging]\nfile = \"{}\"\n", log_file.display()),
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dxp"));
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .args(["eval", "DATE", "--date", "2026-01-15"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("cannot create log file"));
}
