//! Command-line behaviour that runs before the terminal UI starts

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn elasticbook() -> Command {
    let mut cmd = Command::cargo_bin("elasticbook").unwrap();
    cmd.env_remove("ELASTICBOOK_SUGGEST_URL");
    cmd.env_remove("ELASTICBOOK_SEARCH_URL");
    cmd
}

#[test]
fn test_help_lists_options() {
    elasticbook()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--search-endpoint"))
        .stdout(predicate::str::contains("--delay-ms"))
        .stdout(predicate::str::contains("--min-length"))
        .stdout(predicate::str::contains("--no-auto-focus"));
}

#[test]
fn test_version_flag() {
    elasticbook()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_min_length_is_rejected() {
    elasticbook()
        .args(["--min-length", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min-length"));
}

#[test]
fn test_missing_config_file_fails_before_ui() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    elasticbook()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_malformed_config_file_fails_before_ui() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[suggest]\ndelay_ms = \"later\"").unwrap();

    elasticbook()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("delay_ms"));
}
