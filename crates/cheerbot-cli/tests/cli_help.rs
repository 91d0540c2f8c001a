use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("cheerbot")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("exec"))
        .stdout(predicate::str::contains("timeline"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_exec_help_shows_flags() {
    cargo_bin_cmd!("cheerbot")
        .args(["exec", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--reply"))
        .stdout(predicate::str::contains("--instant"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("cheerbot")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
