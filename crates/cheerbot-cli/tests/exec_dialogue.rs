use std::fs;
use std::time::Duration;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_exec_instant_farewell() {
    let dir = tempdir().unwrap();

    let assert = cargo_bin_cmd!("cheerbot")
        .env("CHEERBOT_HOME", dir.path())
        .args(["exec", "--instant", "--reply", "No thanks"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[0].starts_with("bot: Hey there!"));
    assert_eq!(lines[7], "you: No thanks");
    assert_eq!(lines[8], "bot: Okay, I'll leave for now... 😌");
    assert_eq!(lines[9], "bot: But remember, always stay happy! 😊");
}

#[test]
fn test_exec_instant_redirect() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("cheerbot")
        .env("CHEERBOT_HOME", dir.path())
        .args(["exec", "--instant", "--reply", "tell me more"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "you: tell me more\nbot: Join our site, and we can talk more! 💻\n",
        ));
}

#[test]
fn test_exec_instant_reads_reply_from_stdin() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("cheerbot")
        .env("CHEERBOT_HOME", dir.path())
        .args(["exec", "--instant"])
        .write_stdin("\n   \nFINE\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("you: FINE\nbot: Okay, I'll leave"));
}

#[test]
fn test_exec_uses_configured_script() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"
messages = ["Only one message"]

[redirect]
message = "Bye!"
"#,
    )
    .unwrap();

    cargo_bin_cmd!("cheerbot")
        .env("CHEERBOT_HOME", dir.path())
        .args(["exec", "--instant", "--reply", "hmm"])
        .assert()
        .success()
        .stdout("bot: Only one message\nyou: hmm\nbot: Bye!\n");
}

#[test]
fn test_exec_instant_finishes_with_far_start_delay() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "messages = [\"Much later\"]\nstart_delay_ms = 20000000000000\n",
    )
    .unwrap();

    cargo_bin_cmd!("cheerbot")
        .env("CHEERBOT_HOME", dir.path())
        .args(["exec", "--instant", "--reply", "okay"])
        .timeout(Duration::from_secs(30))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "bot: Much later\nyou: okay\nbot: Okay, I'll leave",
        ));
}

#[test]
fn test_exec_writes_log_file() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("cheerbot")
        .env("CHEERBOT_HOME", dir.path())
        .args(["exec", "--instant", "--reply", "okay"])
        .assert()
        .success();

    let log = fs::read_to_string(dir.path().join("logs").join("cheerbot.log")).unwrap();
    assert!(log.contains("dialogue started"));
}

#[test]
fn test_timeline_prints_offsets() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("cheerbot")
        .env("CHEERBOT_HOME", dir.path())
        .arg("timeline")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("+1000ms  Hey there!"))
        .stdout(predicate::str::contains("+15000ms  (awaiting reply)"));
}
