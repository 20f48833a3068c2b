//! End-to-end tests for the `counter` binary's headless `render` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const ERROR_TEXT: &str = "The counter cannot go below 0";

#[allow(deprecated)]
fn counter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("counter").unwrap();
    for var in ["COUNTER_START", "COUNTER_CONFIG", "COUNTER_LOG_FILE", "COUNTER_LOG", "NO_COLOR"] {
        cmd.env_remove(var);
    }
    cmd
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn render_initial_state() {
    counter_cmd()
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("The counter is currently 0\n"))
        .stdout(predicate::str::contains("[ Increment counter ]  [ Decrement counter ]"))
        .stdout(predicate::str::contains(ERROR_TEXT).not());
}

#[test]
fn render_decrement_at_zero_shows_error() {
    counter_cmd()
        .args(["render", "--press", "decrement"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The counter is currently 0"))
        .stdout(predicate::str::contains(ERROR_TEXT));
}

#[test]
fn render_presses_apply_in_order() {
    counter_cmd()
        .args(["render", "-p", "decrement", "-p", "increment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The counter is currently 1"))
        .stdout(predicate::str::contains(ERROR_TEXT).not());
}

#[test]
fn render_with_start_flag_and_env() {
    counter_cmd()
        .args(["render", "--start", "9", "--press", "decrement"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The counter is currently 8"));

    counter_cmd()
        .env("COUNTER_START", "7")
        .args(["render", "--press", "increment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The counter is currently 8"));
}

#[test]
fn render_honors_no_color_convention() {
    for value in ["1", "yes", "true"] {
        counter_cmd()
            .env("NO_COLOR", value)
            .args(["render", "--press", "decrement"])
            .assert()
            .success()
            .stdout(predicate::str::contains(ERROR_TEXT));
    }

    counter_cmd()
        .env("NO_COLOR", "1")
        .args(["--force-color", "render"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The counter is currently 0"));
}

#[test]
fn render_json_tree() {
    counter_cmd()
        .args(["render", "--press", "decrement", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"test_id\": \"component-app\""))
        .stdout(predicate::str::contains("\"test_id\": \"error-message\""));
}

#[test]
fn render_ansi_is_styled() {
    counter_cmd()
        .args(["render", "--format", "ansi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn start_from_config_file() {
    let file = config_file("start = 4\n");
    counter_cmd()
        .arg("--config")
        .arg(file.path())
        .args(["render", "--press", "increment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The counter is currently 5"));
}

#[test]
fn flag_overrides_config_file() {
    let file = config_file("start = 4\n");
    counter_cmd()
        .arg("--config")
        .arg(file.path())
        .args(["render", "--start", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The counter is currently 20"));
}

#[test]
fn invalid_config_fails() {
    let file = config_file("start = \"lots\"\n");
    counter_cmd()
        .arg("--config")
        .arg(file.path())
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn missing_config_fails() {
    counter_cmd()
        .args(["--config", "/definitely/not/here.toml", "render"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("here.toml"));
}

#[test]
fn negative_start_is_rejected() {
    counter_cmd()
        .args(["render", "--start", "-1"])
        .assert()
        .failure();
}

#[test]
fn unknown_press_is_rejected() {
    counter_cmd()
        .args(["render", "--press", "reset"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reset"));
}

#[test]
fn log_file_receives_logs() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("counter.log");
    counter_cmd()
        .arg("--log-file")
        .arg(&log)
        .args(["-vv", "render", "--press", "increment"])
        .assert()
        .success();
    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("counter updated"));
}
