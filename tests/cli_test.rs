//! Tests for the `ascii-draw` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FIXTURE_INPUT: &str = include_str!("fixtures/input.txt");
const FIXTURE_OUTPUT: &str = include_str!("fixtures/output.txt");

fn ascii_draw(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ascii-draw").unwrap();
    // Keep any user config out of the way
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .env_remove("ASCII_DRAW_ON_ERROR");
    cmd
}

#[test]
fn test_stdin_to_stdout() {
    let dir = TempDir::new().unwrap();
    ascii_draw(&dir)
        .write_stdin(FIXTURE_INPUT)
        .assert()
        .success()
        .stdout(FIXTURE_OUTPUT);
}

#[test]
fn test_file_input_and_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, FIXTURE_INPUT).unwrap();

    ascii_draw(&dir)
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), FIXTURE_OUTPUT);
}

#[test]
fn test_error_stops_session() {
    let dir = TempDir::new().unwrap();
    ascii_draw(&dir)
        .write_stdin("C 2 1\nL 1 1 2 2\nC 1 1\n")
        .assert()
        .failure()
        .stdout("----\n|  |\n----\n")
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_keep_going_skips_bad_lines() {
    let dir = TempDir::new().unwrap();
    ascii_draw(&dir)
        .arg("--keep-going")
        .write_stdin("Q 1\nC 1 1\nB 1 1 oo\nB 1 1 o\n")
        .assert()
        .success()
        .stdout("---\n| |\n---\n---\n|o|\n---\n");
}

#[test]
fn test_config_file_policy() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "on_error = \"skip\"\n").unwrap();
    ascii_draw(&dir)
        .write_stdin("L 1 1 1 1\nC 1 1\n")
        .assert()
        .success()
        .stdout("---\n| |\n---\n");
}

#[test]
fn test_env_overrides_config() {
    let dir = TempDir::new().unwrap();
    ascii_draw(&dir)
        .env("ASCII_DRAW_ON_ERROR", "skip")
        .write_stdin("B 1 1 o\nC 1 1\n")
        .assert()
        .success();
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    ascii_draw(&dir)
        .arg("--input")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}
