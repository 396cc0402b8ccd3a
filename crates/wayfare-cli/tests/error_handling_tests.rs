//! Tests for error handling, suggestions, and exit codes.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn wayfare(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("wayfare");
    cmd.arg("--config")
        .arg(home.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .current_dir(home.path());
    cmd
}

#[test]
fn unknown_entity_lists_known_ones() {
    let home = TempDir::new().unwrap();
    wayfare(&home)
        .args(["validate", "invoice"])
        .write_stdin("{}")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown entity 'invoice'"))
        .stderr(predicate::str::contains("support-ticket"));
}

#[test]
fn illegal_transition_points_at_the_table() {
    let home = TempDir::new().unwrap();
    wayfare(&home)
        .args(["transitions", "booking", "--from", "COMPLETED", "--to", "PENDING"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "illegal booking status transition: COMPLETED -> PENDING",
        ))
        .stderr(predicate::str::contains("wayfare transitions booking --from COMPLETED"));
}

#[test]
fn unknown_status_is_a_user_error() {
    let home = TempDir::new().unwrap();
    wayfare(&home)
        .args(["transitions", "booking", "--from", "SHIPPED"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("SHIPPED"));
}

#[test]
fn malformed_config_exits_with_configuration_code() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.toml"), "[validation\n").unwrap();
    wayfare(&home)
        .args(["schema", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn unknown_config_key() {
    let home = TempDir::new().unwrap();
    wayfare(&home)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn rejected_payload_suggests_schema_show() {
    let home = TempDir::new().unwrap();
    wayfare(&home)
        .args(["validate", "experience"])
        .write_stdin(r#"{"title": ""}"#)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("wayfare schema show"));
}

#[test]
fn bad_arguments_exit_two() {
    let home = TempDir::new().unwrap();
    wayfare(&home)
        .args(["transitions", "invoice"])
        .assert()
        .code(2);
}
