//! End-to-end tests for the `wayfare` binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const BOOKING: &str = r#"{
    "id": "b-1",
    "touristId": "t-1",
    "pkgId": "p-1",
    "totalPrice": 120.5,
    "bookingStatus": "PENDING",
    "bookingDate": "2025-07-01",
    "createdAt": "2025-06-01T10:00:00Z"
}"#;

/// A command isolated from the user's config file and environment.
fn wayfare(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("wayfare");
    cmd.arg("--config")
        .arg(home.join("config.toml"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env_remove("WAYFARE__VALIDATION__FAIL_FAST")
        .env_remove("WAYFARE__VALIDATION__ENFORCE_TICKET_CLOSURE")
        .current_dir(home);
    cmd
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    wayfare(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn validate_help_lists_flags() {
    let home = TempDir::new().unwrap();
    wayfare(home.path())
        .args(["validate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--form"))
        .stdout(predicate::str::contains("--strict"))
        .stdout(predicate::str::contains("--fail-fast"));
}

// ── validate ──────────────────────────────────────────────────────────────────

#[test]
fn valid_signin_from_stdin() {
    let home = TempDir::new().unwrap();
    wayfare(home.path())
        .args(["validate", "signin"])
        .write_stdin(r#"{"username": "joanna", "password": "s3cret"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("sign-in as 'joanna'"))
        .stdout(predicate::str::contains("s3cret").not());
}

#[test]
fn short_username_is_rejected_with_field_message() {
    let home = TempDir::new().unwrap();
    wayfare(home.path())
        .args(["validate", "signin", "-"])
        .write_stdin(r#"{"username": "jo", "password": "x"}"#)
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "username: Username must be at least 3 characters",
        ))
        .stdout(predicate::str::contains("password:").not())
        .stderr(predicate::str::contains("1 of 1 payload(s) failed validation"));
}

#[test]
fn json_report_for_a_booking_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("booking.json");
    fs::write(&file, BOOKING).unwrap();

    let assert = wayfare(home.path())
        .args(["--output-format", "json", "validate", "booking"])
        .arg(&file)
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["entity"], "booking");
    assert_eq!(report["accepted"], 1);
    assert_eq!(report["rejected"], 0);
    assert_eq!(report["outcomes"][0]["status"], "accepted");
    assert_eq!(report["outcomes"][0]["entity"]["bookingStatus"], "PENDING");
    assert!(report["batchId"].is_string());
}

#[test]
fn json_report_carries_field_errors() {
    let home = TempDir::new().unwrap();
    let assert = wayfare(home.path())
        .args(["--output-format", "json", "validate", "booking"])
        .write_stdin(BOOKING.replace("PENDING", "SHIPPED"))
        .assert()
        .code(2);

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let outcome = &report["outcomes"][0];
    assert_eq!(outcome["status"], "rejected");
    assert!(outcome["error"]["fieldErrors"]["bookingStatus"].is_array());
}

#[test]
fn form_encoded_booking() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("checkout.txt");
    fs::write(
        &file,
        "id=b-1&touristId=t-1&pkgId=p-1&totalPrice=120.50&bookingStatus=CONFIRMED\
         &bookingDate=2025-07-01&createdAt=2025-06-01T10%3A00%3A00Z\n",
    )
    .unwrap();

    wayfare(home.path())
        .args(["validate", "booking", "--form"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("[CONFIRMED] 120.50"));
}

#[test]
fn strict_mode_rejects_open_ticket_with_response() {
    let home = TempDir::new().unwrap();
    let ticket = r#"{
        "id": "st-1",
        "userId": "u-1",
        "subject": "Refund",
        "description": "Tour cancelled",
        "status": "OPEN",
        "createdAt": "2025-06-01",
        "updatedAt": "2025-06-02",
        "adminResponse": "Refund issued"
    }"#;

    wayfare(home.path())
        .args(["validate", "support-ticket"])
        .write_stdin(ticket)
        .assert()
        .success();

    wayfare(home.path())
        .args(["validate", "ticket", "--strict"])
        .write_stdin(ticket)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("adminResponse"));
}

#[test]
fn strict_mode_can_come_from_the_environment() {
    let home = TempDir::new().unwrap();
    wayfare(home.path())
        .args(["validate", "support-ticket"])
        .env("WAYFARE__VALIDATION__ENFORCE_TICKET_CLOSURE", "true")
        .write_stdin(
            r#"{"id": "st-1", "userId": "u-1", "subject": "s", "description": "d",
                "status": "OPEN", "createdAt": "2025-06-01", "updatedAt": "2025-06-01",
                "closedByAdminId": "a-1"}"#,
        )
        .assert()
        .code(2)
        .stdout(predicate::str::contains("closedByAdminId"));
}

#[test]
fn directory_batch_reports_every_file() {
    let home = TempDir::new().unwrap();
    let batch = home.path().join("batch");
    fs::create_dir(&batch).unwrap();
    fs::write(batch.join("a.json"), r#"{"username": "ana", "password": "pw"}"#).unwrap();
    fs::write(batch.join("b.json"), "{ not json").unwrap();
    fs::write(batch.join("c.toml"), "username = \"cleo\"\npassword = \"pw\"\n").unwrap();

    wayfare(home.path())
        .args(["validate", "signin"])
        .arg(&batch)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("sign-in as 'ana'"))
        .stdout(predicate::str::contains("sign-in as 'cleo'"))
        .stdout(predicate::str::contains("2 accepted, 0 rejected, 1 unreadable"));
}

#[test]
fn fail_fast_stops_the_batch() {
    let home = TempDir::new().unwrap();
    wayfare(home.path())
        .args(["validate", "signin", "--fail-fast"])
        .write_stdin(
            r#"[{"username": "jo", "password": "x"}, {"username": "joanna", "password": "pw"}]"#,
        )
        .assert()
        .code(2)
        .stdout(predicate::str::contains("joanna").not())
        .stdout(predicate::str::contains("--fail-fast"));
}

#[test]
fn quiet_mode_prints_nothing_on_success() {
    let home = TempDir::new().unwrap();
    wayfare(home.path())
        .args(["-q", "validate", "signin"])
        .write_stdin(r#"{"username": "joanna", "password": "s3cret"}"#)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn empty_directory_is_not_found() {
    let home = TempDir::new().unwrap();
    let empty = home.path().join("empty");
    fs::create_dir(&empty).unwrap();

    wayfare(home.path())
        .args(["validate", "review"])
        .arg(&empty)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No payloads found"));
}

// ── schema & transitions ──────────────────────────────────────────────────────

#[test]
fn schema_list_names_every_entity() {
    let home = TempDir::new().unwrap();
    wayfare(home.path())
        .args(["schema", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("signin"))
        .stdout(predicate::str::contains("support-ticket"));
}

#[test]
fn schema_show_booking() {
    let home = TempDir::new().unwrap();
    wayfare(home.path())
        .args(["schema", "show", "booking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("totalPrice"))
        .stdout(predicate::str::contains("Total price must not be negative"));
}

#[test]
fn transitions_table_marks_terminal_states() {
    let home = TempDir::new().unwrap();
    wayfare(home.path())
        .args(["transitions", "ticket"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OPEN       -> CLOSED"))
        .stdout(predicate::str::contains("CLOSED     (terminal)"));
}

#[test]
fn allowed_transition_succeeds() {
    let home = TempDir::new().unwrap();
    wayfare(home.path())
        .args(["transitions", "booking", "--from", "PENDING", "--to", "CONFIRMED"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is allowed"));
}

#[test]
fn config_get_reads_the_file() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.toml"),
        "[validation]\nfail_fast = true\n",
    )
    .unwrap();

    wayfare(home.path())
        .args(["config", "get", "validation.fail_fast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("validation.fail_fast = true"));
}

#[test]
fn config_path_honours_flag() {
    let home = TempDir::new().unwrap();
    wayfare(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn init_writes_config_once() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");

    wayfare(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[validation]"));

    wayfare(home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn log_file_receives_json_events() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("logs").join("wayfare.json");
    fs::write(
        home.path().join("config.toml"),
        format!("[logging]\nfile = {:?}\n", log.display().to_string()),
    )
    .unwrap();

    wayfare(home.path())
        .args(["-v", "validate", "signin"])
        .write_stdin(r#"{"username": "joanna", "password": "s3cret"}"#)
        .assert()
        .success();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Batch finished"));
    assert!(!contents.contains("s3cret"));
}

#[test]
fn shell_completions() {
    let home = TempDir::new().unwrap();
    wayfare(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wayfare"));
}
