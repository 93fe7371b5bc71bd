//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help_lists_workflow_commands() {
    let mut cmd = Command::cargo_bin("rfpctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rfp"))
        .stdout(predicate::str::contains("vendors"))
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn test_rfp_create_help() {
    let mut cmd = Command::cargo_bin("rfpctl").unwrap();
    cmd.arg("rfp").arg("create").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("stdin"));
}

#[test]
fn test_vendors_add_requires_name_and_email() {
    let mut cmd = Command::cargo_bin("rfpctl").unwrap();
    cmd.arg("vendors").arg("add").arg("--name").arg("Acme");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--email"));
}

#[test]
fn test_send_rejects_non_numeric_rfp_id_before_any_request() {
    let mut cmd = Command::cargo_bin("rfpctl").unwrap();
    // Point at a dead address so an accidental request would also fail loudly
    cmd.env("RFPCTL_BASE_URL", "http://127.0.0.1:1")
        .arg("send")
        .arg("--rfp-id")
        .arg("seven")
        .arg("--vendor-id")
        .arg("3");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid RFP id 'seven'"));
}

#[test]
fn test_compare_forwards_free_text_id_to_the_server() {
    // No client-side validation: a non-numeric id reaches the transport,
    // so against a dead address the failure is an HTTP one
    let mut cmd = Command::cargo_bin("rfpctl").unwrap();
    cmd.env("RFPCTL_BASE_URL", "http://127.0.0.1:1")
        .arg("compare")
        .arg("NaN");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("HTTP request failed"));
}

#[test]
fn test_config_path_prints_the_toml_location() {
    let mut cmd = Command::cargo_bin("rfpctl").unwrap();
    cmd.arg("config").arg("path");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(".rfpctl"))
        .stdout(predicate::str::contains("config.toml"));
}
