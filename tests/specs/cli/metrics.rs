// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `flowcast metrics`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ISSUES: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../tests/specs/cli/fixtures/issues.json"
);
const NOW: &str = "2024-01-15T09:00:00Z";

fn flowcast() -> Command {
    cargo_bin_cmd!("flowcast")
}

/// Runs `flowcast metrics` from an empty directory so no config is picked up.
fn metrics(temp: &TempDir, extra: &[&str]) -> Command {
    let mut cmd = flowcast();
    cmd.args(["metrics", ISSUES, "--now", NOW])
        .args(extra)
        .current_dir(temp.path());
    cmd
}

fn metrics_json(temp: &TempDir, extra: &[&str]) -> serde_json::Value {
    let mut args = vec!["-o", "json"];
    args.extend_from_slice(extra);
    let output = metrics(temp, &args).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn issue<'a>(json: &'a serde_json::Value, key: &str) -> &'a serde_json::Value {
    json["issues"]
        .as_array()
        .unwrap()
        .iter()
        .find(|issue| issue["key"] == key)
        .unwrap_or_else(|| panic!("issue {key} missing"))
}

// =============================================================================
// Text output
// =============================================================================

#[test]
fn metrics_text_lists_every_issue() {
    let temp = TempDir::new().unwrap();
    metrics(&temp, &[])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("KEY"))
        .stdout(predicate::str::contains("PROJ-1 "))
        .stdout(predicate::str::contains("PROJ-11"))
        .stdout(predicate::str::contains("3.0d"))
        .stdout(predicate::str::contains("13.0d"));
}

#[test]
fn missing_issues_file_fails() {
    let temp = TempDir::new().unwrap();
    flowcast()
        .args(["metrics", "missing.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read issues from"));
}

#[test]
fn malformed_issues_file_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("bad.json"), "{\"key\": 1}").unwrap();
    flowcast()
        .args(["metrics", "bad.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_now_fails_with_hint() {
    let temp = TempDir::new().unwrap();
    flowcast()
        .args(["metrics", ISSUES, "--now", "yesterday"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date: 'yesterday'"))
        .stderr(predicate::str::contains("hint:"));
}

// =============================================================================
// JSON output
// =============================================================================

#[test]
fn json_preserves_input_order() {
    let temp = TempDir::new().unwrap();
    let json = metrics_json(&temp, &[]);
    let keys: Vec<&str> = json["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        keys,
        ["PROJ-10", "PROJ-11", "PROJ-1", "PROJ-2", "PROJ-3", "PROJ-4", "PROJ-5", "PROJ-6"]
    );
    assert_eq!(json["now"], NOW);
}

#[test]
fn json_reports_cycle_time_and_age() {
    let temp = TempDir::new().unwrap();
    let json = metrics_json(&temp, &[]);

    let done = &issue(&json, "PROJ-1")["metrics"];
    assert_eq!(done["started"], "2024-01-02T09:00:00Z");
    assert_eq!(done["completed"], "2024-01-05T09:00:00Z");
    assert_eq!(done["cycle_time"].as_f64(), Some(3.0));
    assert!(done.get("age").is_none());

    let open = &issue(&json, "PROJ-4")["metrics"];
    assert_eq!(open["age"].as_f64(), Some(5.0));
    assert!(open.get("completed").is_none());

    let unstarted = &issue(&json, "PROJ-5")["metrics"];
    assert!(unstarted.get("started").is_none());
}

#[test]
fn json_epics_age_from_children() {
    let temp = TempDir::new().unwrap();
    let json = metrics_json(&temp, &[]);
    assert_eq!(issue(&json, "PROJ-10")["metrics"]["age"].as_f64(), Some(13.0));
    assert_eq!(issue(&json, "PROJ-11")["metrics"]["age"].as_f64(), Some(7.0));
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn config_in_working_directory_applies() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("flowcast.toml"),
        "[policy.stories]\nstatuses = [\"In Progress\"]\ninclude_wait_time = true\n",
    )
    .unwrap();
    let json = metrics_json(&temp, &[]);
    assert_eq!(
        json["policy"]["stories"]["statuses"],
        serde_json::json!(["In Progress"])
    );
}

#[test]
fn explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();
    metrics(&temp, &["--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("flowcast.toml"), "[forecast]\nruns = 0\n").unwrap();
    metrics(&temp, &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be greater than zero"));
}
