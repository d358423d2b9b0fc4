// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `flowcast forecast`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

const ISSUES: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../tests/specs/cli/fixtures/issues.json"
);
const NOW: &str = "2024-01-15T09:00:00Z";

fn flowcast() -> Command {
    cargo_bin_cmd!("flowcast")
}

fn forecast(temp: &TempDir, extra: &[&str]) -> Command {
    let mut cmd = flowcast();
    cmd.args(["forecast", ISSUES, "--now", NOW, "--runs", "1000"])
        .args(extra)
        .current_dir(temp.path());
    cmd
}

fn forecast_json(temp: &TempDir, extra: &[&str]) -> serde_json::Value {
    let mut args = vec!["-o", "json"];
    args.extend_from_slice(extra);
    let output = forecast(temp, &args).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Output shape
// =============================================================================

#[test]
fn forecast_text_table() {
    let temp = TempDir::new().unwrap();
    forecast(&temp, &["-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("DATE"))
        .stdout(predicate::str::contains("LIKELIHOOD"))
        .stdout(predicate::str::contains("%"));
}

#[test]
fn forecast_json_describes_run() {
    let temp = TempDir::new().unwrap();
    let json = forecast_json(&temp, &["-n", "3", "--seed", "9"]);
    assert_eq!(json["start_date"], NOW);
    assert_eq!(json["issue_count"], 3);
    assert_eq!(json["run_count"], 1000);
    assert_eq!(json["seed"], 9);
    assert_eq!(json["history_size"], 4);
    assert!(json.get("interval").is_none());

    let rows = json["rows"].as_array().unwrap();
    assert!(!rows.is_empty());
    let mut previous = 0.0;
    for row in rows {
        let end = row["end_quantile"].as_f64().unwrap();
        assert!(end >= previous);
        assert!(row["start_quantile"].as_f64().unwrap() <= end);
        previous = end;
    }
}

#[test]
fn long_tail_keeps_every_run() {
    let temp = TempDir::new().unwrap();
    let json = forecast_json(&temp, &["-n", "4", "--long-tail"]);
    let rows = json["rows"].as_array().unwrap();
    let total: u64 = rows.iter().map(|row| row["count"].as_u64().unwrap()).sum();
    assert_eq!(total, 1000);
    assert_eq!(rows.last().unwrap()["cumulative_count"], 1000);
}

#[test]
fn same_seed_reproduces_output() {
    let temp = TempDir::new().unwrap();
    let first = forecast(&temp, &["-n", "5", "--seed", "17"]).output().unwrap();
    let second = forecast(&temp, &["-n", "5", "--seed", "17"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn seed_and_runs_from_config() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("flowcast.toml"),
        "[forecast]\nruns = 200\nseed = 5\n",
    )
    .unwrap();
    let output = flowcast()
        .args(["forecast", ISSUES, "--now", NOW, "-n", "2", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["run_count"], 200);
    assert_eq!(json["seed"], 5);
}

// =============================================================================
// History selection
// =============================================================================

#[test]
fn window_limits_history() {
    let temp = TempDir::new().unwrap();
    let json = forecast_json(&temp, &["-n", "2", "--window", "1w"]);
    assert_eq!(json["history_size"], 2);
    assert_eq!(json["interval"]["start"], "2024-01-08T09:00:00Z");
    assert_eq!(json["interval"]["end"], NOW);
}

#[test]
fn start_date_is_used() {
    let temp = TempDir::new().unwrap();
    let json = forecast_json(&temp, &["-n", "2", "--start", "2024-03-01"]);
    assert_eq!(json["start_date"], "2024-03-01T00:00:00Z");
    assert!(json["rows"][0]["date"]
        .as_str()
        .unwrap()
        .starts_with("2024-03"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn epics_without_completions_fail() {
    let temp = TempDir::new().unwrap();
    forecast(&temp, &["-n", "1", "--level", "epic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient data for forecast"));
}

#[test]
fn empty_window_fails() {
    let temp = TempDir::new().unwrap();
    forecast(&temp, &["-n", "1", "--window", "1d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient data for forecast"));
}

#[parameterized(
    no_unit = { "30" },
    unknown_unit = { "3x" },
    negative = { "-2d" },
)]
fn invalid_window_fails(window: &str) {
    let temp = TempDir::new().unwrap();
    forecast(&temp, &["-n", "1", &format!("--window={window}")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn zero_count_rejected() {
    let temp = TempDir::new().unwrap();
    forecast(&temp, &["-n", "0"]).assert().failure();
}
