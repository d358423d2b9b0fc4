// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `flowcast statuses`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;
use yare::parameterized;

const ISSUES: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../tests/specs/cli/fixtures/issues.json"
);

fn flowcast() -> Command {
    cargo_bin_cmd!("flowcast")
}

#[parameterized(
    story = { "story", " 1. Backlog (To Do)\n 2. In Progress (In Progress)\n 3. In Review (In Progress)\n 4. Done (Done)\n" },
    epic = { "epic", " 1. To Do (To Do)\n 2. In Progress (In Progress)\n" },
)]
fn statuses_in_canonical_order(level: &str, expected: &str) {
    let temp = TempDir::new().unwrap();
    flowcast()
        .args(["statuses", ISSUES, "--level", level])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(expected.to_string());
}

#[test]
fn statuses_json_has_categories() {
    let temp = TempDir::new().unwrap();
    let output = flowcast()
        .args(["statuses", ISSUES, "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["level"], "story");
    let statuses = json["statuses"].as_array().unwrap();
    assert_eq!(statuses.len(), 4);
    assert_eq!(statuses[0]["name"], "Backlog");
    assert_eq!(statuses[0]["category"], "to_do");
    assert_eq!(statuses[3]["category"], "done");
}

#[test]
fn empty_issue_list_has_no_statuses() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("empty.json"), "[]").unwrap();
    flowcast()
        .args(["statuses", "empty.json"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("");
}
