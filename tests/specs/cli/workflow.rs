// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `flowcast workflow`.

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

fn flowcast() -> Command {
    cargo_bin_cmd!("flowcast")
}

#[test]
fn default_workflow_groups_by_category() {
    let temp = TempDir::new().unwrap();
    flowcast()
        .args(["workflow", ISSUES])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Stories:\n  To Do: Backlog\n"))
        .stdout(predicate::str::contains("  In Progress*: In Progress, In Review\n"))
        .stdout(predicate::str::contains("  Done: Done\n"))
        .stdout(predicate::str::contains("Epics:\n  To Do: To Do\n"))
        .stdout(predicate::str::contains("epics: computed from stories"))
        .stdout(predicate::str::contains("note:").not());
}

#[test]
fn unknown_configured_status_falls_back_with_note() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("flowcast.toml"),
        "[policy.stories]\nstatuses = [\"Doing\"]\n",
    )
    .unwrap();
    flowcast()
        .args(["workflow", ISSUES])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "stories: In Progress, In Review (wait time excluded)",
        ))
        .stdout(predicate::str::contains("note: configured policy"));
}

#[test]
fn workflow_json_reports_policy_validity() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("flowcast.toml"),
        "[policy.stories]\nstatuses = [\"In Review\"]\n",
    )
    .unwrap();
    let output = flowcast()
        .args(["workflow", ISSUES, "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["configured_policy_valid"], true);
    assert_eq!(
        json["policy"]["stories"]["statuses"],
        serde_json::json!(["In Review"])
    );
    assert_eq!(json["scheme"]["stories"]["stages"].as_array().unwrap().len(), 3);
}
