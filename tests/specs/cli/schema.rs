// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `flowcast schema`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use yare::parameterized;

fn flowcast() -> Command {
    cargo_bin_cmd!("flowcast")
}

fn schema(name: &str) -> serde_json::Value {
    let output = flowcast().args(["schema", name]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn schema_requires_subcommand() {
    flowcast().arg("schema").assert().failure();
}

#[parameterized(
    metrics = { "metrics", "MetricsOutputJson" },
    statuses = { "statuses", "StatusesOutputJson" },
    workflow = { "workflow", "WorkflowOutputJson" },
    forecast = { "forecast", "ForecastOutputJson" },
)]
fn schema_is_titled_json_schema(name: &str, title: &str) {
    let json = schema(name);
    assert!(json.get("$schema").is_some());
    assert_eq!(json["title"], title);
    assert_eq!(json["type"], "object");
}

#[test]
fn metrics_schema_lists_status_categories() {
    let text = serde_json::to_string(&schema("metrics")).unwrap();
    assert!(text.contains("\"to_do\""));
    assert!(text.contains("\"in_progress\""));
    assert!(text.contains("\"done\""));
}

#[test]
fn forecast_schema_includes_rows() {
    let json = schema("forecast");
    let properties = json["properties"].as_object().unwrap();
    assert!(properties.contains_key("rows"));
    assert!(properties.contains_key("history_size"));
    assert!(json["definitions"]
        .as_object()
        .unwrap()
        .contains_key("SummaryRow"));
}

#[test]
fn schema_help_lists_available_schemas() {
    flowcast()
        .args(["schema", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available schemas"));
}
