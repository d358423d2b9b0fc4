// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain text rendering for command output.

use chrono::{DateTime, Utc};
use std::fmt::Write;

use fc_core::{
    CycleTimePolicy, EpicCycleTimePolicy, Issue, StatusPolicy, SummaryRow, TransitionStatus,
    Workflow, WorkflowScheme,
};

/// Formats a day count with one decimal, or `-` when absent.
pub fn format_days(days: Option<f64>) -> String {
    match days {
        Some(days) => format!("{days:.1}d"),
        None => "-".to_string(),
    }
}

/// Formats a timestamp as its UTC calendar date, or `-` when absent.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}

/// One line per issue: key, level, status, started, completed, cycle time, age.
pub fn metrics_table(issues: &[Issue]) -> String {
    let key_width = issues
        .iter()
        .map(|issue| issue.key.len())
        .chain(std::iter::once("KEY".len()))
        .max()
        .unwrap_or(3);
    let status_width = issues
        .iter()
        .map(|issue| issue.status.len())
        .chain(std::iter::once("STATUS".len()))
        .max()
        .unwrap_or(6);

    let mut out = format!(
        "{:<key_width$}  {:<5}  {:<status_width$}  {:<10}  {:<10}  {:>7}  {:>7}\n",
        "KEY", "LEVEL", "STATUS", "STARTED", "COMPLETED", "CYCLE", "AGE"
    );
    for issue in issues {
        let _ = writeln!(
            out,
            "{:<key_width$}  {:<5}  {:<status_width$}  {:<10}  {:<10}  {:>7}  {:>7}",
            issue.key,
            issue.hierarchy_level.as_str(),
            issue.status,
            format_date(issue.metrics.started),
            format_date(issue.metrics.completed),
            format_days(issue.metrics.cycle_time),
            format_days(issue.metrics.age),
        );
    }
    out
}

/// Numbered list of statuses with their categories.
pub fn status_list(statuses: &[TransitionStatus]) -> String {
    let mut out = String::new();
    for (i, status) in statuses.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} ({})",
            i + 1,
            status.name,
            status.category.display_name()
        );
    }
    out
}

fn workflow_text(out: &mut String, title: &str, workflow: &Workflow) {
    let _ = writeln!(out, "{title}:");
    for stage in &workflow.stages {
        let names: Vec<&str> = stage.statuses.iter().map(|s| s.name.as_str()).collect();
        let marker = if stage.select_by_default { "*" } else { "" };
        let _ = writeln!(out, "  {}{marker}: {}", stage.name, names.join(", "));
    }
}

fn status_policy_text(policy: &StatusPolicy) -> String {
    let statuses = match &policy.statuses {
        Some(statuses) => statuses.join(", "),
        None => "any In Progress status".to_string(),
    };
    let wait = if policy.include_wait_time {
        "wait time included"
    } else {
        "wait time excluded"
    };
    format!("{statuses} ({wait})")
}

/// Workflow stages per level followed by the policy in effect.
///
/// Stages selected by default are marked with `*`.
pub fn workflow_summary(scheme: &WorkflowScheme, policy: &CycleTimePolicy) -> String {
    let mut out = String::new();
    workflow_text(&mut out, "Stories", &scheme.stories);
    workflow_text(&mut out, "Epics", &scheme.epics);
    out.push_str("Policy:\n");
    let _ = writeln!(out, "  stories: {}", status_policy_text(&policy.stories));
    let epics = match &policy.epics {
        EpicCycleTimePolicy::Status(epic_policy) => status_policy_text(epic_policy),
        EpicCycleTimePolicy::Computed { filter: None } => "computed from stories".to_string(),
        EpicCycleTimePolicy::Computed { filter: Some(_) } => {
            "computed from filtered stories".to_string()
        }
    };
    let _ = writeln!(out, "  epics: {epics}");
    out
}

/// Forecast rows with the likelihood of being done by each date.
pub fn forecast_table(rows: &[SummaryRow]) -> String {
    let mut out = format!(
        "{:<10}  {:>6}  {:>10}  {:>10}\n",
        "DATE", "RUNS", "CUMULATIVE", "LIKELIHOOD"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<10}  {:>6}  {:>10}  {:>9.1}%",
            row.date.format("%Y-%m-%d"),
            row.count,
            row.cumulative_count,
            row.end_quantile * 100.0,
        );
    }
    out
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
