// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Epic metrics derived from child stories.
//!
//! The attribute filter is applied to the story pool before aggregation
//! ([`filter_issues`]); the aggregation itself only looks at parent keys.

use chrono::{DateTime, Utc};

use crate::issue::{Issue, IssueFlowMetrics, StatusCategory};
use crate::policy::EpicChildFilter;
use crate::timeline::days_between;

/// Returns the issues that pass `filter`.
pub fn filter_issues<'a>(issues: &'a [Issue], filter: &EpicChildFilter) -> Vec<&'a Issue> {
    issues.iter().filter(|issue| filter.matches(issue)).collect()
}

/// Aggregates the metrics of `epic`'s children found in `stories`.
///
/// Started is the earliest child start. Completed is the latest child
/// completion, surfaced only once the epic itself is done, since an epic
/// may stay open after all of its current children finish.
pub fn get_computed_flow_metrics<'a>(
    epic: &Issue,
    stories: impl IntoIterator<Item = &'a Issue>,
    now: DateTime<Utc>,
) -> IssueFlowMetrics {
    let children: Vec<&Issue> = stories
        .into_iter()
        .filter(|story| story.parent_key.as_deref() == Some(epic.key.as_str()))
        .collect();

    let started = children.iter().filter_map(|c| c.metrics.started).min();
    let completed = if epic.status_category == StatusCategory::Done {
        children.iter().filter_map(|c| c.metrics.completed).max()
    } else {
        None
    };

    if let Some(completed) = completed {
        let cycle_time = started.map_or(0.0, |started| days_between(completed, started).max(0.0));
        return IssueFlowMetrics {
            started,
            completed: Some(completed),
            cycle_time: Some(cycle_time),
            ..Default::default()
        };
    }

    match started {
        Some(started) => IssueFlowMetrics {
            started: Some(started),
            age: Some(days_between(now, started).max(0.0)),
            ..Default::default()
        },
        None => IssueFlowMetrics::default(),
    }
}

#[cfg(test)]
#[path = "epic_tests.rs"]
mod tests;
