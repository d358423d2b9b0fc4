// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cycle time and age computation.
//!
//! Rules for a single issue timeline under a [`StatusPolicy`]:
//! - Completed: the last transition must land on a done status. Walking
//!   backwards, completion is the most recent transition into a done status
//!   from a status that is not done, so `Dev Complete -> Done` and
//!   `Done -> Closed` chains resolve to the first done status.
//! - Started: the first transition into an in-scope status after the most
//!   recent earlier completion, so reopened work only counts its latest span.
//!   When no in-scope status follows that completion, the first in-scope
//!   transition of the whole timeline is used.
//! - Cycle time sums counted time over `[started, completed)`; age sums it
//!   from started through the final, open transition.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::epic::{filter_issues, get_computed_flow_metrics};
use crate::issue::{HierarchyLevel, Issue, IssueFlowMetrics, Transition};
use crate::policy::{CycleTimePolicy, EpicCycleTimePolicy, StatusPolicy};

/// Index of the transition that completed the issue, if it is done.
fn completed_index(transitions: &[Transition], policy: &StatusPolicy) -> Option<usize> {
    let last = transitions.last()?;
    if !policy.is_done(&last.to_status) {
        return None;
    }
    transitions
        .iter()
        .rposition(|t| policy.is_done(&t.to_status) && !policy.is_done(&t.from_status))
}

/// Index of the transition that started the current run of work, searching
/// only before `end`.
fn started_index(transitions: &[Transition], policy: &StatusPolicy, end: usize) -> Option<usize> {
    let window = &transitions[..end];
    let first_in_scope = |from: usize| {
        window[from..]
            .iter()
            .position(|t| policy.in_scope(&t.to_status))
            .map(|i| i + from)
    };
    let anchor = window
        .iter()
        .rposition(|t| policy.is_done(&t.to_status))
        .map_or(0, |i| i + 1);
    // Reopened without new in-scope work: fall back to the original start.
    first_in_scope(anchor).or_else(|| first_in_scope(0))
}

fn counted_time(transitions: &[Transition], policy: &StatusPolicy) -> f64 {
    transitions
        .iter()
        .filter(|t| policy.counts_time(&t.to_status))
        .map(|t| t.time_in_status)
        .sum()
}

/// Computes flow metrics for one issue from its transition timeline.
///
/// Never fails: a timeline with no recognisable start or completion
/// yields empty metrics.
pub fn get_status_flow_metrics(
    transitions: &[Transition],
    policy: &StatusPolicy,
) -> IssueFlowMetrics {
    let completed = completed_index(transitions, policy);
    let started = started_index(transitions, policy, completed.unwrap_or(transitions.len()));

    match (started, completed) {
        (None, None) => IssueFlowMetrics::default(),
        (None, Some(c)) => IssueFlowMetrics {
            completed: Some(transitions[c].date),
            cycle_time: Some(0.0),
            ..Default::default()
        },
        (Some(s), None) => IssueFlowMetrics {
            started: Some(transitions[s].date),
            age: Some(counted_time(&transitions[s..], policy)),
            ..Default::default()
        },
        (Some(s), Some(c)) => IssueFlowMetrics {
            started: Some(transitions[s].date),
            completed: Some(transitions[c].date),
            cycle_time: Some(counted_time(&transitions[s..c], policy)),
            ..Default::default()
        },
    }
}

/// Computes flow metrics for every issue, measuring computed epics against
/// the system clock.
pub fn get_flow_metrics(issues: &[Issue], policy: &CycleTimePolicy) -> Vec<Issue> {
    get_flow_metrics_at(issues, policy, &SystemClock)
}

/// Computes flow metrics for every issue.
///
/// Returns new issues in input order; the inputs are left untouched.
/// Stories always use the story policy. Epics use either their own status
/// policy or, for a computed policy, the aggregate of their children that
/// pass the child filter. Under a computed policy every story with a
/// parent records whether it was included.
pub fn get_flow_metrics_at<C: Clock>(
    issues: &[Issue],
    policy: &CycleTimePolicy,
    clock: &C,
) -> Vec<Issue> {
    let mut results: Vec<Issue> = issues
        .iter()
        .map(|issue| match (issue.hierarchy_level, &policy.epics) {
            (HierarchyLevel::Story, _) => {
                issue.with_metrics(get_status_flow_metrics(&issue.transitions, &policy.stories))
            }
            (HierarchyLevel::Epic, EpicCycleTimePolicy::Status(epic_policy)) => {
                issue.with_metrics(get_status_flow_metrics(&issue.transitions, epic_policy))
            }
            (HierarchyLevel::Epic, EpicCycleTimePolicy::Computed { .. }) => {
                issue.with_metrics(IssueFlowMetrics::default())
            }
        })
        .collect();

    if let EpicCycleTimePolicy::Computed { filter } = &policy.epics {
        let included: Option<HashSet<String>> = filter.as_ref().map(|filter| {
            filter_issues(&results, filter)
                .into_iter()
                .map(|issue| issue.key.clone())
                .collect()
        });
        for story in results
            .iter_mut()
            .filter(|i| i.hierarchy_level == HierarchyLevel::Story && i.parent_key.is_some())
        {
            let passes = included.as_ref().is_none_or(|keys| keys.contains(&story.key));
            story.metrics.included_in_epic = Some(passes);
        }

        let epic_metrics = computed_epic_metrics(&results, clock.now());
        for (idx, metrics) in epic_metrics {
            results[idx].metrics = metrics;
        }
    }

    tracing::debug!(
        issues = results.len(),
        measured = results.iter().filter(|i| !i.metrics.is_empty()).count(),
        "computed flow metrics"
    );
    results
}

/// Aggregates included children into metrics for every epic in `issues`.
fn computed_epic_metrics(issues: &[Issue], now: DateTime<Utc>) -> Vec<(usize, IssueFlowMetrics)> {
    let mut children: HashMap<&str, Vec<&Issue>> = HashMap::new();
    for story in issues.iter().filter(|i| {
        i.hierarchy_level == HierarchyLevel::Story && i.metrics.included_in_epic == Some(true)
    }) {
        if let Some(parent) = story.parent_key.as_deref() {
            children.entry(parent).or_default().push(story);
        }
    }

    issues
        .iter()
        .enumerate()
        .filter(|(_, issue)| issue.hierarchy_level == HierarchyLevel::Epic)
        .map(|(idx, epic)| {
            let stories = children.get(epic.key.as_str()).map_or(&[][..], Vec::as_slice);
            (
                idx,
                get_computed_flow_metrics(epic, stories.iter().copied(), now),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
