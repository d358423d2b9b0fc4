// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for unit tests.

#![allow(clippy::unwrap_used)]
#![allow(dead_code)]

use chrono::{DateTime, Utc};

use crate::issue::{
    HierarchyLevel, Issue, IssueFlowMetrics, RawIssue, StatusCategory, StatusChange,
    TransitionStatus,
};

pub fn date(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

pub fn backlog() -> TransitionStatus {
    TransitionStatus::new("Backlog", StatusCategory::ToDo)
}

pub fn in_progress() -> TransitionStatus {
    TransitionStatus::new("In Progress", StatusCategory::InProgress)
}

pub fn in_review() -> TransitionStatus {
    TransitionStatus::new("In Review", StatusCategory::InProgress)
}

pub fn blocked() -> TransitionStatus {
    TransitionStatus::new("Blocked", StatusCategory::ToDo)
}

pub fn dev_complete() -> TransitionStatus {
    TransitionStatus::new("Dev Complete", StatusCategory::Done)
}

pub fn done() -> TransitionStatus {
    TransitionStatus::new("Done", StatusCategory::Done)
}

pub fn closed() -> TransitionStatus {
    TransitionStatus::new("Closed", StatusCategory::Done)
}

/// Builder for test issues. Status changes are chained from the previous
/// status, starting at Backlog.
pub struct IssueBuilder {
    raw: RawIssue,
    last: TransitionStatus,
}

impl IssueBuilder {
    pub fn story(key: &str) -> Self {
        Self::new(key, HierarchyLevel::Story, "Story")
    }

    pub fn epic(key: &str) -> Self {
        Self::new(key, HierarchyLevel::Epic, "Epic")
    }

    fn new(key: &str, hierarchy_level: HierarchyLevel, issue_type: &str) -> Self {
        IssueBuilder {
            raw: RawIssue {
                key: key.to_string(),
                summary: format!("Summary of {key}"),
                issue_type: issue_type.to_string(),
                hierarchy_level,
                parent_key: None,
                labels: Vec::new(),
                components: Vec::new(),
                resolution: None,
                status: backlog().name,
                status_category: StatusCategory::ToDo,
                created: date("2024-01-01T00:00:00Z"),
                status_changes: Vec::new(),
            },
            last: backlog(),
        }
    }

    pub fn created(mut self, when: &str) -> Self {
        self.raw.created = date(when);
        self
    }

    pub fn parent(mut self, key: &str) -> Self {
        self.raw.parent_key = Some(key.to_string());
        self
    }

    pub fn issue_type(mut self, issue_type: &str) -> Self {
        self.raw.issue_type = issue_type.to_string();
        self
    }

    pub fn labels(mut self, labels: &[&str]) -> Self {
        self.raw.labels = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn components(mut self, components: &[&str]) -> Self {
        self.raw.components = components.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn resolution(mut self, resolution: &str) -> Self {
        self.raw.resolution = Some(resolution.to_string());
        self
    }

    /// Records a change into `to` and makes it the current status.
    pub fn to(mut self, when: &str, to: TransitionStatus) -> Self {
        self.raw.status_changes.push(StatusChange {
            date: date(when),
            from_status: self.last.clone(),
            to_status: to.clone(),
        });
        self.set_status(to)
    }

    /// Overrides the current status without recording a change.
    pub fn status(self, status: TransitionStatus) -> Self {
        self.set_status(status)
    }

    fn set_status(mut self, status: TransitionStatus) -> Self {
        self.raw.status = status.name.clone();
        self.raw.status_category = status.category;
        self.last = status;
        self
    }

    pub fn raw(self) -> RawIssue {
        self.raw
    }

    pub fn build(self, now: &str) -> Issue {
        Issue::from_raw(self.raw, date(now))
    }
}

/// A done story carrying only the metrics the forecast reads.
pub fn completed_story(key: &str, completed: &str, cycle_time: f64) -> Issue {
    IssueBuilder::story(key)
        .status(done())
        .build(completed)
        .with_metrics(IssueFlowMetrics {
            completed: Some(date(completed)),
            cycle_time: Some(cycle_time),
            ..IssueFlowMetrics::default()
        })
}
