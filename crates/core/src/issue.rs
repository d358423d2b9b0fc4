// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the flow metrics engine.
//!
//! This module contains the fundamental data types: StatusCategory,
//! TransitionStatus, StatusChange, Transition, RawIssue, Issue and
//! IssueFlowMetrics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::timeline::build_transitions;

/// Coarse grouping every workflow status belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    /// Work not yet started.
    #[serde(alias = "To Do", alias = "new")]
    ToDo,
    /// Work underway.
    #[serde(alias = "In Progress", alias = "indeterminate")]
    InProgress,
    /// Work finished (or abandoned).
    #[serde(alias = "Done")]
    Done,
}

impl StatusCategory {
    /// All categories in workflow order.
    pub const ALL: [StatusCategory; 3] = [
        StatusCategory::ToDo,
        StatusCategory::InProgress,
        StatusCategory::Done,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::ToDo => "to_do",
            StatusCategory::InProgress => "in_progress",
            StatusCategory::Done => "done",
        }
    }

    /// Returns the human readable name Jira uses for the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            StatusCategory::ToDo => "To Do",
            StatusCategory::InProgress => "In Progress",
            StatusCategory::Done => "Done",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "to_do" | "todo" | "new" => Ok(StatusCategory::ToDo),
            "in_progress" | "indeterminate" => Ok(StatusCategory::InProgress),
            "done" => Ok(StatusCategory::Done),
            _ => Err(Error::InvalidStatusCategory(s.to_string())),
        }
    }
}

/// Position of an issue in the Jira hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum HierarchyLevel {
    #[serde(alias = "Story")]
    Story,
    #[serde(alias = "Epic")]
    Epic,
}

impl HierarchyLevel {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            HierarchyLevel::Story => "story",
            HierarchyLevel::Epic => "epic",
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HierarchyLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "story" => Ok(HierarchyLevel::Story),
            "epic" => Ok(HierarchyLevel::Epic),
            _ => Err(Error::InvalidHierarchyLevel(s.to_string())),
        }
    }
}

/// A workflow status as seen in a transition.
///
/// Statuses are identified by name; the category travels with it so that
/// policies without explicit status lists can still classify time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct TransitionStatus {
    pub name: String,
    pub category: StatusCategory,
}

impl TransitionStatus {
    pub fn new(name: impl Into<String>, category: StatusCategory) -> Self {
        TransitionStatus {
            name: name.into(),
            category,
        }
    }
}

/// A status change as recorded by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct StatusChange {
    /// When the change happened.
    pub date: DateTime<Utc>,
    pub from_status: TransitionStatus,
    pub to_status: TransitionStatus,
}

/// One closed interval of an issue's timeline.
///
/// `time_in_status` is the fractional number of days spent in `to_status`
/// between `date` and `until`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Transition {
    pub date: DateTime<Utc>,
    pub until: DateTime<Utc>,
    pub from_status: TransitionStatus,
    pub to_status: TransitionStatus,
    pub time_in_status: f64,
}

/// Flow metrics computed for a single issue.
///
/// An issue is either completed (`completed` and `cycle_time`) or still
/// open (`age`), never both. When nothing can be determined every field
/// is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct IssueFlowMetrics {
    /// When work on the issue started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<DateTime<Utc>>,
    /// When the issue reached done.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<DateTime<Utc>>,
    /// Days of in-scope time between started and completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_time: Option<f64>,
    /// Days of in-scope time since the issue started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Whether a story passed the epic child filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_in_epic: Option<bool>,
}

impl IssueFlowMetrics {
    /// Returns true if no metric could be determined.
    pub fn is_empty(&self) -> bool {
        self.started.is_none()
            && self.completed.is_none()
            && self.cycle_time.is_none()
            && self.age.is_none()
    }

    /// Returns true if the issue has a completion date.
    pub fn is_completed(&self) -> bool {
        self.completed.is_some()
    }
}

/// An issue as delivered by the data source, before its timeline is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIssue {
    pub key: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub issue_type: String,
    pub hierarchy_level: HierarchyLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Name of the current status.
    pub status: String,
    pub status_category: StatusCategory,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub status_changes: Vec<StatusChange>,
}

/// An issue with its normalized transition timeline and computed metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Issue {
    /// Issue key (e.g. `PROJ-123`).
    pub key: String,
    #[serde(default)]
    pub summary: String,
    /// Issue type name as configured in the tracker (Story, Bug, ...).
    #[serde(default)]
    pub issue_type: String,
    pub hierarchy_level: HierarchyLevel,
    /// Key of the parent epic, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Name of the current status.
    pub status: String,
    pub status_category: StatusCategory,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
    #[serde(default)]
    pub metrics: IssueFlowMetrics,
}

impl Issue {
    /// Builds an issue from raw data, normalizing its status changes into a
    /// contiguous timeline that ends at `now`.
    pub fn from_raw(raw: RawIssue, now: DateTime<Utc>) -> Self {
        let current = TransitionStatus::new(raw.status.clone(), raw.status_category);
        let transitions = build_transitions(raw.created, &current, &raw.status_changes, now);
        Issue {
            key: raw.key,
            summary: raw.summary,
            issue_type: raw.issue_type,
            hierarchy_level: raw.hierarchy_level,
            parent_key: raw.parent_key,
            labels: raw.labels,
            components: raw.components,
            resolution: raw.resolution,
            status: raw.status,
            status_category: raw.status_category,
            created: raw.created,
            transitions,
            metrics: IssueFlowMetrics::default(),
        }
    }

    /// Returns a copy of this issue carrying the given metrics.
    pub fn with_metrics(&self, metrics: IssueFlowMetrics) -> Issue {
        Issue {
            metrics,
            ..self.clone()
        }
    }
}

/// Parses a JSON array of raw issues.
///
/// Issue keys must be unique.
pub fn parse_raw_issues(json: &str) -> Result<Vec<RawIssue>> {
    let issues: Vec<RawIssue> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for issue in &issues {
        if !seen.insert(issue.key.as_str()) {
            return Err(Error::InvalidInput(format!(
                "duplicate issue key: '{}'",
                issue.key
            )));
        }
    }
    Ok(issues)
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
