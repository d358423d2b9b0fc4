// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cycle time policies.
//!
//! A [`StatusPolicy`] decides which statuses count as "in progress" and
//! whether time spent waiting elsewhere between start and completion is
//! counted. Epics may either use a status policy of their own or derive
//! their metrics from their children ([`EpicCycleTimePolicy::Computed`]).

use serde::{Deserialize, Serialize};

use crate::issue::{Issue, StatusCategory, TransitionStatus};

/// Status based cycle time policy for one hierarchy level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct StatusPolicy {
    /// Statuses counted as in progress. When absent, the InProgress
    /// category is used instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<String>>,
    /// Count time spent outside the in-scope statuses too.
    #[serde(default)]
    pub include_wait_time: bool,
}

impl StatusPolicy {
    pub fn new(statuses: Option<Vec<String>>, include_wait_time: bool) -> Self {
        StatusPolicy {
            statuses,
            include_wait_time,
        }
    }

    /// Returns true if `status` is one of the policy statuses.
    fn is_policy_status(&self, status: &TransitionStatus) -> bool {
        self.statuses
            .as_ref()
            .is_some_and(|statuses| statuses.iter().any(|s| *s == status.name))
    }

    /// Returns true if time in `status` is in-progress time.
    pub fn in_scope(&self, status: &TransitionStatus) -> bool {
        match &self.statuses {
            Some(_) => self.is_policy_status(status),
            None => status.category == StatusCategory::InProgress,
        }
    }

    /// Returns true if reaching `status` means the work is done.
    ///
    /// A Done category status that is itself one of the policy statuses
    /// (e.g. "Dev Complete") is still an in-scope stage.
    pub fn is_done(&self, status: &TransitionStatus) -> bool {
        status.category == StatusCategory::Done && !self.is_policy_status(status)
    }

    /// Returns true if time spent in `status` counts towards cycle time and age.
    pub fn counts_time(&self, status: &TransitionStatus) -> bool {
        self.include_wait_time || self.in_scope(status)
    }
}

/// How an attribute filter treats its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Keep issues matching any of the values.
    Include,
    /// Drop issues matching any of the values.
    Exclude,
}

/// A set of attribute values to include or exclude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ValuesFilter {
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    #[serde(default)]
    pub values: Vec<String>,
}

impl ValuesFilter {
    pub fn include(values: &[&str]) -> Self {
        Self::new(FilterType::Include, values)
    }

    pub fn exclude(values: &[&str]) -> Self {
        Self::new(FilterType::Exclude, values)
    }

    fn new(filter_type: FilterType, values: &[&str]) -> Self {
        ValuesFilter {
            filter_type,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Tests an issue's attribute values against the filter. An empty
    /// value list places no constraint.
    pub fn matches<'a>(&self, candidates: impl IntoIterator<Item = &'a str>) -> bool {
        if self.values.is_empty() {
            return true;
        }
        let hit = candidates
            .into_iter()
            .any(|candidate| self.values.iter().any(|v| v == candidate));
        match self.filter_type {
            FilterType::Include => hit,
            FilterType::Exclude => !hit,
        }
    }
}

/// Attribute filter selecting which stories contribute to computed epic
/// metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct EpicChildFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<ValuesFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_types: Option<ValuesFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolutions: Option<ValuesFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<ValuesFilter>,
}

impl EpicChildFilter {
    /// Returns true if the issue passes every configured attribute filter.
    pub fn matches(&self, issue: &Issue) -> bool {
        let passes = |filter: &Option<ValuesFilter>, values: Vec<&str>| {
            filter.as_ref().is_none_or(|f| f.matches(values))
        };
        passes(&self.labels, issue.labels.iter().map(String::as_str).collect())
            && passes(&self.issue_types, vec![issue.issue_type.as_str()])
            && passes(&self.resolutions, issue.resolution.iter().map(String::as_str).collect())
            && passes(&self.components, issue.components.iter().map(String::as_str).collect())
    }
}

/// Cycle time policy for epics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EpicCycleTimePolicy {
    /// Epics are measured from their own status transitions.
    Status(StatusPolicy),
    /// Epics are measured by aggregating their (filtered) children.
    Computed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filter: Option<EpicChildFilter>,
    },
}

impl Default for EpicCycleTimePolicy {
    fn default() -> Self {
        EpicCycleTimePolicy::Computed { filter: None }
    }
}

/// Cycle time policy for both hierarchy levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CycleTimePolicy {
    #[serde(default)]
    pub stories: StatusPolicy,
    #[serde(default)]
    pub epics: EpicCycleTimePolicy,
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
