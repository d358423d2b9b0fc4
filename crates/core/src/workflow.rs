// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow stages and cycle time policy defaults.
//!
//! Stored workflows and policies reference statuses by name. Statuses get
//! renamed or retired in the tracker, so anything stored is validated
//! against the canonical statuses before use and rebuilt from defaults when
//! it no longer fits.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::issue::{StatusCategory, TransitionStatus};
use crate::policy::{CycleTimePolicy, EpicCycleTimePolicy, StatusPolicy};

/// A named group of statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct WorkflowStage {
    pub name: String,
    /// Whether the stage's statuses are in scope for a default policy.
    #[serde(default)]
    pub select_by_default: bool,
    pub statuses: Vec<TransitionStatus>,
}

/// Ordered stages over a flat list of canonical statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Workflow {
    pub stages: Vec<WorkflowStage>,
    pub statuses: Vec<TransitionStatus>,
}

impl Workflow {
    /// Names of the statuses in stages selected by default, in stage order.
    pub fn selected_statuses(&self) -> Vec<String> {
        self.stages
            .iter()
            .filter(|stage| stage.select_by_default)
            .flat_map(|stage| stage.statuses.iter().map(|s| s.name.clone()))
            .collect()
    }

    fn status_names(&self) -> HashSet<&str> {
        self.statuses.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Workflows for both hierarchy levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct WorkflowScheme {
    pub stories: Workflow,
    pub epics: Workflow,
}

fn is_subset<'a>(names: impl IntoIterator<Item = &'a str>, known: &HashSet<&str>) -> bool {
    names.into_iter().all(|name| known.contains(name))
}

/// Returns true if every stage status exists in the workflow's statuses.
pub fn is_valid_workflow(workflow: &Workflow) -> bool {
    let known = workflow.status_names();
    is_subset(
        workflow
            .stages
            .iter()
            .flat_map(|stage| stage.statuses.iter().map(|s| s.name.as_str())),
        &known,
    )
}

/// Returns true if both workflows of the scheme are valid.
pub fn is_valid_workflow_scheme(scheme: &WorkflowScheme) -> bool {
    is_valid_workflow(&scheme.stories) && is_valid_workflow(&scheme.epics)
}

fn is_valid_status_policy(policy: &StatusPolicy, workflow: &Workflow) -> bool {
    let known = workflow.status_names();
    policy
        .statuses
        .as_ref()
        .is_none_or(|statuses| is_subset(statuses.iter().map(String::as_str), &known))
}

/// Returns true if every status named by the policy exists in the scheme.
pub fn is_valid_cycle_time_policy(policy: &CycleTimePolicy, scheme: &WorkflowScheme) -> bool {
    let epics_valid = match &policy.epics {
        EpicCycleTimePolicy::Status(epic_policy) => {
            is_valid_status_policy(epic_policy, &scheme.epics)
        }
        EpicCycleTimePolicy::Computed { .. } => true,
    };
    is_valid_status_policy(&policy.stories, &scheme.stories) && epics_valid
}

/// Groups canonical statuses into one stage per status category.
///
/// Only the In Progress stage is selected by default.
pub fn build_default_workflow(statuses: &[TransitionStatus]) -> Workflow {
    let stages = StatusCategory::ALL
        .iter()
        .map(|&category| WorkflowStage {
            name: category.display_name().to_string(),
            select_by_default: category == StatusCategory::InProgress,
            statuses: statuses
                .iter()
                .filter(|s| s.category == category)
                .cloned()
                .collect(),
        })
        .collect();
    Workflow {
        stages,
        statuses: statuses.to_vec(),
    }
}

/// Builds the default scheme from the canonical statuses of each level.
pub fn build_default_workflow_scheme(
    story_statuses: &[TransitionStatus],
    epic_statuses: &[TransitionStatus],
) -> WorkflowScheme {
    WorkflowScheme {
        stories: build_default_workflow(story_statuses),
        epics: build_default_workflow(epic_statuses),
    }
}

/// Keeps a stored scheme if it is valid and only references canonical
/// statuses; otherwise builds the default scheme.
pub fn resolve_workflow_scheme(
    stored: Option<&WorkflowScheme>,
    story_statuses: &[TransitionStatus],
    epic_statuses: &[TransitionStatus],
) -> WorkflowScheme {
    let canonical = |statuses: &[TransitionStatus]| -> HashSet<String> {
        statuses.iter().map(|s| s.name.clone()).collect()
    };
    let fits = |workflow: &Workflow, statuses: &[TransitionStatus]| {
        let known = canonical(statuses);
        workflow.statuses.iter().all(|s| known.contains(&s.name))
    };

    match stored {
        Some(scheme)
            if is_valid_workflow_scheme(scheme)
                && fits(&scheme.stories, story_statuses)
                && fits(&scheme.epics, epic_statuses) =>
        {
            scheme.clone()
        }
        Some(_) => {
            tracing::warn!("stored workflow no longer matches canonical statuses, using defaults");
            build_default_workflow_scheme(story_statuses, epic_statuses)
        }
        None => build_default_workflow_scheme(story_statuses, epic_statuses),
    }
}

/// Keeps the stored policy if it is valid for `scheme`; otherwise builds
/// one from the default-selected stages.
pub fn build_default_cycle_time_policy(
    stored: Option<&CycleTimePolicy>,
    scheme: &WorkflowScheme,
) -> CycleTimePolicy {
    if let Some(policy) = stored {
        if is_valid_cycle_time_policy(policy, scheme) {
            return policy.clone();
        }
        tracing::warn!("stored cycle time policy references unknown statuses, using defaults");
    }
    CycleTimePolicy {
        stories: StatusPolicy::new(Some(scheme.stories.selected_statuses()), false),
        epics: EpicCycleTimePolicy::Computed { filter: None },
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
