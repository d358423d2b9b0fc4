// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod forecast;
pub mod metrics;
pub mod schema;
pub mod statuses;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod workflow;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

use fc_core::workflow::{
    build_default_cycle_time_policy, is_valid_cycle_time_policy, resolve_workflow_scheme,
};
use fc_core::{
    canonical_statuses, parse_raw_issues, Clock, CycleTimePolicy, HierarchyLevel, Issue,
    RawIssue, SystemClock, WorkflowScheme,
};

use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::parse::parse_date;

/// Issues and settings shared by every analysis command.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    /// Reference time closing open intervals.
    pub now: DateTime<Utc>,
    /// Issues with their timelines built up to `now`.
    pub issues: Vec<Issue>,
}

/// Workflow scheme and cycle time policy in effect for a set of issues.
#[derive(Debug, Clone)]
pub struct ResolvedWorkflow {
    pub scheme: WorkflowScheme,
    pub policy: CycleTimePolicy,
    /// Whether the configured policy fits the scheme. None without one.
    pub configured_policy_valid: Option<bool>,
}

impl Context {
    pub fn new(config: Config, raw: Vec<RawIssue>, now: DateTime<Utc>) -> Self {
        let issues = raw
            .into_iter()
            .map(|issue| Issue::from_raw(issue, now))
            .collect();
        Context {
            config,
            now,
            issues,
        }
    }

    /// Validates the configured workflow and policy against the observed
    /// statuses, rebuilding defaults for whatever no longer fits.
    pub fn resolve_workflow(&self) -> ResolvedWorkflow {
        let story_statuses = canonical_statuses(&self.issues, HierarchyLevel::Story);
        let epic_statuses = canonical_statuses(&self.issues, HierarchyLevel::Epic);
        let scheme = resolve_workflow_scheme(
            self.config.workflow.as_ref(),
            &story_statuses,
            &epic_statuses,
        );
        let configured = self.config.policy.as_ref();
        ResolvedWorkflow {
            policy: build_default_cycle_time_policy(configured, &scheme),
            configured_policy_valid: configured
                .map(|policy| is_valid_cycle_time_policy(policy, &scheme)),
            scheme,
        }
    }
}

/// Helper to load config, reference time and issues from command arguments.
pub fn open_input(input: &InputArgs) -> Result<Context> {
    let config = Config::load(input.config.as_deref())?;
    let now = match &input.now {
        Some(now) => parse_date(now)?,
        None => SystemClock.now(),
    };
    let raw = read_issues(&input.issues)?;
    tracing::info!(issues = raw.len(), %now, "loaded issues");
    Ok(Context::new(config, raw, now))
}

/// Reads a JSON array of raw issues from `path`.
pub fn read_issues(path: &Path) -> Result<Vec<RawIssue>> {
    let content = fs::read_to_string(path).map_err(|source| Error::ReadIssues {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_raw_issues(&content)?)
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
