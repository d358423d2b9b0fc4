// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output structures.
//!
//! Each command with `-o json` prints one of these. The same types back
//! `flowcast schema`, so the published schema always matches the output.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

use fc_core::forecast::Interval;
use fc_core::{
    CycleTimePolicy, HierarchyLevel, Issue, SummaryRow, TransitionStatus, WorkflowScheme,
};

/// JSON output structure for the metrics command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct MetricsOutputJson {
    /// Reference time used for ages and open intervals.
    pub now: DateTime<Utc>,
    /// Policy the metrics were computed with.
    pub policy: CycleTimePolicy,
    /// Issues in input order, with timelines and metrics.
    pub issues: Vec<Issue>,
}

/// JSON output structure for the statuses command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct StatusesOutputJson {
    pub level: HierarchyLevel,
    /// Statuses in canonical order.
    pub statuses: Vec<TransitionStatus>,
}

/// JSON output structure for the workflow command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct WorkflowOutputJson {
    pub scheme: WorkflowScheme,
    pub policy: CycleTimePolicy,
    /// Whether the configured policy was kept. Absent when none is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configured_policy_valid: Option<bool>,
}

/// JSON output structure for the forecast command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ForecastOutputJson {
    pub start_date: DateTime<Utc>,
    /// Remaining issues that were forecast.
    pub issue_count: u32,
    pub run_count: usize,
    pub seed: u64,
    /// Completion window sampled for throughput, when restricted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<Interval>,
    /// Completed issues in the sampled history.
    pub history_size: usize,
    pub rows: Vec<SummaryRow>,
}
