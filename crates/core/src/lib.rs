// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fc-core: Flow metrics and forecasting engine
//!
//! This crate turns issue status histories into cycle time and age metrics,
//! derives a workflow ordering from observed transitions, and forecasts
//! completion dates with a Monte Carlo simulation. It performs no I/O.

pub mod clock;
pub mod epic;
pub mod error;
pub mod forecast;
pub mod issue;
pub mod metrics;
pub mod ordering;
pub mod policy;
pub mod timeline;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use forecast::{forecast, ForecastParams, RandomGenerator, SeededGenerator, SummaryRow};
pub use issue::{
    parse_raw_issues, HierarchyLevel, Issue, IssueFlowMetrics, RawIssue, StatusCategory,
    StatusChange, Transition, TransitionStatus,
};
pub use metrics::{get_flow_metrics, get_flow_metrics_at};
pub use ordering::{canonical_statuses, sort_statuses};
pub use policy::{CycleTimePolicy, EpicCycleTimePolicy, StatusPolicy};
pub use workflow::{Workflow, WorkflowScheme};
