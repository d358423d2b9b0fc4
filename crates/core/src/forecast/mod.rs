// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Monte Carlo completion forecasts.
//!
//! A forecast samples the cycle times and daily throughput of recently
//! completed issues to estimate when a number of remaining issues will be
//! done, and summarizes the simulated durations as a dated histogram.

pub mod inputs;
pub mod outliers;
pub mod random;
pub mod simulation;
pub mod summary;

use chrono::{DateTime, Datelike, Utc};
use tracing::info;

use crate::error::{Error, Result};
use crate::issue::Issue;

pub use inputs::{
    compute_inputs, daily_counts, split_by_weekday, Interval, SimulationInputs, Throughputs,
};
pub use outliers::exclude_outliers;
pub use random::{RandomGenerator, SeededGenerator, SequenceGenerator};
pub use simulation::{run_once, run_simulation};
pub use summary::{long_tail_cutoff, summarize, SummaryRow};

/// Runs per forecast unless configured otherwise.
pub const DEFAULT_RUN_COUNT: usize = 10_000;

#[derive(Debug, Clone)]
pub struct ForecastParams<'a> {
    /// Completed issues whose history drives the simulation.
    pub selected_issues: &'a [Issue],
    /// Remaining issues to forecast.
    pub issue_count: u32,
    pub start_date: DateTime<Utc>,
    /// Throughput window. Defaults to the span of the selected completions.
    pub interval: Option<Interval>,
    pub exclude_outliers: bool,
    pub include_lead_times: bool,
    pub include_long_tail: bool,
    pub run_count: usize,
    pub seed: u64,
}

impl<'a> ForecastParams<'a> {
    pub fn new(selected_issues: &'a [Issue], issue_count: u32, start_date: DateTime<Utc>) -> Self {
        ForecastParams {
            selected_issues,
            issue_count,
            start_date,
            interval: None,
            exclude_outliers: false,
            include_lead_times: true,
            include_long_tail: false,
            run_count: DEFAULT_RUN_COUNT,
            seed: 0,
        }
    }
}

/// Forecasts with a generator seeded from `params.seed`.
pub fn forecast(params: &ForecastParams<'_>) -> Result<Vec<SummaryRow>> {
    forecast_with(params, &mut SeededGenerator::new(params.seed))
}

/// Forecasts drawing every sample from `generator`.
pub fn forecast_with<G: RandomGenerator + ?Sized>(
    params: &ForecastParams<'_>,
    generator: &mut G,
) -> Result<Vec<SummaryRow>> {
    let issues = params.selected_issues;
    let interval = match params.interval {
        Some(interval) => interval,
        None => Interval::spanning(issues).ok_or_else(|| {
            Error::InsufficientData("no completed issues to forecast from".to_string())
        })?,
    };

    let inputs = compute_inputs(&interval, issues, params.exclude_outliers);
    let runs = run_simulation(
        &inputs,
        params.issue_count,
        params.start_date.weekday().number_from_monday(),
        params.include_lead_times,
        params.run_count,
        generator,
    )?;
    let rows = summarize(&runs, params.start_date, params.include_long_tail);

    info!(
        completed = issues.iter().filter(|i| i.metrics.is_completed()).count(),
        issue_count = params.issue_count,
        rows = rows.len(),
        "forecast complete"
    );
    Ok(rows)
}

#[cfg(test)]
#[path = "forecast_tests.rs"]
mod tests;
