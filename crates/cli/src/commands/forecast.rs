// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Forecast command implementation.
//!
//! The sampled history is the completed issues of one hierarchy level,
//! optionally restricted to a window ending at the reference time.

use fc_core::forecast::Interval;
use fc_core::{
    forecast, get_flow_metrics_at, FixedClock, ForecastParams, HierarchyLevel, Issue,
};

use super::{open_input, print_json, Context};
use crate::cli::{InputArgs, LevelArg, OutputFormat};
use crate::display::forecast_table;
use crate::error::{Error, Result};
use crate::output::ForecastOutputJson;
use crate::parse::{parse_date, parse_duration};

/// Forecast settings from the command line. Unset values fall back to
/// the config.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub count: u32,
    pub start: Option<String>,
    pub window: Option<String>,
    pub level: LevelArg,
    pub exclude_outliers: bool,
    pub include_lead_times: bool,
    pub include_long_tail: bool,
    pub seed: Option<u64>,
    pub runs: Option<usize>,
}

pub fn run(input: &InputArgs, options: &Options, output: OutputFormat) -> Result<()> {
    let ctx = open_input(input)?;
    let result = compute(&ctx, options)?;
    match output {
        OutputFormat::Text => print!("{}", forecast_table(&result.rows)),
        OutputFormat::Json => print_json(&result)?,
    }
    Ok(())
}

pub(crate) fn compute(ctx: &Context, options: &Options) -> Result<ForecastOutputJson> {
    let start_date = match &options.start {
        Some(start) => parse_date(start)?,
        None => ctx.now,
    };
    let interval = match &options.window {
        Some(window) => {
            let since = ctx
                .now
                .checked_sub_signed(parse_duration(window)?)
                .ok_or_else(|| Error::InvalidDuration {
                    reason: format!("window '{window}' reaches past the earliest date"),
                })?;
            Some(Interval::new(since, ctx.now))
        }
        None => None,
    };

    let policy = ctx.resolve_workflow().policy;
    let level = HierarchyLevel::from(options.level);
    let history: Vec<Issue> = get_flow_metrics_at(&ctx.issues, &policy, &FixedClock(ctx.now))
        .into_iter()
        .filter(|issue| issue.hierarchy_level == level)
        .filter(|issue| match (issue.metrics.completed, &interval) {
            (Some(completed), Some(interval)) => interval.contains_day(completed.date_naive()),
            (Some(_), None) => true,
            (None, _) => false,
        })
        .collect();
    tracing::info!(history = history.len(), count = options.count, "forecasting");

    let mut params = ForecastParams::new(&history, options.count, start_date);
    params.interval = interval;
    params.exclude_outliers = options.exclude_outliers;
    params.include_lead_times = options.include_lead_times;
    params.include_long_tail = options.include_long_tail;
    params.run_count = options.runs.unwrap_or(ctx.config.forecast.runs);
    params.seed = options.seed.unwrap_or(ctx.config.forecast.seed);

    let rows = forecast(&params)?;
    Ok(ForecastOutputJson {
        start_date,
        issue_count: options.count,
        run_count: params.run_count,
        seed: params.seed,
        interval,
        history_size: history.len(),
        rows,
    })
}

#[cfg(test)]
#[path = "forecast_tests.rs"]
mod tests;
