// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Monte Carlo runs over historical throughput.

use std::cmp::Ordering;

use tracing::debug;

use super::inputs::{is_weekend_day, SimulationInputs};
use super::random::{sample, RandomGenerator};
use crate::error::{Error, Result};

/// Checks that every series a run will sample from can make progress.
pub fn check_inputs(inputs: &SimulationInputs, include_lead_times: bool) -> Result<()> {
    if include_lead_times && inputs.cycle_times.is_empty() {
        return Err(Error::InsufficientData(
            "no cycle times to sample lead times from".to_string(),
        ));
    }
    if !inputs.throughputs.has_positive() {
        return Err(Error::InsufficientData(
            "no day in the window completed any issues".to_string(),
        ));
    }
    Ok(())
}

/// Simulated ISO weekday after `elapsed_days` whole days from `start_weekday`.
pub fn weekday_after(start_weekday: u32, elapsed_days: i64) -> u32 {
    let offset = (i64::from(start_weekday) - 1 + elapsed_days).rem_euclid(7);
    // rem_euclid(7) is in 0..7
    offset as u32 + 1
}

/// Days needed to complete `issue_count` issues in one simulated future.
///
/// Callers must ensure [`check_inputs`] passes, otherwise the run never
/// finishes.
pub fn run_once<G: RandomGenerator + ?Sized>(
    inputs: &SimulationInputs,
    issue_count: u32,
    start_weekday: u32,
    include_lead_times: bool,
    generator: &mut G,
) -> f64 {
    let mut remaining = i64::from(issue_count);
    let mut duration = 0.0;

    if include_lead_times && remaining > 0 {
        if let Some(&lead_time) = sample(&inputs.cycle_times, generator) {
            duration = lead_time;
        }
        remaining -= 1;
    }

    while remaining > 0 {
        let weekday = weekday_after(start_weekday, duration.floor() as i64);
        let series = if is_weekend_day(weekday) {
            &inputs.throughputs.weekend
        } else {
            &inputs.throughputs.weekday
        };
        let throughput = sample(series, generator).copied().unwrap_or(0);
        remaining -= i64::from(throughput);
        duration += 1.0;
    }

    duration
}

/// Runs `run_count` simulations and returns their durations, sorted.
pub fn run_simulation<G: RandomGenerator + ?Sized>(
    inputs: &SimulationInputs,
    issue_count: u32,
    start_weekday: u32,
    include_lead_times: bool,
    run_count: usize,
    generator: &mut G,
) -> Result<Vec<f64>> {
    check_inputs(inputs, include_lead_times)?;
    debug!(
        run_count,
        issue_count,
        cycle_times = inputs.cycle_times.len(),
        weekdays = inputs.throughputs.weekday.len(),
        weekends = inputs.throughputs.weekend.len(),
        "running simulation"
    );

    let mut runs: Vec<f64> = (0..run_count)
        .map(|_| run_once(inputs, issue_count, start_weekday, include_lead_times, generator))
        .collect();
    runs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Ok(runs)
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod tests;
