// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Historical inputs for the simulation.
//!
//! Completed issues in a window are reduced to two things: the cycle times
//! to sample lead times from, and the number of issues completed on each
//! calendar day, split into weekday and weekend series.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::outliers::exclude_outliers;
use crate::issue::Issue;

/// Inclusive window of completion dates, bucketed by UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Interval { start, end }
    }

    /// Span from the first to the last completion among `issues`.
    pub fn spanning<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Option<Self> {
        issues
            .into_iter()
            .filter_map(|issue| issue.metrics.completed)
            .fold(None, |span: Option<Interval>, completed| match span {
                None => Some(Interval::new(completed, completed)),
                Some(span) => Some(Interval::new(
                    span.start.min(completed),
                    span.end.max(completed),
                )),
            })
    }

    /// Every calendar day touched by the interval, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        let end = self.end.date_naive();
        let mut days = Vec::new();
        let mut day = self.start.date_naive();
        while day <= end {
            days.push(day);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        days
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        day >= self.start.date_naive() && day <= self.end.date_naive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Throughputs {
    pub weekday: Vec<u32>,
    pub weekend: Vec<u32>,
}

impl Throughputs {
    /// Whether any day in either series completed at least one issue.
    pub fn has_positive(&self) -> bool {
        self.weekday.iter().chain(&self.weekend).any(|&count| count > 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SimulationInputs {
    pub cycle_times: Vec<f64>,
    pub throughputs: Throughputs,
}

/// ISO weekday numbers 6 and 7 (Saturday, Sunday).
pub fn is_weekend_day(iso_weekday: u32) -> bool {
    iso_weekday >= 6
}

/// Completions per calendar day across `interval`, zero-filled.
///
/// Issues completed outside the interval are ignored.
pub fn daily_counts(issues: &[Issue], interval: &Interval) -> Vec<DailyCount> {
    let mut counts: Vec<DailyCount> = interval
        .days()
        .into_iter()
        .map(|date| DailyCount { date, count: 0 })
        .collect();
    let Some(first) = counts.first().map(|c| c.date) else {
        return counts;
    };

    for completed in issues.iter().filter_map(|issue| issue.metrics.completed) {
        let day = completed.date_naive();
        if !interval.contains_day(day) {
            continue;
        }
        let offset = (day - first).num_days();
        if let Some(entry) = usize::try_from(offset).ok().and_then(|i| counts.get_mut(i)) {
            entry.count += 1;
        }
    }
    counts
}

pub fn split_by_weekday(counts: &[DailyCount]) -> Throughputs {
    let mut throughputs = Throughputs::default();
    for day in counts {
        if is_weekend_day(day.date.weekday().number_from_monday()) {
            throughputs.weekend.push(day.count);
        } else {
            throughputs.weekday.push(day.count);
        }
    }
    throughputs
}

/// Builds simulation inputs from the completed issues in `interval`.
///
/// Cycle times come from every issue that has one, optionally filtered
/// with Tukey fences.
pub fn compute_inputs(
    interval: &Interval,
    issues: &[Issue],
    exclude: bool,
) -> SimulationInputs {
    let cycle_times: Vec<f64> = issues
        .iter()
        .filter_map(|issue| issue.metrics.cycle_time)
        .collect();
    let cycle_times = if exclude {
        exclude_outliers(&cycle_times)
    } else {
        cycle_times
    };

    SimulationInputs {
        cycle_times,
        throughputs: split_by_weekday(&daily_counts(issues, interval)),
    }
}

#[cfg(test)]
#[path = "inputs_tests.rs"]
mod tests;
