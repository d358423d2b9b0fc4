// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Histogram of simulated completion dates.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One whole-day bucket of simulated durations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SummaryRow {
    /// Start date shifted by the bucket's day count.
    pub date: DateTime<Utc>,
    /// Runs that finished in this bucket.
    pub count: u32,
    /// Runs that finished in this bucket or earlier.
    pub cumulative_count: u32,
    /// Share of runs that finished before this bucket.
    pub start_quantile: f64,
    /// Share of runs that finished in this bucket or earlier.
    pub end_quantile: f64,
}

/// Quantile trimmed from each end of the histogram.
pub fn long_tail_cutoff(bucket_count: usize) -> f64 {
    match bucket_count {
        0..=49 => 0.0,
        50..=99 => 0.01,
        100..=199 => 0.02,
        _ => 0.025,
    }
}

/// Groups run durations into whole-day buckets dated from `start_date`.
///
/// Durations are rounded up. Unless `include_long_tail` is set, buckets
/// lying entirely outside `[cutoff, 1 - cutoff]` are dropped.
pub fn summarize(
    runs: &[f64],
    start_date: DateTime<Utc>,
    include_long_tail: bool,
) -> Vec<SummaryRow> {
    let mut buckets: BTreeMap<i64, u32> = BTreeMap::new();
    for duration in runs {
        *buckets.entry(duration.ceil() as i64).or_insert(0) += 1;
    }

    let total = runs.len() as f64;
    let mut cumulative = 0u32;
    let rows: Vec<SummaryRow> = buckets
        .into_iter()
        .map(|(days, count)| {
            let start_quantile = f64::from(cumulative) / total;
            cumulative += count;
            SummaryRow {
                date: start_date + Duration::days(days),
                count,
                cumulative_count: cumulative,
                start_quantile,
                end_quantile: f64::from(cumulative) / total,
            }
        })
        .collect();

    if include_long_tail {
        return rows;
    }
    let cutoff = long_tail_cutoff(rows.len());
    rows.into_iter()
        .filter(|row| row.end_quantile >= cutoff && row.start_quantile <= 1.0 - cutoff)
        .collect()
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
