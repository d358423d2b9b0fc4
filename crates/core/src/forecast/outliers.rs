// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tukey fence outlier filtering.

use std::cmp::Ordering;

/// Fence multiplier applied to the interquartile range.
pub const FENCE_MULTIPLIER: f64 = 1.5;

/// Returns `values` without the points outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`.
///
/// Input order is preserved. Fewer than four values are returned unchanged.
pub fn exclude_outliers(values: &[f64]) -> Vec<f64> {
    if values.len() < 4 {
        return values.to_vec();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let q1 = percentile(&sorted, 25.0);
    let q3 = percentile(&sorted, 75.0);
    let iqr = q3 - q1;
    let lower = q1 - FENCE_MULTIPLIER * iqr;
    let upper = q3 + FENCE_MULTIPLIER * iqr;

    values
        .iter()
        .copied()
        .filter(|value| *value >= lower && *value <= upper)
        .collect()
}

/// Percentile of a sorted slice using linear interpolation between ranks.
pub(crate) fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted {
        [] => 0.0,
        [only] => *only,
        _ => {
            let rank = (p / 100.0) * (sorted.len() - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = (rank.ceil() as usize).min(sorted.len() - 1);
            let frac = rank - lower as f64;
            sorted[lower] * (1.0 - frac) + sorted[upper] * frac
        }
    }
}

#[cfg(test)]
#[path = "outliers_tests.rs"]
mod tests;
