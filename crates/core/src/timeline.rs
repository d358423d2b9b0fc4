// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalization of raw status changes into a gapless timeline.
//!
//! The timeline always opens with a synthetic transition out of the
//! [`CREATED_STATUS`] pseudo-status at the issue's creation date. Every
//! following transition is closed by the next one's date, and the final
//! transition is closed by `now`.

use chrono::{DateTime, Utc};

use crate::issue::{StatusCategory, StatusChange, Transition, TransitionStatus};

/// Name of the pseudo-status an issue is in before its first real status.
pub const CREATED_STATUS: &str = "Created";

const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Returns the fractional number of days from `earlier` to `later`.
///
/// Negative when `later` precedes `earlier`.
pub fn days_between(later: DateTime<Utc>, earlier: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / MS_PER_DAY
}

/// The pseudo-status used as the source of the synthetic first transition.
pub fn created_status() -> TransitionStatus {
    TransitionStatus::new(CREATED_STATUS, StatusCategory::ToDo)
}

/// Builds the contiguous transition timeline for one issue.
///
/// `changes` may be empty or unsorted. Changes dated before `created` are
/// clamped to `created`, and a `now` earlier than the last change closes
/// the final transition with zero duration.
pub fn build_transitions(
    created: DateTime<Utc>,
    current_status: &TransitionStatus,
    changes: &[StatusChange],
    now: DateTime<Utc>,
) -> Vec<Transition> {
    let mut sorted: Vec<&StatusChange> = changes.iter().collect();
    sorted.sort_by_key(|change| change.date);

    let initial_status = sorted
        .first()
        .map(|change| change.from_status.clone())
        .unwrap_or_else(|| current_status.clone());

    let mut openings = Vec::with_capacity(sorted.len() + 1);
    openings.push((created, created_status(), initial_status));
    for change in sorted {
        openings.push((
            change.date.max(created),
            change.from_status.clone(),
            change.to_status.clone(),
        ));
    }

    let closings: Vec<DateTime<Utc>> = openings
        .iter()
        .skip(1)
        .map(|(date, _, _)| *date)
        .chain(std::iter::once(now))
        .collect();

    openings
        .into_iter()
        .zip(closings)
        .map(|((date, from_status, to_status), until)| {
            let until = until.max(date);
            Transition {
                date,
                until,
                from_status,
                to_status,
                time_in_status: days_between(until, date),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
