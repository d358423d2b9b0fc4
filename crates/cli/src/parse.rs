// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of date and duration arguments.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::{Error, Result};

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date (midnight UTC).
pub fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::InvalidDate {
            input: s.to_string(),
        })
}

/// Parse a duration string like "30d", "2w", "12h".
pub fn parse_duration(s: &str) -> Result<Duration> {
    let (num_str, unit) = split_number_unit(s)?;
    let num: i64 = num_str.parse().map_err(|_| Error::InvalidDuration {
        reason: format!("invalid number: '{num_str}'"),
    })?;

    let duration = match unit {
        "h" => Duration::try_hours(num),
        "d" => Duration::try_days(num),
        "w" => Duration::try_weeks(num),
        "M" => num.checked_mul(30).and_then(Duration::try_days),
        "y" => num.checked_mul(365).and_then(Duration::try_days),
        _ => {
            return Err(Error::InvalidDuration {
                reason: format!("unknown unit '{unit}'. Valid units: h, d, w, M, y"),
            })
        }
    };
    duration.ok_or_else(|| Error::InvalidDuration {
        reason: format!("out of range: '{s}'"),
    })
}

fn split_number_unit(s: &str) -> Result<(&str, &str)> {
    if s.is_empty() {
        return Err(Error::InvalidDuration {
            reason: "empty duration".to_string(),
        });
    }
    if s.starts_with('-') {
        return Err(Error::InvalidDuration {
            reason: "negative durations are not allowed".to_string(),
        });
    }

    let num_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if num_end == 0 {
        return Err(Error::InvalidDuration {
            reason: format!("must start with a number: '{s}'"),
        });
    }
    let (num_str, unit) = s.split_at(num_end);
    if unit.is_empty() {
        return Err(Error::InvalidDuration {
            reason: format!("missing unit: '{s}'. Valid units: h, d, w, M, y"),
        });
    }
    Ok((num_str, unit))
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
