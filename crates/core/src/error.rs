// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for fc-core operations.
//!
//! The metric, ordering and aggregation functions are total and never fail.
//! Errors only surface while parsing input values or when a forecast is
//! asked to sample from empty history.

use thiserror::Error;

/// All possible errors that can occur in fc-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid status category: '{0}'\n  hint: valid categories are: to_do, in_progress, done")]
    InvalidStatusCategory(String),

    #[error("invalid hierarchy level: '{0}'\n  hint: valid levels are: story, epic")]
    InvalidHierarchyLevel(String),

    #[error("insufficient data for forecast: {0}")]
    InsufficientData(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for fc-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
