// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the fcrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] fc_core::Error),

    #[error(
        "config file not found: {0}\n  hint: omit --config to use ./flowcast.toml or built-in defaults"
    )]
    ConfigNotFound(String),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid date: '{input}'\n  hint: use RFC 3339 (2024-01-31T09:00:00Z) or YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("invalid duration: {reason}")]
    InvalidDuration { reason: String },

    #[error("{field} must be greater than zero")]
    MustBePositive { field: &'static str },

    #[error("cannot read issues from {path}: {source}")]
    ReadIssues {
        path: String,
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for fcrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
