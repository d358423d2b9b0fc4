// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration.
//!
//! Configuration is read from `flowcast.toml` and includes:
//! - `policy`: cycle time policy for stories and epics
//! - `forecast`: simulation run count and seed
//! - `workflow`: stored workflow scheme, validated against observed statuses

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use fc_core::forecast::DEFAULT_RUN_COUNT;
use fc_core::{CycleTimePolicy, WorkflowScheme};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "flowcast.toml";

/// Configuration stored in `flowcast.toml`. Every table is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Stored cycle time policy. Rebuilt from the workflow when absent or
    /// when it names statuses that no longer exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<CycleTimePolicy>,
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// Stored workflow scheme. Defaults are built from the issues when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<WorkflowScheme>,
}

/// Simulation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Number of simulated futures per forecast (default: 10000).
    #[serde(default = "default_runs")]
    pub runs: usize,
    /// Seed for the random generator (default: 0).
    #[serde(default)]
    pub seed: u64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        ForecastConfig {
            runs: default_runs(),
            seed: 0,
        }
    }
}

fn default_runs() -> usize {
    DEFAULT_RUN_COUNT
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.forecast.runs == 0 {
            return Err(Error::MustBePositive {
                field: "forecast.runs",
            });
        }
        Ok(config)
    }

    /// Loads configuration relative to the current directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let dir = std::env::current_dir()?;
        Self::load_from(explicit, &dir)
    }

    /// Loads `explicit` if given (it must exist), else `dir/flowcast.toml`
    /// if present, else the built-in defaults.
    pub fn load_from(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                let path = resolve(path, dir);
                if !path.is_file() {
                    return Err(Error::ConfigNotFound(path.display().to_string()));
                }
                path
            }
            None => {
                let path = dir.join(CONFIG_FILE_NAME);
                if !path.is_file() {
                    tracing::debug!("no {CONFIG_FILE_NAME} found, using defaults");
                    return Ok(Config::default());
                }
                path
            }
        };

        tracing::debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }
}

fn resolve(path: &Path, dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
