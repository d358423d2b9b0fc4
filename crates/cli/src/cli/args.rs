// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by every command that
//! reads an issues file.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use fc_core::HierarchyLevel;

/// Issues file plus the settings that shape how it is read.
#[derive(Args, Clone, Debug)]
pub struct InputArgs {
    /// JSON file with issues and their status changes
    #[arg(value_name = "ISSUES")]
    pub issues: PathBuf,

    /// Config file (default: ./flowcast.toml if present)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reference time for ages and open intervals (RFC 3339 or YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub now: Option<String>,
}

/// Hierarchy level selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    #[default]
    Story,
    Epic,
}

impl From<LevelArg> for HierarchyLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Story => HierarchyLevel::Story,
            LevelArg::Epic => HierarchyLevel::Epic,
        }
    }
}
