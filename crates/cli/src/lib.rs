// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fcrs - flow metrics and delivery forecasts from issue histories.
//!
//! This crate provides the command layer of the `flowcast` CLI. It reads a
//! JSON export of issues with their status changes, applies the cycle time
//! policy from `flowcast.toml`, and hands the analysis to [`fc_core`].
//!
//! # Main Components
//!
//! - [`Config`] - Cycle time policy, workflow scheme and forecast defaults
//! - [`display`] - Plain text tables for every command
//! - [`output`] - JSON output shapes, also published as JSON Schema
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! use fcrs::Cli;
//!
//! let cli = Cli::parse_from(["flowcast", "metrics", "issues.json"]);
//! fcrs::run(cli.command)?;
//! ```

mod cli;
mod commands;

pub mod config;
pub mod display;
pub mod error;
pub mod output;
pub mod parse;
pub mod style;

pub use cli::{Cli, Command, InputArgs, LevelArg, OutputFormat, SchemaCommand};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Metrics { input, output } => commands::metrics::run(&input, output),
        Command::Statuses {
            input,
            level,
            output,
        } => commands::statuses::run(&input, level, output),
        Command::Workflow { input, output } => commands::workflow::run(&input, output),
        Command::Forecast {
            input,
            count,
            start,
            window,
            level,
            exclude_outliers,
            no_lead_times,
            long_tail,
            seed,
            runs,
            output,
        } => {
            let options = commands::forecast::Options {
                count,
                start,
                window,
                level,
                exclude_outliers,
                include_lead_times: !no_lead_times,
                include_long_tail: long_tail,
                seed,
                runs: runs.map(|runs| usize::try_from(runs).unwrap_or(usize::MAX)),
            };
            commands::forecast::run(&input, &options, output)
        }
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "flowcast", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
