// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::style;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{InputArgs, LevelArg};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "flowcast")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Flow metrics and Monte Carlo forecasts from issue status histories")]
#[command(help_template = style::template())]
#[command(before_help = style::commands())]
#[command(after_help = style::quickstart())]
#[command(styles = style::styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute cycle time and age for every issue
    #[command(after_help = style::examples("\
Examples:
  flowcast metrics issues.json                       Metrics as a table
  flowcast metrics issues.json -o json               Issues with metrics as JSON
  flowcast metrics issues.json --now 2024-06-30      Pin the reference time
  flowcast metrics issues.json -c team.toml          Use a specific config"))]
    Metrics {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the canonical status order
    #[command(after_help = style::examples("\
Examples:
  flowcast statuses issues.json                      Story statuses in order
  flowcast statuses issues.json --level epic         Epic statuses in order"))]
    Statuses {
        #[command(flatten)]
        input: InputArgs,

        /// Hierarchy level to order
        #[arg(long, short = 'l', value_enum, default_value = "story")]
        level: LevelArg,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the workflow scheme and cycle time policy in effect
    Workflow {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Forecast when a number of remaining issues will be done
    #[command(after_help = style::examples("\
Examples:
  flowcast forecast issues.json -n 10                Forecast 10 issues from now
  flowcast forecast issues.json -n 10 --window 30d   Sample the last 30 days only
  flowcast forecast issues.json -n 5 --long-tail     Keep the extreme quantiles
  flowcast forecast issues.json -n 5 --seed 7        Reproduce a specific run

Durations:
  Units: h, d, w, M (30d), y (365d)"))]
    Forecast {
        #[command(flatten)]
        input: InputArgs,

        /// Number of remaining issues
        #[arg(long, short = 'n', value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Simulation start date (default: the reference time)
        #[arg(long, value_name = "DATE")]
        start: Option<String>,

        /// Only sample issues completed within this long before the reference time
        #[arg(long, short = 'w', value_name = "DURATION")]
        window: Option<String>,

        /// Hierarchy level whose completed issues form the history
        #[arg(long, short = 'l', value_enum, default_value = "story")]
        level: LevelArg,

        /// Drop outlying cycle times before sampling lead times
        #[arg(long)]
        exclude_outliers: bool,

        /// Skip the lead time for the first issue
        #[arg(long)]
        no_lead_times: bool,

        /// Keep the extreme low and high quantile rows
        #[arg(long)]
        long_tail: bool,

        /// Random seed (default: from config)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of simulated runs (default: from config)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        runs: Option<u64>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Output JSON Schema for commands with JSON output
    #[command(
        subcommand,
        after_help = style::examples("\
Examples:
  flowcast schema metrics     Schema for 'flowcast metrics -o json'
  flowcast schema forecast    Schema for 'flowcast forecast -o json'

Available schemas: metrics, statuses, workflow, forecast")
    )]
    Schema(SchemaCommand),

    /// Generate shell completions
    #[command(after_help = style::examples("\
Examples:
  flowcast completion bash > ~/.local/share/bash-completion/completions/flowcast
  flowcast completion zsh > ~/.zfunc/_flowcast"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Schema subcommands.
#[derive(Subcommand, Clone, Copy, Debug)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'flowcast metrics' JSON output
    Metrics,
    /// Output JSON Schema for 'flowcast statuses' JSON output
    Statuses,
    /// Output JSON Schema for 'flowcast workflow' JSON output
    Workflow,
    /// Output JSON Schema for 'flowcast forecast' JSON output
    Forecast,
}
