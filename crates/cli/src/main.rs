// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use fcrs::Cli;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so JSON on stdout stays parseable. `RUST_LOG`
/// overrides the default `warn` level.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    setup_logging();
    let cli = Cli::parse();
    if let Err(e) = fcrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
