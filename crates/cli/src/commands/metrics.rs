// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use fc_core::{get_flow_metrics_at, FixedClock};

use super::{open_input, print_json, Context};
use crate::cli::{InputArgs, OutputFormat};
use crate::display::metrics_table;
use crate::error::Result;
use crate::output::MetricsOutputJson;

pub fn run(input: &InputArgs, output: OutputFormat) -> Result<()> {
    let ctx = open_input(input)?;
    let result = compute(&ctx);
    match output {
        OutputFormat::Text => print!("{}", metrics_table(&result.issues)),
        OutputFormat::Json => print_json(&result)?,
    }
    Ok(())
}

/// Computes metrics for every issue under the policy in effect.
pub(crate) fn compute(ctx: &Context) -> MetricsOutputJson {
    let policy = ctx.resolve_workflow().policy;
    let issues = get_flow_metrics_at(&ctx.issues, &policy, &FixedClock(ctx.now));
    let completed = issues.iter().filter(|i| i.metrics.is_completed()).count();
    tracing::info!(issues = issues.len(), completed, "computed flow metrics");
    MetricsOutputJson {
        now: ctx.now,
        policy,
        issues,
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
