// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::{open_input, print_json, Context};
use crate::cli::{InputArgs, OutputFormat};
use crate::display::workflow_summary;
use crate::error::Result;
use crate::output::WorkflowOutputJson;

pub fn run(input: &InputArgs, output: OutputFormat) -> Result<()> {
    let ctx = open_input(input)?;
    let result = compute(&ctx);
    match output {
        OutputFormat::Text => {
            print!("{}", workflow_summary(&result.scheme, &result.policy));
            if result.configured_policy_valid == Some(false) {
                println!("note: configured policy names unknown statuses; defaults shown");
            }
        }
        OutputFormat::Json => print_json(&result)?,
    }
    Ok(())
}

pub(crate) fn compute(ctx: &Context) -> WorkflowOutputJson {
    let resolved = ctx.resolve_workflow();
    WorkflowOutputJson {
        scheme: resolved.scheme,
        policy: resolved.policy,
        configured_policy_valid: resolved.configured_policy_valid,
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
