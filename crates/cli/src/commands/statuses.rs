// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use fc_core::{canonical_statuses, HierarchyLevel};

use super::{open_input, print_json, Context};
use crate::cli::{InputArgs, LevelArg, OutputFormat};
use crate::display::status_list;
use crate::error::Result;
use crate::output::StatusesOutputJson;

pub fn run(input: &InputArgs, level: LevelArg, output: OutputFormat) -> Result<()> {
    let ctx = open_input(input)?;
    let result = compute(&ctx, level.into());
    match output {
        OutputFormat::Text => print!("{}", status_list(&result.statuses)),
        OutputFormat::Json => print_json(&result)?,
    }
    Ok(())
}

pub(crate) fn compute(ctx: &Context, level: HierarchyLevel) -> StatusesOutputJson {
    StatusesOutputJson {
        level,
        statuses: canonical_statuses(&ctx.issues, level),
    }
}

#[cfg(test)]
#[path = "statuses_tests.rs"]
mod tests;
