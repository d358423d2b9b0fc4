// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for commands that support JSON output.

use schemars::schema::RootSchema;
use schemars::schema_for;

use super::print_json;
use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::output::{
    ForecastOutputJson, MetricsOutputJson, StatusesOutputJson, WorkflowOutputJson,
};

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    print_json(&schema(cmd))
}

pub(crate) fn schema(cmd: SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::Metrics => schema_for!(MetricsOutputJson),
        SchemaCommand::Statuses => schema_for!(StatusesOutputJson),
        SchemaCommand::Workflow => schema_for!(WorkflowOutputJson),
        SchemaCommand::Forecast => schema_for!(ForecastOutputJson),
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
