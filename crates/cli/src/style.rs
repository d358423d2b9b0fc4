// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text layout and terminal colors.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use clap::builder::styling::Styles;
use std::io::IsTerminal;

/// ANSI 256-color codes used in help output.
pub mod codes {
    /// Section headers
    pub const HEADER: u8 = 74;
    /// Commands and literals
    pub const LITERAL: u8 = 250;
    /// Placeholders and descriptions
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    if should_colorize() {
        format!("\x1b[38;5;{code}m{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// clap Styles matching the help colors.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    Styles::styled()
        .header(fg(codes::HEADER))
        .usage(fg(codes::HEADER))
        .literal(fg(codes::LITERAL))
        .placeholder(fg(codes::CONTEXT))
        .valid(fg(codes::CONTEXT))
}

/// Main help template with the command list ahead of the options.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{analysis}
  {metrics}     Compute cycle time and age for every issue
  {statuses}    Show the canonical status order
  {workflow}    Show the workflow scheme and cycle time policy
  {forecast}    Forecast completion dates for remaining issues

{setup}
  {schema}      Output JSON Schema for commands
  {completion}  Generate shell completions
",
        analysis = header("Analysis:"),
        setup = header("Setup:"),
        metrics = literal("metrics"),
        statuses = literal("statuses"),
        workflow = literal("workflow"),
        forecast = literal("forecast"),
        schema = literal("schema"),
        completion = literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    examples(
        "\
Get started:
  flowcast metrics issues.json          Cycle times and ages
  flowcast forecast issues.json -n 10   When will 10 more issues be done?",
    )
}

/// Colorize an examples help block.
///
/// Lines ending in `:` are headers. Other lines are split at the first run
/// of two or more spaces into a command and its description.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match trimmed.find("  ") {
                Some(split) => {
                    let (command, description) = trimmed.split_at(split);
                    format!("{indent}{}{}", literal(command), context(description))
                }
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
