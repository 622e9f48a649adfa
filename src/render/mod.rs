//! Output rendering for human and robot modes.

pub mod error;
pub mod human;
pub mod robot;

use crate::cli::args::OutputFormat;
use crate::cli::command::Command;
use crate::error::Result;

/// Render the formatted simulator lines of a `List` command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_list(lines: &[String], format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render_list(lines)),
        OutputFormat::Json => robot::render_list_json(lines, pretty),
    }
}

/// Render the help listing.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_help(commands: &[Command], format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human::render_help(commands)),
        OutputFormat::Json => robot::render_help_json(commands, pretty),
    }
}
