//! JSON rendering for scripts and agents.

use serde::Serialize;

use crate::cli::command::Command;
use crate::error::Result;

/// Help listing entry.
#[derive(Debug, Serialize)]
struct HelpEntry {
    command: &'static str,
    description: &'static str,
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// The formatted simulator lines as a JSON array of strings.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_list_json(lines: &[String], pretty: bool) -> Result<String> {
    to_json(lines, pretty)
}

/// The help listing as a JSON array of `{command, description}` objects.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_help_json(commands: &[Command], pretty: bool) -> Result<String> {
    let entries: Vec<_> = commands
        .iter()
        .map(|c| HelpEntry {
            command: c.name(),
            description: c.description(),
        })
        .collect();
    to_json(&entries, pretty)
}
