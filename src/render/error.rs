//! Error rendering for fbsimctl.
//!
//! Errors are written to stderr, either as plain text with fix suggestions or
//! as structured JSON when `--format json` is active.

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::FbsimError;

// =============================================================================
// Public API
// =============================================================================

/// Render an error for the given output format.
#[must_use]
pub fn render_error(error: &FbsimError, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Json => render_error_json(error, pretty),
        OutputFormat::Human => render_simple(error),
    }
}

/// Render error as structured JSON for machine consumption.
#[must_use]
pub fn render_error_json(error: &FbsimError, pretty: bool) -> String {
    let error_json = ErrorJson::from_error(error);
    let rendered = if pretty {
        serde_json::to_string_pretty(&error_json)
    } else {
        serde_json::to_string(&error_json)
    };
    rendered.unwrap_or_else(|_| render_simple(error))
}

// =============================================================================
// Plain Text Rendering
// =============================================================================

/// Render error as plain text: header, fix commands, and the first
/// suggestion's context, prevention tip, and doc link.
fn render_simple(error: &FbsimError) -> String {
    let suggestions = error.fix_suggestions();

    let mut lines = vec![format!("Error [{}]: {}", error.error_code(), error)];

    let Some(first) = suggestions.first() else {
        return lines.join("\n");
    };

    let commands: Vec<_> = suggestions
        .iter()
        .flat_map(|s| s.commands.iter())
        .filter(|cmd| !cmd.starts_with('#'))
        .collect();
    if !commands.is_empty() {
        lines.push(String::new());
        lines.push("Fix:".to_string());
        lines.extend(commands.iter().map(|cmd| format!("  {cmd}")));
    }

    if !first.context.is_empty() {
        lines.push(String::new());
        lines.push(format!("Why: {}", first.context));
    }

    if let Some(prevention) = &first.prevention {
        lines.push(format!("Tip: {prevention}"));
    }

    if let Some(doc_url) = &first.doc_url {
        lines.push(format!("Docs: {doc_url}"));
    }

    lines.join("\n")
}

// =============================================================================
// JSON Rendering
// =============================================================================

/// JSON representation of an error for machine consumption.
#[derive(Serialize)]
struct ErrorJson {
    error_code: String,
    category: String,
    message: String,
    exit_code: u8,
    suggestions: Vec<SuggestionJson>,
}

#[derive(Serialize)]
struct SuggestionJson {
    commands: Vec<String>,
    context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    prevention: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    doc_url: Option<String>,
}

impl ErrorJson {
    fn from_error(error: &FbsimError) -> Self {
        Self {
            error_code: error.error_code().to_string(),
            category: error.category().to_string(),
            message: error.to_string(),
            exit_code: error.exit_code().into(),
            suggestions: error
                .fix_suggestions()
                .into_iter()
                .map(|s| SuggestionJson {
                    commands: s.commands,
                    context: s.context,
                    prevention: s.prevention,
                    doc_url: s.doc_url,
                })
                .collect(),
        }
    }
}
