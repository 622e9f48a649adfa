//! Fix suggestion database for fbsimctl errors.
//!
//! Provides actionable fix suggestions mapped to specific error types,
//! including commands, context explanations, and prevention tips.

// =============================================================================
// Fix Suggestion Types
// =============================================================================

/// A fix suggestion for an error.
#[derive(Debug, Clone)]
pub struct FixSuggestion {
    /// Primary fix commands in order of preference.
    /// These should be copy-paste ready for the terminal.
    pub commands: Vec<String>,

    /// Explanation of why this error occurred.
    pub context: String,

    /// Tips to prevent this error in the future.
    pub prevention: Option<String>,

    /// Link to documentation for more information.
    pub doc_url: Option<String>,
}

impl FixSuggestion {
    /// Creates a new fix suggestion with required fields.
    #[must_use]
    pub fn new(commands: Vec<String>, context: impl Into<String>) -> Self {
        Self {
            commands,
            context: context.into(),
            prevention: None,
            doc_url: None,
        }
    }

    /// Builder: adds prevention tips.
    #[must_use]
    pub fn with_prevention(mut self, prevention: impl Into<String>) -> Self {
        self.prevention = Some(prevention.into());
        self
    }

    /// Builder: adds documentation URL.
    #[must_use]
    pub fn with_doc_url(mut self, url: impl Into<String>) -> Self {
        self.doc_url = Some(url.into());
        self
    }
}

const XCODE_DOC_URL: &str = "https://developer.apple.com/documentation/xcode/installing-additional-simulator-runtimes";

// =============================================================================
// Suggestion Generators
// =============================================================================

/// Generates fix suggestions when `xcrun` cannot be found.
#[must_use]
pub fn xcrun_not_found_suggestions(path: &str) -> Vec<FixSuggestion> {
    vec![
        FixSuggestion::new(
            vec![
                "xcode-select --install".to_string(),
                "sudo xcode-select --switch /Applications/Xcode.app".to_string(),
                "fbsimctl --xcrun /usr/bin/xcrun list".to_string(),
            ],
            format!(
                "Could not find `{path}`. fbsimctl talks to simulators through the \
                 Xcode command line tools, which are only available on macOS."
            ),
        )
        .with_doc_url(XCODE_DOC_URL),
    ]
}

/// Generates fix suggestions when the Simulator application cannot be located.
#[must_use]
pub fn application_not_found_suggestions(reason: &str) -> Vec<FixSuggestion> {
    vec![
        FixSuggestion::new(
            vec![
                "xcode-select -p".to_string(),
                "xcrun --find simctl".to_string(),
                "sudo xcode-select --switch /Applications/Xcode.app".to_string(),
            ],
            format!(
                "The Simulator application could not be located: {reason}. The active \
                 developer directory may point at the standalone command line tools \
                 instead of a full Xcode installation."
            ),
        )
        .with_prevention(
            "Keep `xcode-select` pointed at a full Xcode install after upgrading Xcode.",
        )
        .with_doc_url(XCODE_DOC_URL),
    ]
}

/// Generates fix suggestions for a failed `simctl` invocation.
#[must_use]
pub fn simctl_failed_suggestions(command: &str, stderr: &str) -> Vec<FixSuggestion> {
    let detail = if stderr.trim().is_empty() {
        "simctl produced no error output".to_string()
    } else {
        format!("simctl reported: {}", stderr.trim())
    };
    vec![FixSuggestion::new(
        vec![
            command.to_string(),
            "sudo xcrun simctl shutdown all".to_string(),
            "killall -9 com.apple.CoreSimulator.CoreSimulatorService".to_string(),
        ],
        format!("`{command}` did not succeed. {detail}"),
    )]
}

/// Generates fix suggestions for an unreadable device set listing.
#[must_use]
pub fn device_set_parse_suggestions(message: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec!["xcrun simctl list devices --json".to_string()],
        format!(
            "The device set listing returned by simctl could not be understood: {message}. \
             This usually means an Xcode version with an unexpected output format."
        ),
    )]
}

/// Generates fix suggestions for config not found errors.
#[must_use]
pub fn config_not_found_suggestions(path: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec![format!("touch {path}"), "unset FBSIMCTL_CONFIG".to_string()],
        format!(
            "Configuration file not found at {path}. The file was requested explicitly \
             through --config or FBSIMCTL_CONFIG."
        ),
    )]
}

/// Generates fix suggestions for config parse errors.
#[must_use]
pub fn config_parse_suggestions(
    path: &str,
    line: Option<usize>,
    message: &str,
) -> Vec<FixSuggestion> {
    let line_info = line.map_or_else(String::new, |l| format!(" on line {l}"));
    vec![
        FixSuggestion::new(
            vec![format!("$EDITOR {path}")],
            format!("The config file has a syntax error{line_info}. The TOML parser reported: {message}"),
        )
        .with_prevention("Consider using a TOML-aware editor with syntax highlighting."),
    ]
}

/// Generates fix suggestions for invalid config value errors.
#[must_use]
pub fn config_invalid_suggestions(key: &str, value: &str, message: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec!["fbsimctl --help".to_string()],
        format!("Invalid config value for '{key}': '{value}'. {message}"),
    )]
}

/// Generates fix suggestions for I/O errors.
#[must_use]
pub fn io_error_suggestions(message: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec!["fbsimctl --verbose list".to_string()],
        format!("An I/O operation failed: {message}"),
    )]
}

/// Generates fix suggestions for unclassified errors.
#[must_use]
pub fn internal_error_suggestions(message: &str) -> Vec<FixSuggestion> {
    vec![FixSuggestion::new(
        vec!["FBSIMCTL_LOG=debug fbsimctl list".to_string()],
        format!("An unexpected error occurred: {message}"),
    )]
}
