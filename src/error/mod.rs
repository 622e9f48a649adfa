//! Error types for fbsimctl.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! Errors are categorized into four categories:
//! - **Configuration**: Config file parsing, validation, or missing values
//! - **Environment**: Missing Xcode toolchain, `xcrun`, or `simctl` failures
//! - **Pool**: The simulator device set could not be read into a pool
//! - **Internal**: Unexpected errors, bugs, or unclassified issues
//!
//! Each error has a stable error code (e.g., `FBSIM-E001`) for programmatic handling
//! and a list of [`FixSuggestion`]s rendered alongside the message.

pub mod suggestions;

use thiserror::Error;

pub use suggestions::FixSuggestion;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Configuration issues (parse errors, invalid values, missing files).
    Configuration,
    /// Environment issues (missing Xcode, `xcrun`, `simctl` failures).
    Environment,
    /// The simulator pool could not be constructed from the device set.
    Pool,
    /// Internal errors (bugs, unexpected state, unclassified).
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration error",
            Self::Environment => "Environment error",
            Self::Pool => "Simulator pool error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Configuration => "C",
            Self::Environment => "E",
            Self::Pool => "P",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// `xcrun`, `simctl`, or the Simulator application is missing
    ToolchainNotFound = 2,
    /// Configuration or device set parse errors
    ParseError = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Main error type for fbsimctl operations.
#[derive(Error, Debug)]
pub enum FbsimError {
    // ==========================================================================
    // Environment errors (Category: Environment)
    // ==========================================================================
    /// The `xcrun` driver could not be found.
    #[error("xcrun not found: {path}")]
    XcrunNotFound { path: String },

    /// The Simulator application could not be located through `xcrun`.
    #[error("simulator application not found: {reason}")]
    ApplicationNotFound { reason: String },

    /// A `simctl` invocation exited unsuccessfully.
    #[error("`{command}` failed with exit code {exit_code}: {stderr}")]
    SimctlFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    // ==========================================================================
    // Pool errors (Category: Pool)
    // ==========================================================================
    /// The device set listing could not be parsed.
    #[error("failed to parse simulator device set: {0}")]
    DeviceSetParse(String),

    // ==========================================================================
    // Configuration errors (Category: Configuration)
    // ==========================================================================
    /// Configuration file not found at an explicitly requested path.
    #[error("config file not found: {path}")]
    ConfigNotFound { path: String },

    /// Error parsing configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse {
        path: String,
        line: Option<usize>,
        message: String,
    },

    /// Invalid value in configuration.
    #[error("invalid config value for '{key}': {message}")]
    ConfigInvalid {
        key: String,
        value: String,
        message: String,
    },

    /// Generic configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    // ==========================================================================
    // Internal errors (Category: Internal)
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FbsimError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::XcrunNotFound { .. } | Self::ApplicationNotFound { .. } => {
                ExitCode::ToolchainNotFound
            }

            Self::DeviceSetParse(_)
            | Self::ConfigNotFound { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigInvalid { .. }
            | Self::Config(_) => ExitCode::ParseError,

            Self::SimctlFailed { .. } | Self::Io(_) | Self::Json(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification and rendering.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::XcrunNotFound { .. }
            | Self::ApplicationNotFound { .. }
            | Self::SimctlFailed { .. } => ErrorCategory::Environment,

            Self::DeviceSetParse(_) => ErrorCategory::Pool,

            Self::ConfigNotFound { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigInvalid { .. }
            | Self::Config(_) => ErrorCategory::Configuration,

            Self::Io(_) | Self::Json(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `FBSIM-{category}{number}`.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::XcrunNotFound { .. } => "FBSIM-E001",
            Self::ApplicationNotFound { .. } => "FBSIM-E002",
            Self::SimctlFailed { .. } => "FBSIM-E010",

            Self::DeviceSetParse(_) => "FBSIM-P001",

            Self::ConfigNotFound { .. } => "FBSIM-C001",
            Self::ConfigParse { .. } => "FBSIM-C002",
            Self::ConfigInvalid { .. } => "FBSIM-C003",
            Self::Config(_) => "FBSIM-C004",

            Self::Io(_) => "FBSIM-X001",
            Self::Json(_) => "FBSIM-X002",
        }
    }

    /// Returns actionable fix suggestions for this error.
    ///
    /// # Example
    ///
    /// ```
    /// use fbsimctl::error::FbsimError;
    ///
    /// let err = FbsimError::XcrunNotFound { path: "xcrun".to_string() };
    /// let suggestions = err.fix_suggestions();
    /// assert!(suggestions[0].commands.iter().any(|c| c.contains("xcode-select")));
    /// ```
    #[must_use]
    pub fn fix_suggestions(&self) -> Vec<FixSuggestion> {
        match self {
            Self::XcrunNotFound { path } => suggestions::xcrun_not_found_suggestions(path),
            Self::ApplicationNotFound { reason } => {
                suggestions::application_not_found_suggestions(reason)
            }
            Self::SimctlFailed {
                command, stderr, ..
            } => suggestions::simctl_failed_suggestions(command, stderr),
            Self::DeviceSetParse(message) => suggestions::device_set_parse_suggestions(message),
            Self::ConfigNotFound { path } => suggestions::config_not_found_suggestions(path),
            Self::ConfigParse {
                path,
                line,
                message,
            } => suggestions::config_parse_suggestions(path, *line, message),
            Self::ConfigInvalid {
                key,
                value,
                message,
            } => suggestions::config_invalid_suggestions(key, value, message),
            Self::Config(message) => vec![FixSuggestion::new(
                vec!["fbsimctl --help".to_string()],
                format!("Configuration problem: {message}"),
            )],
            Self::Io(err) => suggestions::io_error_suggestions(&err.to_string()),
            Self::Json(err) => suggestions::internal_error_suggestions(&err.to_string()),
        }
    }
}

/// Result type alias for fbsimctl operations.
pub type Result<T> = std::result::Result<T, FbsimError>;

// =============================================================================
// Tests
// =============================================================================
