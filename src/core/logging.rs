//! Diagnostic logging to stderr or a log file.
//!
//! stdout is reserved for command output, so every subscriber writes to
//! stderr unless `FBSIMCTL_LOG_FILE` names a file.

use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

pub const LOG_LEVEL_ENV: &str = "FBSIMCTL_LOG";
pub const LOG_FORMAT_ENV: &str = "FBSIMCTL_LOG_FORMAT";
pub const LOG_FILE_ENV: &str = "FBSIMCTL_LOG_FILE";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable logs.
    #[default]
    Human,
    /// JSON logs (one event per line).
    Json,
    /// Compact logs (single line, terse).
    Compact,
}

impl LogFormat {
    /// Parse from string (case-insensitive).
    #[must_use]
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

/// Log level from CLI argument or environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    #[default]
    Error,
}

impl LogLevel {
    /// Parse from CLI argument.
    #[must_use]
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "verbose" | "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Convert to tracing filter string.
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub const fn as_tracing_level(self) -> Level {
        match self {
            Self::Trace => Level::TRACE,
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warn => Level::WARN,
            Self::Error => Level::ERROR,
        }
    }

    #[must_use]
    pub const fn from_tracing_level(level: Level) -> Self {
        match level {
            Level::TRACE => Self::Trace,
            Level::DEBUG => Self::Debug,
            Level::INFO => Self::Info,
            Level::WARN => Self::Warn,
            Level::ERROR => Self::Error,
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parse log level from `FBSIMCTL_LOG`.
#[must_use]
pub fn parse_log_level_from_env() -> Option<Level> {
    non_empty_env(LOG_LEVEL_ENV)
        .and_then(|value| LogLevel::from_arg(&value))
        .map(LogLevel::as_tracing_level)
}

/// Parse log format from `FBSIMCTL_LOG_FORMAT`.
#[must_use]
pub fn parse_log_format_from_env() -> Option<LogFormat> {
    non_empty_env(LOG_FORMAT_ENV).and_then(|value| LogFormat::from_arg(&value))
}

/// Parse log file path from `FBSIMCTL_LOG_FILE`.
#[must_use]
pub fn parse_log_file_from_env() -> Option<PathBuf> {
    non_empty_env(LOG_FILE_ENV).map(PathBuf::from)
}

/// Level actually used once `--verbose` is taken into account.
#[must_use]
pub const fn effective_level(level: LogLevel, verbose: bool) -> LogLevel {
    if verbose && matches!(level, LogLevel::Error | LogLevel::Warn) {
        LogLevel::Debug
    } else {
        level
    }
}

/// Initialize the global subscriber. Later calls are no-ops.
pub fn init(level: LogLevel, format: LogFormat, log_file: Option<PathBuf>, verbose: bool) {
    let level = effective_level(level, verbose);

    let file = log_file.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()
    });

    let writer = file.map_or_else(
        || BoxMakeWriter::new(std::io::stderr),
        BoxMakeWriter::new,
    );

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fbsimctl={}", level.as_filter())));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    match format {
        LogFormat::Json => {
            builder.json().try_init().ok();
        }
        LogFormat::Compact => {
            builder.compact().with_target(true).try_init().ok();
        }
        LogFormat::Human => {
            builder.with_target(false).without_time().try_init().ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[allow(unsafe_code)]
    fn with_env_var(key: &str, value: &str, f: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap();
        let prior = std::env::var(key).ok();
        unsafe {
            std::env::set_var(key, value);
        }
        f();
        match prior {
            Some(val) => unsafe {
                std::env::set_var(key, val);
            },
            None => unsafe {
                std::env::remove_var(key);
            },
        }
    }

    #[test]
    fn env_var_log_level_parsing() {
        with_env_var(LOG_LEVEL_ENV, "trace", || {
            assert_eq!(parse_log_level_from_env(), Some(Level::TRACE));
        });
        with_env_var(LOG_LEVEL_ENV, " warn ", || {
            assert_eq!(parse_log_level_from_env(), Some(Level::WARN));
        });
        with_env_var(LOG_LEVEL_ENV, "", || {
            assert_eq!(parse_log_level_from_env(), None);
        });
    }

    #[test]
    fn env_var_log_format_and_file() {
        with_env_var(LOG_FORMAT_ENV, "JSON", || {
            assert_eq!(parse_log_format_from_env(), Some(LogFormat::Json));
        });
        with_env_var(LOG_FILE_ENV, "/tmp/fbsimctl.log", || {
            assert_eq!(
                parse_log_file_from_env(),
                Some(PathBuf::from("/tmp/fbsimctl.log"))
            );
        });
    }

    #[test]
    fn verbose_raises_quiet_levels_only() {
        assert_eq!(effective_level(LogLevel::Error, true), LogLevel::Debug);
        assert_eq!(effective_level(LogLevel::Trace, true), LogLevel::Trace);
        assert_eq!(effective_level(LogLevel::Error, false), LogLevel::Error);
    }

    #[test]
    fn level_conversions_agree() {
        for level in [Level::TRACE, Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR] {
            assert_eq!(LogLevel::from_tracing_level(level).as_tracing_level(), level);
        }
        assert_eq!(LogLevel::from_arg("verbose"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_arg("loud"), None);
    }
}
