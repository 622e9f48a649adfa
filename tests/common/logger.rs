//! Structured test logging.
#![allow(dead_code)]
//!
//! `TestLogger` records phases and durations of a test to stderr and to a log
//! file, as text or JSON lines.
//!
//! # Environment Variables
//!
//! - `TEST_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! - `TEST_LOG_FILE` - Output file path (default: test-results.log)
//! - `TEST_LOG_JSON` - Set to "1" or "true" for JSON output format

use std::env;
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::log_capture::TestLogCapture;

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// Structured log entry for JSON output mode.
#[derive(Debug, Serialize)]
struct LogEntry<'a> {
    timestamp: DateTime<Utc>,
    level: LogLevel,
    test: &'a str,
    phase: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_ms: Option<u64>,
}

struct Settings {
    min_level: LogLevel,
    json: bool,
    file: Mutex<Option<File>>,
}

fn settings() -> &'static Settings {
    static SETTINGS: OnceLock<Settings> = OnceLock::new();
    SETTINGS.get_or_init(|| {
        let path = env::var("TEST_LOG_FILE")
            .map_or_else(|_| PathBuf::from("test-results.log"), PathBuf::from);
        Settings {
            min_level: env::var("TEST_LOG_LEVEL")
                .ok()
                .and_then(|s| LogLevel::parse(&s))
                .unwrap_or(LogLevel::Info),
            json: env::var("TEST_LOG_JSON")
                .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true")),
            file: Mutex::new(OpenOptions::new().create(true).append(true).open(path).ok()),
        }
    })
}

/// Per-test logger with phase and duration tracking.
pub struct TestLogger {
    test_name: String,
    start_time: Instant,
    current_phase: Mutex<String>,
}

impl TestLogger {
    #[must_use]
    pub fn new(test_name: &str) -> Self {
        let logger = Self {
            test_name: test_name.to_string(),
            start_time: Instant::now(),
            current_phase: Mutex::new("init".to_string()),
        };
        logger.log(LogLevel::Info, "Test starting", None);
        logger
    }

    /// Create logger with capture for assertions.
    pub fn with_capture(test_name: &str) -> (Self, TestLogCapture) {
        let capture = TestLogCapture::start();
        (Self::new(test_name), capture)
    }

    /// Set the current test phase ("setup", "execute", "verify", ...).
    pub fn phase(&self, phase: &str) {
        if let Ok(mut current) = self.current_phase.lock() {
            *current = phase.to_string();
        }
        self.log(LogLevel::Debug, &format!("Phase: {phase}"), None);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, None);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, None);
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn finish_ok(&self) {
        let duration_ms = self.start_time.elapsed().as_millis() as u64;
        self.log(LogLevel::Info, "Test passed", Some(duration_ms));
    }

    fn log(&self, level: LogLevel, message: &str, duration_ms: Option<u64>) {
        let settings = settings();
        if level < settings.min_level {
            return;
        }

        let phase = self
            .current_phase
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default();

        let line = if settings.json {
            serde_json::to_string(&LogEntry {
                timestamp: Utc::now(),
                level,
                test: &self.test_name,
                phase: &phase,
                message,
                duration_ms,
            })
            .unwrap_or_default()
        } else {
            let duration = duration_ms.map_or_else(String::new, |ms| format!(" ({ms}ms)"));
            format!("[{level}] {} [{phase}] {message}{duration}", self.test_name)
        };

        eprintln!("{line}");
        if let Ok(mut guard) = settings.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = writeln!(file, "{line}");
            }
        }
    }
}
