//! CLI argument definitions using clap.
//!
//! clap only owns the global options. Every other token is collected into
//! [`Cli::tokens`] and handed to [`Command::parse_arguments`](crate::cli::Command::parse_arguments).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// fbsimctl - list pooled iOS simulators.
#[derive(Parser, Debug)]
#[command(name = "fbsimctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command tokens. No tokens prints help; any tokens list every pooled simulator by UUID
    #[arg(
        value_name = "TOKENS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,

    // === Output ===
    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long)]
    pub verbose: bool,

    // === Simulator pool ===
    /// Config file path (overrides FBSIMCTL_CONFIG)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Name prefix of pooled simulators; empty pools every simulator
    #[arg(long, value_name = "PREFIX")]
    pub name_prefix: Option<String>,

    /// Pool bucket number
    #[arg(long, value_name = "N")]
    pub bucket: Option<u32>,

    /// Path to xcrun
    #[arg(long, value_name = "PATH")]
    pub xcrun: Option<PathBuf>,
}

impl Cli {
    /// Output format requested on the command line, if any.
    #[must_use]
    pub const fn explicit_format(&self) -> Option<OutputFormat> {
        if self.json {
            Some(OutputFormat::Json)
        } else {
            self.format
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one simulator per line
    #[default]
    Human,
    /// JSON output
    Json,
}
