//! fbsimctl - list pooled iOS simulators.
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use std::process::ExitCode;

use fbsimctl::cli::{Cli, OutputFormat};
use fbsimctl::core::logging;
use fbsimctl::storage::ResolvedConfig;
use fbsimctl::FbsimError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = cli
        .log_level
        .as_deref()
        .and_then(logging::LogLevel::from_arg)
        .or_else(|| logging::parse_log_level_from_env().map(logging::LogLevel::from_tracing_level))
        .unwrap_or_default();
    let log_format = if cli.json_output {
        logging::LogFormat::Json
    } else {
        logging::parse_log_format_from_env().unwrap_or_default()
    };
    logging::init(log_level, log_format, logging::parse_log_file_from_env(), cli.verbose);

    let config = match ResolvedConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            let format = cli.explicit_format().unwrap_or(OutputFormat::Human);
            return report(&e, format, cli.pretty);
        }
    };

    match fbsimctl::cli::execute(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, config.format, config.pretty),
    }
}

/// Log the error, render it to stderr, and map it to the process exit code.
fn report(e: &FbsimError, format: OutputFormat, pretty: bool) -> ExitCode {
    tracing::error!(code = e.error_code(), "{}", e);
    eprintln!(
        "{}",
        fbsimctl::render::error::render_error(e, format, pretty)
    );
    ExitCode::from(u8::from(e.exit_code()))
}
