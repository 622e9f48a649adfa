//! Configuration file loading and resolution.
//!
//! Loads configuration from the platform config directory
//! (e.g. `~/.config/fbsimctl/config.toml` on Linux,
//! `~/Library/Application Support/com.fbsimctl.fbsimctl/config.toml` on macOS).
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `FBSIMCTL_CONFIG`: Override config file path
//! - `FBSIMCTL_NAME_PREFIX`: Name prefix of pooled simulators
//! - `FBSIMCTL_BUCKET`: Pool bucket number
//! - `FBSIMCTL_CLEANUP`: Cleanup policy (delete-on-free, kill-on-free, none)
//! - `FBSIMCTL_XCRUN`: Path to `xcrun`
//! - `FBSIMCTL_FORMAT`: Output format (human, json)
//! - `FBSIMCTL_PRETTY`: Pretty-print JSON output (1, true, yes)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::cli::args::{Cli, OutputFormat};
use crate::core::control::{
    ControlConfiguration, DEFAULT_BUCKET, DEFAULT_NAME_PREFIX, ManagementOptions,
    SimulatorApplication,
};
use crate::error::{FbsimError, Result};

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Environment variable to override config file path.
pub const ENV_CONFIG: &str = "FBSIMCTL_CONFIG";
/// Environment variable for the pooled simulator name prefix.
pub const ENV_NAME_PREFIX: &str = "FBSIMCTL_NAME_PREFIX";
/// Environment variable for the pool bucket.
pub const ENV_BUCKET: &str = "FBSIMCTL_BUCKET";
/// Environment variable for the cleanup policy.
pub const ENV_CLEANUP: &str = "FBSIMCTL_CLEANUP";
/// Environment variable for the `xcrun` path.
pub const ENV_XCRUN: &str = "FBSIMCTL_XCRUN";
/// Environment variable for output format.
pub const ENV_FORMAT: &str = "FBSIMCTL_FORMAT";
/// Environment variable for pretty JSON output.
pub const ENV_PRETTY: &str = "FBSIMCTL_PRETTY";

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Fully resolved configuration after merging CLI, env vars, and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub name_prefix: String,
    pub bucket: u32,
    pub cleanup: ManagementOptions,
    /// Explicit `xcrun` path; `None` searches `PATH`.
    pub xcrun: Option<PathBuf>,
    pub format: OutputFormat,
    pub pretty: bool,
    /// Source of each setting for debugging.
    pub sources: ConfigSources,
}

/// Tracks the source of each configuration value.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub name_prefix: ConfigSource,
    pub bucket: ConfigSource,
    pub cleanup: ConfigSource,
    pub xcrun: ConfigSource,
    pub format: ConfigSource,
    pub pretty: ConfigSource,
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from CLI flag.
    Cli,
    /// Value from environment variable.
    Env,
    /// Value from config file.
    ConfigFile,
    /// Built-in default.
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl ResolvedConfig {
    /// Resolve final configuration from CLI args, environment variables, and config file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicitly requested config file does not exist
    /// - The config file exists but is invalid
    /// - Any resolved value is invalid (e.g., unknown cleanup policy)
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = Self::load_config(cli)?;
        config.validate()?;

        let mut sources = ConfigSources::default();

        let name_prefix = Self::resolve_name_prefix(cli, &config, &mut sources.name_prefix);
        let bucket = Self::resolve_bucket(cli, &config, &mut sources.bucket)?;
        let cleanup = Self::resolve_cleanup(&config, &mut sources.cleanup)?;
        let xcrun = Self::resolve_xcrun(cli, &config, &mut sources.xcrun);
        let format = Self::resolve_format(cli, &config, &mut sources.format)?;
        let pretty = Self::resolve_pretty(cli, &config, &mut sources.pretty);

        let resolved = Self {
            name_prefix,
            bucket,
            cleanup,
            xcrun,
            format,
            pretty,
            sources,
        };
        tracing::debug!(?resolved, "Resolved configuration");
        Ok(resolved)
    }

    /// Build the simulator service configuration for `application`.
    #[must_use]
    pub fn control_configuration(&self, application: SimulatorApplication) -> ControlConfiguration {
        ControlConfiguration::new(application)
            .with_name_prefix(self.name_prefix.clone())
            .with_bucket(self.bucket)
            .with_options(self.cleanup)
    }

    /// Load config file, respecting `--config` and `FBSIMCTL_CONFIG`.
    fn load_config(cli: &Cli) -> Result<Config> {
        let explicit = cli
            .config
            .clone()
            .or_else(|| std::env::var(ENV_CONFIG).ok().map(PathBuf::from));

        match explicit {
            Some(path) if !path.exists() => Err(FbsimError::ConfigNotFound {
                path: path.display().to_string(),
            }),
            Some(path) => Config::load_from(&path),
            None => Config::load(),
        }
    }

    fn resolve_name_prefix(cli: &Cli, config: &Config, source: &mut ConfigSource) -> String {
        if let Some(ref prefix) = cli.name_prefix {
            *source = ConfigSource::Cli;
            return prefix.clone();
        }

        if let Ok(prefix) = std::env::var(ENV_NAME_PREFIX) {
            *source = ConfigSource::Env;
            return prefix;
        }

        if let Some(ref prefix) = config.pool.name_prefix {
            *source = ConfigSource::ConfigFile;
            return prefix.clone();
        }

        *source = ConfigSource::Default;
        DEFAULT_NAME_PREFIX.to_string()
    }

    fn resolve_bucket(cli: &Cli, config: &Config, source: &mut ConfigSource) -> Result<u32> {
        if let Some(bucket) = cli.bucket {
            *source = ConfigSource::Cli;
            return Ok(bucket);
        }

        if let Ok(bucket_env) = std::env::var(ENV_BUCKET) {
            *source = ConfigSource::Env;
            return bucket_env
                .trim()
                .parse::<u32>()
                .map_err(|e| FbsimError::ConfigInvalid {
                    key: ENV_BUCKET.to_string(),
                    value: bucket_env.clone(),
                    message: e.to_string(),
                });
        }

        if let Some(bucket) = config.pool.bucket {
            *source = ConfigSource::ConfigFile;
            return Ok(bucket);
        }

        *source = ConfigSource::Default;
        Ok(DEFAULT_BUCKET)
    }

    fn resolve_cleanup(config: &Config, source: &mut ConfigSource) -> Result<ManagementOptions> {
        if let Ok(cleanup_env) = std::env::var(ENV_CLEANUP) {
            *source = ConfigSource::Env;
            return ManagementOptions::from_arg(&cleanup_env).ok_or_else(|| {
                FbsimError::ConfigInvalid {
                    key: ENV_CLEANUP.to_string(),
                    value: cleanup_env.clone(),
                    message: "Valid policies: delete-on-free, kill-on-free, none".to_string(),
                }
            });
        }

        if let Some(cleanup) = config.pool.cleanup {
            *source = ConfigSource::ConfigFile;
            return Ok(cleanup);
        }

        *source = ConfigSource::Default;
        Ok(ManagementOptions::default())
    }

    fn resolve_xcrun(cli: &Cli, config: &Config, source: &mut ConfigSource) -> Option<PathBuf> {
        if let Some(ref path) = cli.xcrun {
            *source = ConfigSource::Cli;
            return Some(path.clone());
        }

        if let Ok(path) = std::env::var(ENV_XCRUN) {
            if !path.trim().is_empty() {
                *source = ConfigSource::Env;
                return Some(PathBuf::from(path.trim()));
            }
        }

        if let Some(ref path) = config.simctl.xcrun {
            *source = ConfigSource::ConfigFile;
            return Some(path.clone());
        }

        *source = ConfigSource::Default;
        None
    }

    fn resolve_format(
        cli: &Cli,
        config: &Config,
        source: &mut ConfigSource,
    ) -> Result<OutputFormat> {
        if let Some(format) = cli.explicit_format() {
            *source = ConfigSource::Cli;
            return Ok(format);
        }

        if let Ok(format_env) = std::env::var(ENV_FORMAT) {
            *source = ConfigSource::Env;
            return Self::parse_format(ENV_FORMAT, &format_env);
        }

        if let Some(ref format_str) = config.output.format {
            *source = ConfigSource::ConfigFile;
            return Self::parse_format("output.format", format_str);
        }

        *source = ConfigSource::Default;
        Ok(OutputFormat::Human)
    }

    /// Parse a format string into `OutputFormat`.
    fn parse_format(key: &str, s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(FbsimError::ConfigInvalid {
                key: key.to_string(),
                value: s.to_string(),
                message: "Valid formats: human, json".to_string(),
            }),
        }
    }

    fn resolve_pretty(cli: &Cli, config: &Config, source: &mut ConfigSource) -> bool {
        if cli.pretty {
            *source = ConfigSource::Cli;
            return true;
        }

        if is_env_truthy(ENV_PRETTY) {
            *source = ConfigSource::Env;
            return true;
        }

        if config.output.pretty {
            *source = ConfigSource::ConfigFile;
            return true;
        }

        *source = ConfigSource::Default;
        false
    }
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var: &str) -> bool {
    std::env::var(var)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

// =============================================================================
// Config File
// =============================================================================

/// Application configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulator pool settings.
    pub pool: PoolConfig,
    /// Xcode tooling settings.
    pub simctl: SimctlConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// `[pool]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub name_prefix: Option<String>,
    pub bucket: Option<u32>,
    pub cleanup: Option<ManagementOptions>,
}

/// `[simctl]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimctlConfig {
    pub xcrun: Option<PathBuf>,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json).
    pub format: Option<String>,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().config_file())
    }

    /// Load configuration from a specific path.
    ///
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| FbsimError::ConfigParse {
            path: path.display().to_string(),
            line: e
                .span()
                .map(|span| content[..span.start].matches('\n').count() + 1),
            message: e.message().to_string(),
        })
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`FbsimError::ConfigInvalid`] for an unknown output format.
    pub fn validate(&self) -> Result<()> {
        if let Some(format) = &self.output.format {
            ResolvedConfig::parse_format("output.format", format)?;
        }
        Ok(())
    }
}
