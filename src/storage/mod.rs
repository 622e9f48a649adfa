//! Configuration file and application paths.

pub mod config;
pub mod paths;

pub use config::{
    Config, ConfigSource, ConfigSources, ENV_BUCKET, ENV_CLEANUP, ENV_CONFIG, ENV_FORMAT,
    ENV_NAME_PREFIX, ENV_PRETTY, ENV_XCRUN, ResolvedConfig,
};
pub use paths::AppPaths;
