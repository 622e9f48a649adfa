//! Application paths.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Application paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Configuration directory.
    pub config: PathBuf,
}

impl AppPaths {
    /// Create paths for the fbsimctl application.
    #[must_use]
    pub fn new() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("com", "fbsimctl", "fbsimctl") {
            Self {
                config: proj_dirs.config_dir().to_path_buf(),
            }
        } else {
            // Fallback to home directory
            let home = BaseDirs::new()
                .map_or_else(|| PathBuf::from("."), |dirs| dirs.home_dir().to_path_buf());
            Self {
                config: home.join(".config/fbsimctl"),
            }
        }
    }

    /// Path to the config file.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.toml")
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
