//! Simulator management service.
//!
//! Bootstraps a [`SimulatorControl`] from a [`ControlConfiguration`] and
//! exposes the simulators it manages through a read-only [`SimulatorPool`].
//! Provisioning and teardown of simulators are not performed here; the pool
//! is a snapshot of the device set taken when the control is created.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::cli_runner::run_checked;
use crate::core::device_set::{DeviceSet, SimctlDeviceSet};
use crate::core::models::Simulator;
use crate::error::{FbsimError, Result};

/// Default name prefix of pooled simulators.
pub const DEFAULT_NAME_PREFIX: &str = "E2E";
/// Default pool bucket.
pub const DEFAULT_BUCKET: u32 = 0;

// =============================================================================
// Simulator Application
// =============================================================================

/// Location of the Xcode tooling that drives the simulators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorApplication {
    /// The `xcrun` driver used for every `simctl` call.
    pub xcrun_path: PathBuf,
    /// The `simctl` binary inside the active developer directory.
    ///
    /// Only proves the developer directory provides `simctl`; every call
    /// still goes through `xcrun simctl`.
    pub simctl_path: PathBuf,
}

impl SimulatorApplication {
    /// Locate the simulator tooling.
    ///
    /// `xcrun` is taken from `xcrun` if given, otherwise searched on `PATH`.
    /// The active developer directory must provide `simctl`.
    ///
    /// # Errors
    ///
    /// Returns [`FbsimError::XcrunNotFound`] if `xcrun` is missing and
    /// [`FbsimError::ApplicationNotFound`] if it cannot find `simctl`.
    pub fn locate(xcrun: Option<&Path>) -> Result<Self> {
        let xcrun_path = match xcrun {
            Some(path) if path.exists() => path.to_path_buf(),
            Some(path) => {
                return Err(FbsimError::XcrunNotFound {
                    path: path.display().to_string(),
                });
            }
            None => which::which("xcrun").map_err(|_| FbsimError::XcrunNotFound {
                path: "xcrun".to_string(),
            })?,
        };

        let stdout = run_checked(&xcrun_path, &["--find", "simctl"]).map_err(|e| match e {
            FbsimError::SimctlFailed { stderr, .. } => FbsimError::ApplicationNotFound {
                reason: if stderr.is_empty() {
                    "`xcrun --find simctl` failed".to_string()
                } else {
                    stderr
                },
            },
            other => other,
        })?;

        let simctl = stdout.trim();
        if simctl.is_empty() {
            return Err(FbsimError::ApplicationNotFound {
                reason: "`xcrun --find simctl` printed no path".to_string(),
            });
        }

        tracing::debug!(xcrun = %xcrun_path.display(), simctl, "Located simulator application");
        Ok(Self {
            xcrun_path,
            simctl_path: PathBuf::from(simctl),
        })
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// What happens to a pooled simulator when the pool frees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManagementOptions {
    /// Delete the simulator once it is freed.
    #[default]
    DeleteOnFree,
    /// Shut the simulator down but keep it.
    KillOnFree,
    /// Leave the simulator untouched.
    None,
}

impl ManagementOptions {
    /// Parse from string (case-insensitive).
    #[must_use]
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "delete-on-free" | "delete" => Some(Self::DeleteOnFree),
            "kill-on-free" | "kill" => Some(Self::KillOnFree),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Configuration of the simulator management service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlConfiguration {
    pub application: SimulatorApplication,
    /// Prefix of the names of simulators owned by this pool.
    pub name_prefix: String,
    /// Bucket separating concurrent pools with the same prefix.
    pub bucket: u32,
    pub options: ManagementOptions,
}

impl ControlConfiguration {
    #[must_use]
    pub fn new(application: SimulatorApplication) -> Self {
        Self {
            application,
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            bucket: DEFAULT_BUCKET,
            options: ManagementOptions::default(),
        }
    }

    #[must_use]
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    #[must_use]
    pub const fn with_bucket(mut self, bucket: u32) -> Self {
        self.bucket = bucket;
        self
    }

    #[must_use]
    pub const fn with_options(mut self, options: ManagementOptions) -> Self {
        self.options = options;
        self
    }

    /// Name prefix shared by every pooled simulator, e.g. `E2E_0_`.
    ///
    /// Empty when no name prefix is configured.
    #[must_use]
    pub fn pool_name_prefix(&self) -> String {
        if self.name_prefix.is_empty() {
            String::new()
        } else {
            format!("{}_{}_", self.name_prefix, self.bucket)
        }
    }
}

// =============================================================================
// Pool & Control
// =============================================================================

/// The simulators currently managed by a [`SimulatorControl`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulatorPool {
    simulators: Vec<Simulator>,
}

impl SimulatorPool {
    /// Build a pool holding the simulators whose name starts with `name_prefix`,
    /// in device set order.
    #[must_use]
    pub fn from_device_set(name_prefix: &str, device_set: Vec<Simulator>) -> Self {
        let simulators = device_set
            .into_iter()
            .filter(|s| s.name.starts_with(name_prefix))
            .collect();
        Self { simulators }
    }

    /// Every simulator in the pool, in pool order.
    #[must_use]
    pub fn all_pooled_simulators(&self) -> &[Simulator] {
        &self.simulators
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.simulators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.simulators.is_empty()
    }
}

/// Handle on the simulator management service for one invocation.
#[derive(Debug)]
pub struct SimulatorControl {
    configuration: ControlConfiguration,
    pool: SimulatorPool,
}

impl SimulatorControl {
    /// Bootstrap against the device set reported by `simctl`.
    ///
    /// # Errors
    ///
    /// Returns an error if the device set cannot be listed or parsed.
    pub fn bootstrap(configuration: ControlConfiguration) -> Result<Self> {
        let device_set = SimctlDeviceSet::new(configuration.application.xcrun_path.clone());
        Self::with_device_set(configuration, &device_set)
    }

    /// Bootstrap against an arbitrary device set.
    ///
    /// # Errors
    ///
    /// Returns an error if the device set cannot be listed.
    pub fn with_device_set(
        configuration: ControlConfiguration,
        device_set: &dyn DeviceSet,
    ) -> Result<Self> {
        let prefix = configuration.pool_name_prefix();
        let pool = SimulatorPool::from_device_set(&prefix, device_set.list_simulators()?);

        tracing::info!(
            prefix = %prefix,
            simctl = %configuration.application.simctl_path.display(),
            options = ?configuration.options,
            pooled = pool.len(),
            "Simulator control ready"
        );

        Ok(Self {
            configuration,
            pool,
        })
    }

    #[must_use]
    pub const fn simulator_pool(&self) -> &SimulatorPool {
        &self.pool
    }

    #[must_use]
    pub const fn configuration(&self) -> &ControlConfiguration {
        &self.configuration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FixtureDeviceSet, test_application};

    fn sims(names: &[(&str, &str)]) -> Vec<Simulator> {
        names.iter().map(|(u, n)| Simulator::new(*u, *n)).collect()
    }

    #[test]
    fn pool_keeps_only_prefixed_simulators_in_order() {
        let pool = SimulatorPool::from_device_set(
            "E2E_0_",
            sims(&[
                ("1", "E2E_0_iPhone"),
                ("2", "iPhone 15"),
                ("3", "E2E_1_iPhone"),
                ("4", "E2E_0_iPad"),
            ]),
        );
        let udids: Vec<_> = pool
            .all_pooled_simulators()
            .iter()
            .map(|s| s.udid.as_str())
            .collect();
        assert_eq!(udids, vec!["1", "4"]);
    }

    #[test]
    fn empty_prefix_pools_everything() {
        let config = ControlConfiguration::new(test_application()).with_name_prefix("");
        assert_eq!(config.pool_name_prefix(), "");

        let pool = SimulatorPool::from_device_set("", sims(&[("1", "a"), ("2", "b")]));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn pool_name_prefix_includes_bucket() {
        let config = ControlConfiguration::new(test_application())
            .with_name_prefix("CI")
            .with_bucket(3);
        assert_eq!(config.pool_name_prefix(), "CI_3_");

        let default = ControlConfiguration::new(test_application());
        assert_eq!(default.pool_name_prefix(), "E2E_0_");
        assert_eq!(default.options, ManagementOptions::DeleteOnFree);
    }

    #[test]
    fn control_snapshots_device_set() {
        let config = ControlConfiguration::new(test_application()).with_name_prefix("");
        let set = FixtureDeviceSet::with_udids(&["AAAA", "BBBB"]);
        let control = SimulatorControl::with_device_set(config, &set).unwrap();
        assert_eq!(control.simulator_pool().len(), 2);
        assert_eq!(control.configuration().name_prefix, "");
    }

    #[test]
    fn control_propagates_device_set_failure() {
        let config = ControlConfiguration::new(test_application());
        let set = FixtureDeviceSet::failing("simctl unavailable");
        let err = SimulatorControl::with_device_set(config, &set).unwrap_err();
        assert!(matches!(err, FbsimError::SimctlFailed { .. }));
    }

    #[test]
    fn missing_explicit_xcrun_is_reported() {
        let err = SimulatorApplication::locate(Some(Path::new("/nonexistent/xcrun"))).unwrap_err();
        match err {
            FbsimError::XcrunNotFound { path } => assert_eq!(path, "/nonexistent/xcrun"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn management_options_parse() {
        assert_eq!(
            ManagementOptions::from_arg("Delete-On-Free"),
            Some(ManagementOptions::DeleteOnFree)
        );
        assert_eq!(ManagementOptions::from_arg("kill"), Some(ManagementOptions::KillOnFree));
        assert_eq!(ManagementOptions::from_arg("none"), Some(ManagementOptions::None));
        assert_eq!(ManagementOptions::from_arg("sometimes"), None);
    }

    #[cfg(unix)]
    #[test]
    fn locate_uses_fake_xcrun() {
        let fake = crate::test_utils::FakeXcrun::with_udids(&["AAAA"]);
        let app = SimulatorApplication::locate(Some(fake.path())).unwrap();
        assert_eq!(app.xcrun_path, fake.path());
        assert_eq!(app.simctl_path, PathBuf::from("/usr/bin/simctl"));
    }

    #[cfg(unix)]
    #[test]
    fn locate_reports_missing_simctl() {
        let fake = crate::test_utils::FakeXcrun::without_simctl();
        let err = SimulatorApplication::locate(Some(fake.path())).unwrap_err();
        assert!(matches!(err, FbsimError::ApplicationNotFound { .. }));
    }
}
