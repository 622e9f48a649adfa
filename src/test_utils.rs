//! Test utilities for fbsimctl.
//!
//! Provides simulator fixtures, an in-memory [`DeviceSet`], and (on unix) a
//! fake `xcrun` script that answers the `simctl` calls fbsimctl makes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fbsimctl::test_utils::*;
//!
//! let control = fixture_control(&["AAAA", "BBBB"]);
//! let xcrun = FakeXcrun::with_udids(&["AAAA", "BBBB"]);
//! ```

use std::path::PathBuf;

use crate::core::control::{ControlConfiguration, SimulatorApplication, SimulatorControl};
use crate::core::device_set::DeviceSet;
use crate::core::models::Simulator;
use crate::error::{FbsimError, Result};

/// Runtime used for fixture simulators.
pub const FIXTURE_RUNTIME: &str = "com.apple.CoreSimulator.SimRuntime.iOS-17-2";

/// Pooled name for the `index`th fixture simulator under the default prefix.
#[must_use]
pub fn pooled_name(index: usize) -> String {
    format!("E2E_0_iPhone {index}")
}

/// A simulator application that points at the usual Xcode locations.
#[must_use]
pub fn test_application() -> SimulatorApplication {
    SimulatorApplication {
        xcrun_path: PathBuf::from("/usr/bin/xcrun"),
        simctl_path: PathBuf::from("/usr/bin/simctl"),
    }
}

/// Shutdown simulators with the given identifiers, named under the default pool prefix.
#[must_use]
pub fn make_simulators(udids: &[&str]) -> Vec<Simulator> {
    udids
        .iter()
        .enumerate()
        .map(|(i, udid)| {
            let mut sim = Simulator::new(*udid, pooled_name(i));
            sim.runtime = FIXTURE_RUNTIME.to_string();
            sim
        })
        .collect()
}

/// `simctl list devices --json` output for `(udid, name)` pairs under one runtime.
#[must_use]
pub fn device_list_json(devices: &[(&str, &str)]) -> String {
    let devices: Vec<_> = devices
        .iter()
        .map(|(udid, name)| {
            serde_json::json!({
                "udid": udid,
                "name": name,
                "state": "Shutdown",
                "isAvailable": true,
                "deviceTypeIdentifier": "com.apple.CoreSimulator.SimDeviceType.iPhone-15",
            })
        })
        .collect();
    serde_json::json!({ "devices": { FIXTURE_RUNTIME: devices } }).to_string()
}

/// In-memory device set.
#[derive(Debug, Clone)]
pub struct FixtureDeviceSet {
    result: std::result::Result<Vec<Simulator>, String>,
}

impl FixtureDeviceSet {
    #[must_use]
    pub const fn with_simulators(simulators: Vec<Simulator>) -> Self {
        Self {
            result: Ok(simulators),
        }
    }

    #[must_use]
    pub fn with_udids(udids: &[&str]) -> Self {
        Self::with_simulators(make_simulators(udids))
    }

    /// A device set whose listing fails like a broken `simctl`.
    #[must_use]
    pub fn failing(stderr: &str) -> Self {
        Self {
            result: Err(stderr.to_string()),
        }
    }
}

impl DeviceSet for FixtureDeviceSet {
    fn list_simulators(&self) -> Result<Vec<Simulator>> {
        self.result.clone().map_err(|stderr| FbsimError::SimctlFailed {
            command: "xcrun simctl list devices --json".to_string(),
            exit_code: 1,
            stderr,
        })
    }
}

/// A control whose pool holds exactly the given simulators, in order.
///
/// # Panics
///
/// Never; the fixture device set cannot fail.
#[must_use]
pub fn fixture_control(udids: &[&str]) -> SimulatorControl {
    let config = ControlConfiguration::new(test_application());
    SimulatorControl::with_device_set(config, &FixtureDeviceSet::with_udids(udids))
        .expect("fixture device set cannot fail")
}

// =============================================================================
// Fake xcrun
// =============================================================================

/// An executable `xcrun` stand-in living in a temporary directory.
#[cfg(unix)]
#[derive(Debug)]
pub struct FakeXcrun {
    dir: tempfile::TempDir,
    path: PathBuf,
}

#[cfg(unix)]
impl FakeXcrun {
    /// Pooled simulators with the given identifiers.
    #[must_use]
    pub fn with_udids(udids: &[&str]) -> Self {
        let names: Vec<String> = (0..udids.len()).map(pooled_name).collect();
        let devices: Vec<(&str, &str)> = udids
            .iter()
            .copied()
            .zip(names.iter().map(String::as_str))
            .collect();
        Self::with_devices(&devices)
    }

    /// Arbitrary `(udid, name)` devices.
    #[must_use]
    pub fn with_devices(devices: &[(&str, &str)]) -> Self {
        Self::build(Some(&device_list_json(devices)), true)
    }

    /// `xcrun` that cannot find `simctl`.
    #[must_use]
    pub fn without_simctl() -> Self {
        Self::build(None, false)
    }

    /// `xcrun` that finds `simctl` but fails to list devices.
    #[must_use]
    pub fn failing_list() -> Self {
        Self::build(None, true)
    }

    /// Path of the executable script.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Directory holding the script.
    #[must_use]
    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }

    fn build(listing: Option<&str>, has_simctl: bool) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().expect("create temp dir");
        let path = dir.path().join("xcrun");

        let find = if has_simctl {
            "echo /usr/bin/simctl; exit 0".to_string()
        } else {
            "echo 'xcrun: error: unable to find utility \"simctl\", not a developer tool or in PATH' >&2; exit 72"
                .to_string()
        };
        let list = match listing {
            Some(json) => {
                let listing_path = dir.path().join("devices.json");
                std::fs::write(&listing_path, json).expect("write device listing");
                format!("cat '{}'; exit 0", listing_path.display())
            }
            None => "echo 'CoreSimulatorService connection became invalid' >&2; exit 1".to_string(),
        };

        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--find\" ] && [ \"$2\" = \"simctl\" ]; then\n  {find}\nfi\n\
             if [ \"$1\" = \"simctl\" ] && [ \"$2\" = \"list\" ]; then\n  {list}\nfi\n\
             echo \"xcrun: unexpected invocation: $*\" >&2\nexit 64\n"
        );
        std::fs::write(&path, script).expect("write fake xcrun");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("make fake xcrun executable");

        Self { dir, path }
    }
}
