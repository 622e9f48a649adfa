//! Reading the simulator device set from `simctl`.
//!
//! `xcrun simctl list devices --json` returns a document of the form
//! `{"devices": {"<runtime>": [{"udid": .., "name": .., "state": ..}, ..]}}`.
//! Runtimes and devices are kept in document order.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::cli_runner::run_checked;
use crate::core::models::{Simulator, SimulatorState};
use crate::error::{FbsimError, Result};

/// Arguments passed to `xcrun` to list the device set.
pub const LIST_DEVICES_ARGS: [&str; 4] = ["simctl", "list", "devices", "--json"];

/// A source of simulators, in the order the source reports them.
pub trait DeviceSet {
    /// List every simulator in the set.
    ///
    /// # Errors
    ///
    /// Returns an error if the set cannot be read.
    fn list_simulators(&self) -> Result<Vec<Simulator>>;
}

/// The default device set, read through `xcrun simctl`.
#[derive(Debug, Clone)]
pub struct SimctlDeviceSet {
    xcrun: PathBuf,
}

impl SimctlDeviceSet {
    #[must_use]
    pub const fn new(xcrun: PathBuf) -> Self {
        Self { xcrun }
    }
}

impl DeviceSet for SimctlDeviceSet {
    fn list_simulators(&self) -> Result<Vec<Simulator>> {
        let stdout = run_checked(&self.xcrun, &LIST_DEVICES_ARGS)?;
        parse_device_list(&stdout)
    }
}

#[derive(Debug, Deserialize)]
struct DeviceList {
    devices: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SimctlDevice {
    udid: String,
    name: String,
    #[serde(default)]
    state: String,
    is_available: Option<bool>,
    /// Pre-Xcode 10.1 spelling of availability, e.g. `"(available)"`.
    availability: Option<String>,
    device_type_identifier: Option<String>,
}

impl SimctlDevice {
    fn into_simulator(self, runtime: &str) -> Simulator {
        let is_available = self.is_available.unwrap_or_else(|| {
            self.availability
                .as_deref()
                .is_none_or(|a| a == "(available)")
        });
        Simulator {
            udid: self.udid,
            name: self.name,
            state: SimulatorState::from_simctl(&self.state),
            runtime: runtime.to_string(),
            device_type_identifier: self.device_type_identifier,
            is_available,
        }
    }
}

/// Parse the JSON printed by `simctl list devices --json`.
///
/// # Errors
///
/// Returns [`FbsimError::DeviceSetParse`] if the document does not have the
/// expected shape.
pub fn parse_device_list(json: &str) -> Result<Vec<Simulator>> {
    let list: DeviceList = serde_json::from_str(json)
        .map_err(|e| FbsimError::DeviceSetParse(e.to_string()))?;

    let mut simulators = Vec::new();
    for (runtime, devices) in list.devices {
        let devices: Vec<SimctlDevice> = serde_json::from_value(devices)
            .map_err(|e| FbsimError::DeviceSetParse(format!("{runtime}: {e}")))?;
        simulators.extend(devices.into_iter().map(|d| d.into_simulator(&runtime)));
    }

    tracing::debug!(count = simulators.len(), "Parsed simulator device set");
    Ok(simulators)
}
