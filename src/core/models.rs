//! Simulator records read from the device set.

use std::fmt;

/// Lifecycle state reported by `simctl` for a simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulatorState {
    Creating,
    Shutdown,
    Booting,
    Booted,
    ShuttingDown,
    #[default]
    Unknown,
}

impl SimulatorState {
    /// Parse the state string used by `simctl list`.
    #[must_use]
    pub fn from_simctl(s: &str) -> Self {
        match s {
            "Creating" => Self::Creating,
            "Shutdown" => Self::Shutdown,
            "Booting" => Self::Booting,
            "Booted" => Self::Booted,
            "Shutting Down" => Self::ShuttingDown,
            _ => Self::Unknown,
        }
    }

    /// The state as `simctl` spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Creating => "Creating",
            Self::Shutdown => "Shutdown",
            Self::Booting => "Booting",
            Self::Booted => "Booted",
            Self::ShuttingDown => "Shutting Down",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SimulatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A simulator managed by the simulator service.
///
/// The command pipeline only reads from these records; they are owned by the
/// [`SimulatorPool`](crate::core::control::SimulatorPool).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulator {
    /// Unique device identifier (`udid` in simctl output).
    pub udid: String,
    /// Display name, e.g. `E2E_0_iPhone 15`.
    pub name: String,
    pub state: SimulatorState,
    /// Runtime identifier the simulator was listed under,
    /// e.g. `com.apple.CoreSimulator.SimRuntime.iOS-17-2`.
    pub runtime: String,
    pub device_type_identifier: Option<String>,
    pub is_available: bool,
}

impl Simulator {
    /// Build a minimal shutdown simulator record.
    #[must_use]
    pub fn new(udid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            udid: udid.into(),
            name: name.into(),
            state: SimulatorState::Shutdown,
            runtime: String::new(),
            device_type_identifier: None,
            is_available: true,
        }
    }
}
