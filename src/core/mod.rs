//! Simulator models, the simulator management service, and the query and
//! format pipeline.

pub mod cli_runner;
pub mod control;
pub mod device_set;
pub mod format;
pub mod logging;
pub mod models;
pub mod query;

pub use control::{
    ControlConfiguration, ManagementOptions, SimulatorApplication, SimulatorControl,
    SimulatorPool,
};
pub use device_set::{DeviceSet, SimctlDeviceSet, parse_device_list};
pub use format::{SimulatorFormat, format_all, format_simulator};
pub use models::{Simulator, SimulatorState};
pub use query::SimulatorQuery;
