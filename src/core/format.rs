//! Rendering simulators as text.

use crate::core::models::Simulator;

/// One renderable attribute of a simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorFormat {
    /// The unique device identifier.
    Uuid,
}

impl SimulatorFormat {
    /// Render this attribute of `simulator`.
    #[must_use]
    pub fn format(&self, simulator: &Simulator) -> String {
        match self {
            Self::Uuid => simulator.udid.clone(),
        }
    }
}

/// Render `simulator` with every format in order.
///
/// Each value is preceded by a single space, so any non-empty `formats`
/// yields a string with a leading space; empty `formats` yields `""`.
#[must_use]
pub fn format_simulator(formats: &[SimulatorFormat], simulator: &Simulator) -> String {
    formats.iter().fold(String::new(), |mut acc, format| {
        acc.push(' ');
        acc.push_str(&format.format(simulator));
        acc
    })
}

/// Render each simulator with [`format_simulator`], preserving order.
#[must_use]
pub fn format_all(formats: &[SimulatorFormat], simulators: &[&Simulator]) -> Vec<String> {
    simulators
        .iter()
        .map(|simulator| format_simulator(formats, simulator))
        .collect()
}
