//! Selection of simulators from a pool.

use crate::core::control::SimulatorPool;
use crate::core::models::Simulator;

/// Which pooled simulators a command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulatorQuery {
    /// Every simulator currently in the pool.
    #[default]
    All,
}

impl SimulatorQuery {
    /// Resolve the query against `pool`, in pool order.
    #[must_use]
    pub fn get<'a>(&self, pool: &'a SimulatorPool) -> Vec<&'a Simulator> {
        match self {
            Self::All => pool.all_pooled_simulators().iter().collect(),
        }
    }
}
