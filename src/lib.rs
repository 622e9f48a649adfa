//! fbsimctl - list pooled iOS simulators.
//!
//! Parses argument tokens into a [`cli::Command`], resolves its
//! [`core::SimulatorQuery`] against the simulator pool, and renders the
//! simulators through [`core::SimulatorFormat`]s.

// Note: deny (not forbid) to allow #[allow(unsafe_code)] in test helpers for env var manipulation
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod storage;

/// Test utilities module - included in test builds or when test-utils feature is enabled.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ExitCode, FbsimError, Result};
