//! CLI argument parsing and command dispatch.

pub mod args;
pub mod command;
pub mod runner;

pub use args::{Cli, OutputFormat};
pub use command::Command;
pub use runner::{Runner, execute};
