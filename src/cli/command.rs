//! The typed command produced from argument tokens.

use crate::core::format::SimulatorFormat;
use crate::core::query::SimulatorQuery;

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the help listing.
    Help,
    /// Print every simulator matched by the query, rendered with the formats.
    List(SimulatorQuery, Vec<SimulatorFormat>),
}

impl Command {
    /// Parse argument tokens (without the program name).
    ///
    /// This never fails: no tokens is [`Command::Help`], anything else lists
    /// all simulators by UUID. Token contents are not inspected.
    #[must_use]
    pub fn parse_arguments<S: AsRef<str>>(args: &[S]) -> Self {
        if args.is_empty() {
            return Self::Help;
        }
        Self::List(SimulatorQuery::All, vec![SimulatorFormat::Uuid])
    }

    /// Short name used in logs and the JSON help listing.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::List(..) => "list",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Help => "Prints Help",
            Self::List(..) => "Lists Simulators",
        }
    }
}
