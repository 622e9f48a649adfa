//! Command dispatch.
//!
//! A [`Runner`] executes one [`Command`] and writes the result to its output.
//! The simulator pool is acquired only when the command needs it.

use std::io::Write;

use crate::cli::args::{Cli, OutputFormat};
use crate::cli::command::Command;
use crate::core::control::{SimulatorApplication, SimulatorControl};
use crate::core::format::format_all;
use crate::error::Result;
use crate::render;
use crate::storage::ResolvedConfig;

/// Commands listed by `Help`.
///
/// Kept empty so the help output stays `[]`.
#[must_use]
pub const fn help_table() -> Vec<Command> {
    Vec::new()
}

/// Executes commands against a writer.
#[derive(Debug)]
pub struct Runner<W> {
    out: W,
    format: OutputFormat,
    pretty: bool,
}

impl<W: Write> Runner<W> {
    pub const fn new(out: W, format: OutputFormat, pretty: bool) -> Self {
        Self {
            out,
            format,
            pretty,
        }
    }

    /// Run `command`, calling `acquire` for the simulator service if needed.
    ///
    /// # Errors
    ///
    /// Returns the error from `acquire` if the pool cannot be bootstrapped, or
    /// an I/O error if the output cannot be written.
    pub fn run<F>(&mut self, command: Command, acquire: F) -> Result<()>
    where
        F: FnOnce() -> Result<SimulatorControl>,
    {
        tracing::debug!(
            command = command.name(),
            description = command.description(),
            "Dispatching command"
        );

        let output = match command {
            Command::Help => Some(render::render_help(&help_table(), self.format, self.pretty)?),
            Command::List(query, formats) => {
                let control = acquire()?;
                let simulators = query.get(control.simulator_pool());
                for simulator in &simulators {
                    tracing::trace!(
                        udid = %simulator.udid,
                        name = %simulator.name,
                        state = %simulator.state,
                        runtime = %simulator.runtime,
                        "Resolved simulator"
                    );
                }
                let lines = format_all(&formats, &simulators);
                tracing::info!(count = lines.len(), "Listed simulators");
                // An empty pool prints nothing in human mode, but an empty line
                // still stands for a simulator.
                if lines.is_empty() && self.format == OutputFormat::Human {
                    None
                } else {
                    Some(render::render_list(&lines, self.format, self.pretty)?)
                }
            }
        };

        if let Some(output) = output {
            writeln!(self.out, "{output}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Consume the runner, returning its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Parse the tokens and run the command on stdout with resolved `config`.
///
/// # Errors
///
/// Returns bootstrap and output errors.
pub fn execute(cli: &Cli, config: &ResolvedConfig) -> Result<()> {
    let command = Command::parse_arguments(&cli.tokens);

    let stdout = std::io::stdout().lock();
    let mut runner = Runner::new(stdout, config.format, config.pretty);
    runner.run(command, || {
        let application = SimulatorApplication::locate(config.xcrun.as_deref())?;
        SimulatorControl::bootstrap(config.control_configuration(application))
    })
}
