//! Subprocess execution for the Xcode command line tools.
//!
//! Runs `xcrun` synchronously and maps spawn failures and non-zero exits
//! into [`FbsimError`] variants.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{FbsimError, Result};

/// Output from a CLI command.
#[derive(Debug)]
pub struct CliOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CliOutput {
    /// Check if command succeeded (exit code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Render a program and its arguments as a shell-like command line.
#[must_use]
pub fn command_line(program: &Path, args: &[&str]) -> String {
    std::iter::once(program.display().to_string())
        .chain(args.iter().map(|a| (*a).to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a CLI command to completion, capturing stdout and stderr.
///
/// # Errors
///
/// Returns [`FbsimError::XcrunNotFound`] if the program does not exist and
/// [`FbsimError::Io`] if it cannot be spawned for another reason.
pub fn run_command(program: &Path, args: &[&str]) -> Result<CliOutput> {
    tracing::debug!(command = %command_line(program, args), "Running command");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FbsimError::XcrunNotFound {
                    path: program.display().to_string(),
                }
            } else {
                FbsimError::Io(e)
            }
        })?;

    let result = CliOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    };
    tracing::trace!(exit_code = result.exit_code, "Command finished");
    Ok(result)
}

/// Run a CLI command and fail unless it exits successfully.
///
/// # Errors
///
/// Returns [`FbsimError::SimctlFailed`] on a non-zero exit, plus the errors of
/// [`run_command`].
pub fn run_checked(program: &Path, args: &[&str]) -> Result<String> {
    let output = run_command(program, args)?;

    if !output.success() {
        return Err(FbsimError::SimctlFailed {
            command: command_line(program, args),
            exit_code: output.exit_code,
            stderr: output.stderr.trim().to_string(),
        });
    }

    Ok(output.stdout)
}
