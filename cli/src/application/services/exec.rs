//! Runs one invocation and folds every outcome into a [`CommandResult`].

use std::process::Output;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::domain::Invocation;

/// Trimmed output of a finished invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl CommandResult {
    #[must_use]
    pub fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            success: output.status.success(),
        }
    }
}

/// Run `invocation` and capture its result.
///
/// Never fails: a process that cannot be spawned, or that times out, is a
/// result with `success == false` and the error text in `stderr`. On failure
/// the command line and any captured output are narrated as errors.
pub async fn execute(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    invocation: &Invocation,
) -> CommandResult {
    let args: Vec<&str> = invocation.args().iter().map(String::as_str).collect();
    tracing::debug!(program = invocation.program(), args = ?args, "invoking container runtime");

    let result = match runner.run(invocation.program(), &args).await {
        Ok(output) => CommandResult::from_output(&output),
        Err(e) => {
            tracing::warn!(program = invocation.program(), error = %e, "invocation did not complete");
            CommandResult {
                stdout: String::new(),
                stderr: format!("{e:#}"),
                success: false,
            }
        }
    };

    if !result.success {
        reporter.error(&format!("Command failed: {}", invocation.command_line()));
        if !result.stdout.is_empty() {
            reporter.error(&format!("STDOUT: {}", result.stdout));
        }
        if !result.stderr.is_empty() {
            reporter.error(&format!("STDERR: {}", result.stderr));
        }
    }

    result
}
