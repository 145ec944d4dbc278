//! `brigade <action>`: run one action against every agent in the manifest.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::Orchestrator;
use crate::domain::Action;
use crate::output::TerminalReporter;

/// Run `action`.
///
/// Per-agent failures are narrated as they happen and do not change the
/// exit code.
///
/// # Errors
///
/// This function currently always succeeds; the `Result` matches the other
/// command handlers.
pub async fn run(app: &AppContext, action: Action) -> Result<ExitCode> {
    let reporter = TerminalReporter::new(&app.output);
    let orchestrator = Orchestrator::new(
        &app.manifest,
        app.container_cli.clone(),
        &app.runner,
        &app.fs,
        &reporter,
    );
    let report = orchestrator.orchestrate(action).await;
    tracing::debug!(action = %report.action, steps = ?report.executed(), "action finished");
    Ok(ExitCode::SUCCESS)
}
