//! Brigade CLI - build, start, watch and clean up a small fleet of containerized agents

use std::process::ExitCode;

use anyhow::Result;
use brigade_cli::cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_tracing(&cli.log_level) {
        eprintln!("Warning: {e}");
    }
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "fatal error");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so they never interleave with narration on stdout.
fn init_tracing(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}
