//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::app::{AppContext, RuntimeFlags};
use crate::application::ports::ManifestStore;
use crate::commands;
use crate::domain::Action;
use crate::domain::invocation::DEFAULT_RUNTIME;
use crate::infra::JsonManifestStore;
use crate::output::{HumanRenderer, OutputContext};

/// Build, start, watch and clean up a small fleet of containerized agents
#[derive(Parser, Debug)]
#[command(name = "brigade", version)]
pub struct Cli {
    /// Action to run: start, stop, monitor, restart, cleanup, full_cycle or inventory
    #[arg(value_name = "ACTION")]
    pub action: Option<String>,

    /// Agent manifest (JSON array of agent records); built-in agents when omitted
    #[arg(short, long, env = "BRIGADE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Container runtime CLI to invoke
    #[arg(long, env = "BRIGADE_RUNTIME", default_value = DEFAULT_RUNTIME, value_name = "PROGRAM")]
    pub runtime: String,

    /// Kill any runtime invocation that runs longer than this many seconds
    #[arg(long, env = "BRIGADE_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Diagnostic log filter written to stderr (e.g. `debug`, `brigade_cli=trace`)
    #[arg(long, env = "BRIGADE_LOG", default_value = "warn", value_name = "FILTER")]
    pub log_level: String,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// The manifest is loaded before the action is looked at, so a bad
    /// manifest is fatal even for unknown actions.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be loaded.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            action,
            config,
            runtime,
            timeout,
            quiet,
            no_color,
            log_level: _,
        } = self;
        let output = OutputContext::new(no_color, quiet);

        let manifest = JsonManifestStore.load(config.as_deref())?;
        if let Some(path) = &config {
            HumanRenderer::new(&output).render_loaded(path);
        }

        let action = match action.as_deref().map(str::parse::<Action>) {
            Some(Ok(action)) => action,
            Some(Err(_)) => {
                HumanRenderer::new(&output).render_usage(action.as_deref());
                return Ok(ExitCode::SUCCESS);
            }
            None => {
                HumanRenderer::new(&output).render_usage(None);
                return Ok(ExitCode::SUCCESS);
            }
        };

        let app = AppContext::new(
            output,
            manifest,
            RuntimeFlags {
                program: runtime,
                timeout: timeout.map(Duration::from_secs),
            },
        );
        commands::orchestrate::run(&app, action).await
    }
}
