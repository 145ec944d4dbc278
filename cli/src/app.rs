//! Application context: unified state passed to every command handler.
//!
//! Built once in `Cli::run()` after the manifest has loaded; the manifest is
//! owned here and lent to each step by reference.

use std::time::Duration;

use crate::domain::{ContainerCli, Manifest};
use crate::infra::{HostFs, TokioCommandRunner};
use crate::output::OutputContext;

/// Runtime flags.
pub struct RuntimeFlags {
    /// Container runtime CLI, e.g. `docker` or `podman`.
    pub program: String,
    /// Per-invocation timeout; `None` waits for the child to exit.
    pub timeout: Option<Duration>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Agent manifest, immutable for the rest of the process.
    pub manifest: Manifest,
    /// Builder for runtime invocations.
    pub container_cli: ContainerCli,
    /// Process runner used for every runtime invocation.
    pub runner: TokioCommandRunner,
    /// Filesystem probe for image build contexts.
    pub fs: HostFs,
}

impl AppContext {
    #[must_use]
    pub fn new(output: OutputContext, manifest: Manifest, runtime: RuntimeFlags) -> Self {
        Self {
            output,
            manifest,
            container_cli: ContainerCli::new(runtime.program),
            runner: TokioCommandRunner::new(runtime.timeout),
            fs: HostFs,
        }
    }
}
