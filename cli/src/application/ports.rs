//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;

use anyhow::Result;

use crate::domain::{ConfigError, Manifest};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so the container runtime can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned, cannot be waited
    /// on, or exceeds the runner's timeout (when one is configured).
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Operator-facing narration. Services emit events through this trait
/// without depending on the Presentation layer. Synchronous.
pub trait ProgressReporter {
    /// Open a section, e.g. `--- Starting Agents ---`.
    fn header(&self, title: &str);
    /// Close a section.
    fn footer(&self, title: &str);
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit an error message.
    fn error(&self, message: &str);
    /// Emit a neutral informational message.
    fn info(&self, message: &str);
    /// Emit an indented `key: value` detail line.
    fn detail(&self, key: &str, value: &str);
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the local filesystem checks the image builder needs.
pub trait LocalFs {
    /// Returns `true` if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

// ── Manifest Port ─────────────────────────────────────────────────────────────

/// Abstracts where the agent manifest comes from.
pub trait ManifestStore {
    /// Load the manifest from `path`, or fall back to the built-in agents
    /// when no path is given.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file is missing, unreadable or malformed.
    fn load(&self, path: Option<&Path>) -> Result<Manifest, ConfigError>;
}
