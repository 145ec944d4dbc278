//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while loading the agent manifest. All of them are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration file '{0}' not found.")]
    NotFound(String),

    #[error("Cannot read configuration file '{path}': {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Could not parse configuration file '{path}': {reason}")]
    Parse { path: String, reason: String },
}

// ── Agent errors ──────────────────────────────────────────────────────────────

/// Per-agent problems found when an agent record is used for a lifecycle step.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("agent '{agent}' has no {field}")]
    MissingField { agent: String, field: &'static str },

    #[error("agent '{agent}' has a command that cannot be split into words: {command}")]
    UnsplittableCommand { agent: String, command: String },
}

// ── Action errors ─────────────────────────────────────────────────────────────

/// Errors from parsing the action named on the command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Unknown action: {0}.")]
    Unknown(String),
}
