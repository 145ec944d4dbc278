//! Domain layer: pure types for agents, actions and runtime invocations.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod action;
pub mod agent;
pub mod error;
pub mod invocation;

pub use action::{Action, Step};
pub use agent::{Agent, ContainerSpec, Manifest};
pub use error::{ActionError, AgentError, ConfigError};
pub use invocation::{ContainerCli, Invocation, RunningContainer};
