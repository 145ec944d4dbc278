//! Application services: use-case orchestration.
//!
//! Services import only from `crate::domain` and `crate::application::ports`
//! and never from `crate::infra`, `crate::commands`, or `crate::output`.

pub mod exec;
pub mod inventory;
pub mod lifecycle;
pub mod orchestrate;

pub use orchestrate::{OrchestrationReport, Orchestrator, StepReport};
