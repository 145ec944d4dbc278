//! Application service: dispatches an [`Action`] to its ordered steps.
//!
//! Every step of an action runs, in order, regardless of how earlier steps
//! went. Per-agent failures are narrated and recorded in the returned
//! [`OrchestrationReport`]; none of them abort the sequence.

use crate::application::ports::{CommandRunner, LocalFs, ProgressReporter};
use crate::application::services::exec::{self, CommandResult};
use crate::application::services::inventory::InventoryEntry;
use crate::application::services::lifecycle::{
    AgentOutcome, BuildOutcome, MonitorReport, RemoveOutcome, StartOutcome, StopOutcome,
};
use crate::domain::{Action, AgentError, ContainerCli, Invocation, Manifest, Step};

/// Owns nothing but borrows everything a step needs: the manifest, the
/// runtime CLI builder, a process runner, a filesystem probe and a reporter.
pub struct Orchestrator<'a, R, F, P> {
    pub(crate) manifest: &'a Manifest,
    pub(crate) cli: ContainerCli,
    pub(crate) runner: &'a R,
    pub(crate) fs: &'a F,
    pub(crate) reporter: &'a P,
}

/// What a single step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepReport {
    Build(Vec<AgentOutcome<BuildOutcome>>),
    Start(Vec<AgentOutcome<StartOutcome>>),
    Monitor(MonitorReport),
    Stop(Vec<AgentOutcome<StopOutcome>>),
    Cleanup(Vec<AgentOutcome<RemoveOutcome>>),
    Inventory(Vec<InventoryEntry>),
}

impl StepReport {
    #[must_use]
    pub fn step(&self) -> Step {
        match self {
            StepReport::Build(_) => Step::Build,
            StepReport::Start(_) => Step::Start,
            StepReport::Monitor(_) => Step::Monitor,
            StepReport::Stop(_) => Step::Stop,
            StepReport::Cleanup(_) => Step::Cleanup,
            StepReport::Inventory(_) => Step::Inventory,
        }
    }
}

/// Result of dispatching one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestrationReport {
    pub action: Action,
    pub steps: Vec<StepReport>,
}

impl OrchestrationReport {
    /// Steps that ran, in execution order.
    #[must_use]
    pub fn executed(&self) -> Vec<Step> {
        self.steps.iter().map(StepReport::step).collect()
    }
}

impl<'a, R, F, P> Orchestrator<'a, R, F, P>
where
    R: CommandRunner,
    F: LocalFs,
    P: ProgressReporter,
{
    pub fn new(
        manifest: &'a Manifest,
        cli: ContainerCli,
        runner: &'a R,
        fs: &'a F,
        reporter: &'a P,
    ) -> Self {
        Self {
            manifest,
            cli,
            runner,
            fs,
            reporter,
        }
    }

    /// Run every step of `action` in order.
    pub async fn orchestrate(&self, action: Action) -> OrchestrationReport {
        tracing::info!(%action, agents = self.manifest.len(), "dispatching action");
        let mut steps = Vec::with_capacity(action.steps().len());
        for &step in action.steps() {
            tracing::info!(?step, "running step");
            steps.push(self.run_step(step).await);
        }
        OrchestrationReport { action, steps }
    }

    async fn run_step(&self, step: Step) -> StepReport {
        match step {
            Step::Build => StepReport::Build(self.build_images().await),
            Step::Start => StepReport::Start(self.start_agents().await),
            Step::Monitor => StepReport::Monitor(self.monitor_agents().await),
            Step::Stop => StepReport::Stop(self.stop_agents().await),
            Step::Cleanup => StepReport::Cleanup(self.cleanup_containers().await),
            Step::Inventory => StepReport::Inventory(self.list_agents()),
        }
    }

    pub(crate) async fn execute(&self, invocation: &Invocation) -> CommandResult {
        exec::execute(self.runner, self.reporter, invocation).await
    }

    /// Narrate an agent that cannot take part in a lifecycle step.
    pub(crate) fn skip_invalid(&self, err: &AgentError) {
        self.reporter.error(&format!("Skipping: {err}"));
    }
}
