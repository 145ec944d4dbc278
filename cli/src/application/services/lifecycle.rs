//! Application service: per-agent container lifecycle passes.
//!
//! Each pass walks the manifest in order, issues one runtime invocation per
//! agent and records an outcome. A failing agent never stops the pass.

use std::path::Path;

use crate::application::ports::{CommandRunner, LocalFs, ProgressReporter};
use crate::application::services::orchestrate::Orchestrator;
use crate::domain::{Agent, RunningContainer};

/// Substring (compared case-insensitively) the runtime uses when `rm`
/// targets a container that does not exist.
const NO_SUCH_CONTAINER: &str = "no such container";

/// Outcome of one pass for one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentOutcome<T> {
    /// Agent name, or the unnamed placeholder.
    pub agent: String,
    pub outcome: T,
}

impl<T> AgentOutcome<T> {
    fn new(agent: &Agent, outcome: T) -> Self {
        Self {
            agent: agent.label().to_owned(),
            outcome,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Built,
    /// No build context directory for the image.
    Skipped,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started { container_id: String },
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    Stopped,
    /// The container may simply not have been running.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The runtime had no such container; nothing to do.
    Absent,
    Failed { reason: String },
}

/// Containers found by a monitoring pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorReport {
    pub running: Vec<RunningContainer>,
    /// Agents with no matching running container, in manifest order.
    pub not_running: Vec<String>,
}

impl MonitorReport {
    #[must_use]
    pub fn is_running(&self, agent: &str) -> bool {
        self.running.iter().any(|c| c.name == agent)
    }
}

impl<R, F, P> Orchestrator<'_, R, F, P>
where
    R: CommandRunner,
    F: LocalFs,
    P: ProgressReporter,
{
    /// Build every image whose context directory exists next to the working directory.
    pub async fn build_images(&self) -> Vec<AgentOutcome<BuildOutcome>> {
        self.reporter.header("Building Images");
        let mut outcomes = Vec::with_capacity(self.manifest.len());
        for agent in self.manifest.agents() {
            let outcome = self.build_one(agent).await;
            outcomes.push(AgentOutcome::new(agent, outcome));
        }
        self.reporter.footer("Image Building Complete");
        outcomes
    }

    async fn build_one(&self, agent: &Agent) -> BuildOutcome {
        let spec = match agent.container() {
            Ok(spec) => spec,
            Err(e) => {
                self.skip_invalid(&e);
                return BuildOutcome::Failed;
            }
        };
        let context = spec.build_context();
        if !self.fs.is_dir(Path::new(&context)) {
            self.reporter.info(&format!(
                "Skipping build for {}. No Dockerfile context found at {context}",
                spec.image
            ));
            return BuildOutcome::Skipped;
        }

        self.reporter.step(&format!(
            "Attempting to build image: {} from {context}",
            spec.image
        ));
        let result = self.execute(&self.cli.build(spec.image, &context)).await;
        if result.success {
            self.reporter
                .success(&format!("Successfully built image: {}", spec.image));
            BuildOutcome::Built
        } else {
            self.reporter.error(&format!(
                "Failed to build image: {}. Please check your Dockerfile and context.",
                spec.image
            ));
            BuildOutcome::Failed
        }
    }

    /// Start a detached, auto-removed container per agent.
    pub async fn start_agents(&self) -> Vec<AgentOutcome<StartOutcome>> {
        self.reporter.header("Starting Agents");
        let mut outcomes = Vec::with_capacity(self.manifest.len());
        for agent in self.manifest.agents() {
            let outcome = self.start_one(agent).await;
            outcomes.push(AgentOutcome::new(agent, outcome));
        }
        self.reporter.footer("Agents Started");
        outcomes
    }

    async fn start_one(&self, agent: &Agent) -> StartOutcome {
        let spec = match agent.container() {
            Ok(spec) => spec,
            Err(e) => {
                self.skip_invalid(&e);
                return StartOutcome::Failed;
            }
        };
        self.reporter
            .step(&format!("Starting container for {}...", spec.name));

        let invocation = match self.cli.run(&spec) {
            Ok(invocation) => invocation,
            Err(e) => {
                self.reporter
                    .error(&format!("Failed to start {}: {e}", spec.name));
                return StartOutcome::Failed;
            }
        };

        let result = self.execute(&invocation).await;
        if result.success {
            self.reporter.success(&format!(
                "Started {} (Container ID: {})",
                spec.name, result.stdout
            ));
            StartOutcome::Started {
                container_id: result.stdout,
            }
        } else {
            self.reporter
                .error(&format!("Failed to start {}.", spec.name));
            StartOutcome::Failed
        }
    }

    /// Ask the runtime which agents have a running container with exactly their name.
    pub async fn monitor_agents(&self) -> MonitorReport {
        self.reporter.header("Monitoring Agents");
        let mut report = MonitorReport::default();
        for agent in self.manifest.agents() {
            let spec = match agent.container() {
                Ok(spec) => spec,
                Err(e) => {
                    self.skip_invalid(&e);
                    report.not_running.push(agent.label().to_owned());
                    continue;
                }
            };

            let result = self.execute(&self.cli.ps(spec.name)).await;
            let found = if result.success {
                RunningContainer::from_ps_output(&result.stdout)
            } else {
                None
            };
            match found {
                Some(container) => {
                    self.reporter.success(&format!(
                        "Agent: {}, Status: {}, ID: {}",
                        container.name, container.status, container.id
                    ));
                    report.running.push(container);
                }
                None => {
                    self.reporter
                        .info(&format!("Agent: {} is not running.", spec.name));
                    report.not_running.push(spec.name.to_owned());
                }
            }
        }

        if report.running.is_empty() {
            self.reporter.warn("No agents are currently running.");
        }
        self.reporter.footer("Monitoring Complete");
        report
    }

    /// Stop each agent's container by name.
    pub async fn stop_agents(&self) -> Vec<AgentOutcome<StopOutcome>> {
        self.reporter.header("Stopping Agents");
        let mut outcomes = Vec::with_capacity(self.manifest.len());
        for agent in self.manifest.agents() {
            let outcome = self.stop_one(agent).await;
            outcomes.push(AgentOutcome::new(agent, outcome));
        }
        self.reporter.footer("Agents Stopped");
        outcomes
    }

    async fn stop_one(&self, agent: &Agent) -> StopOutcome {
        let spec = match agent.container() {
            Ok(spec) => spec,
            Err(e) => {
                self.skip_invalid(&e);
                return StopOutcome::Failed;
            }
        };
        self.reporter
            .step(&format!("Stopping container for {}...", spec.name));
        let result = self.execute(&self.cli.stop(spec.name)).await;
        if result.success {
            self.reporter.success(&format!("Stopped {}.", spec.name));
            StopOutcome::Stopped
        } else {
            self.reporter.warn(&format!(
                "Failed to stop {} (might not be running or an error occurred).",
                spec.name
            ));
            StopOutcome::Failed
        }
    }

    /// Remove each agent's container by name.
    pub async fn cleanup_containers(&self) -> Vec<AgentOutcome<RemoveOutcome>> {
        self.reporter.header("Cleaning Up Containers");
        let mut outcomes = Vec::with_capacity(self.manifest.len());
        for agent in self.manifest.agents() {
            let outcome = self.remove_one(agent).await;
            outcomes.push(AgentOutcome::new(agent, outcome));
        }
        self.reporter.footer("Cleanup Complete");
        outcomes
    }

    async fn remove_one(&self, agent: &Agent) -> RemoveOutcome {
        let spec = match agent.container() {
            Ok(spec) => spec,
            Err(e) => {
                self.skip_invalid(&e);
                return RemoveOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };
        self.reporter.step(&format!(
            "Removing container for {} (if it exists)...",
            spec.name
        ));
        // `run --rm` normally removes the container already; this catches leftovers.
        let result = self.execute(&self.cli.rm(spec.name)).await;
        if result.success {
            self.reporter.success(&format!("Removed {}.", spec.name));
            RemoveOutcome::Removed
        } else if result
            .stderr
            .to_ascii_lowercase()
            .contains(NO_SUCH_CONTAINER)
        {
            self.reporter.info(&format!(
                "Container {} does not exist, no need to remove.",
                spec.name
            ));
            RemoveOutcome::Absent
        } else {
            self.reporter.error(&format!(
                "Failed to remove {}: {}",
                spec.name, result.stderr
            ));
            RemoveOutcome::Failed {
                reason: result.stderr,
            }
        }
    }
}
