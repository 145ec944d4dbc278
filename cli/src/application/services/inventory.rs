//! Application service: local inventory of the manifest. No runtime calls.

use crate::application::ports::{CommandRunner, LocalFs, ProgressReporter};
use crate::application::services::orchestrate::Orchestrator;
use crate::domain::Agent;
use crate::domain::agent::UNNAMED;

pub const NO_DESCRIPTION: &str = "No description provided.";
pub const NOT_AVAILABLE: &str = "N/A";

/// Descriptive fields of one agent with placeholders already substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    pub name: String,
    pub description: String,
    pub image: String,
    pub build: String,
    pub externals: String,
}

impl From<&Agent> for InventoryEntry {
    fn from(agent: &Agent) -> Self {
        let or = |field: &Option<String>, placeholder: &str| {
            field.clone().unwrap_or_else(|| placeholder.to_owned())
        };
        Self {
            name: or(&agent.name, UNNAMED),
            description: or(&agent.description, NO_DESCRIPTION),
            image: or(&agent.image, NOT_AVAILABLE),
            build: or(&agent.build, NOT_AVAILABLE),
            externals: or(&agent.externals, NOT_AVAILABLE),
        }
    }
}

impl<R, F, P> Orchestrator<'_, R, F, P>
where
    R: CommandRunner,
    F: LocalFs,
    P: ProgressReporter,
{
    /// Print every record's descriptive fields in manifest order.
    pub fn list_agents(&self) -> Vec<InventoryEntry> {
        self.reporter.header("Agent Inventory");
        let entries: Vec<InventoryEntry> = self
            .manifest
            .agents()
            .iter()
            .map(InventoryEntry::from)
            .collect();

        if entries.is_empty() {
            self.reporter.info("No agents are registered.");
        } else {
            self.reporter
                .info(&format!("Total Agents: {}", entries.len()));
            for (index, entry) in entries.iter().enumerate() {
                self.reporter.step(&format!("#{}:", index + 1));
                self.reporter.detail("Name", &entry.name);
                self.reporter.detail("Description", &entry.description);
                self.reporter.detail("Image", &entry.image);
                self.reporter.detail("Build", &entry.build);
                self.reporter.detail("Externals", &entry.externals);
            }
        }

        self.reporter.footer("Inventory Complete");
        entries
    }
}
