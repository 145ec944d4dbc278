//! Agent records and the manifest that owns them.
//!
//! Every field of an [`Agent`] is optional when the manifest is loaded;
//! absence is only resolved when a record is used. Lifecycle steps require a
//! name and an image and go through [`Agent::container`].

use indexmap::IndexMap;
use serde::Deserialize;

use crate::domain::error::AgentError;

/// Label used for records that carry no `name`.
pub const UNNAMED: &str = "(unnamed)";

/// A single agent record as declared in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Agent {
    /// Unique identifier, used as the container name.
    pub name: Option<String>,
    /// Free-text audit note.
    pub description: Option<String>,
    /// Environment tag, e.g. `"prod"`.
    pub build: Option<String>,
    /// Note on external resources the agent depends on.
    pub externals: Option<String>,
    /// Container image reference (`repo:tag`).
    pub image: Option<String>,
    /// Command line executed inside the container.
    pub command: Option<String>,
    /// Environment variables injected at run time, in declaration order.
    pub env: IndexMap<String, String>,
    /// Port mappings in `host:container` form.
    pub ports: Vec<String>,
}

/// Lifecycle-ready view of an agent: name and image are known to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSpec<'a> {
    pub name: &'a str,
    pub image: &'a str,
    pub command: Option<&'a str>,
    pub env: &'a IndexMap<String, String>,
    pub ports: &'a [String],
}

impl Agent {
    /// Name for narration, falling back to [`UNNAMED`].
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    /// Resolve the fields a lifecycle step needs.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::MissingField`] when `name` or `image` is absent.
    pub fn container(&self) -> Result<ContainerSpec<'_>, AgentError> {
        let name = self.name.as_deref().ok_or_else(|| self.missing("name"))?;
        let image = self.image.as_deref().ok_or_else(|| self.missing("image"))?;
        Ok(ContainerSpec {
            name,
            image,
            command: self.command.as_deref(),
            env: &self.env,
            ports: &self.ports,
        })
    }

    fn missing(&self, field: &'static str) -> AgentError {
        AgentError::MissingField {
            agent: self.label().to_owned(),
            field,
        }
    }
}

impl ContainerSpec<'_> {
    /// Build context directory for this agent's image: the image reference up
    /// to its first `:`, relative to the working directory.
    #[must_use]
    pub fn build_context(&self) -> String {
        let repo = self
            .image
            .split_once(':')
            .map_or(self.image, |(repo, _tag)| repo);
        format!("./{repo}")
    }
}

/// Ordered, immutable set of agent records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    agents: Vec<Agent>,
}

impl Manifest {
    #[must_use]
    pub fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    /// The two-agent set used when no manifest file is given.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Agent {
                name: Some("chef_agent".to_owned()),
                description: Some(
                    "Primary agent utilizing ChatGPT or Gemini or etc etc etc".to_owned(),
                ),
                build: Some("prod".to_owned()),
                externals: Some("none".to_owned()),
                image: Some("my_ai_agent_chef:latest".to_owned()),
                command: Some("python /app/chef_agent.py".to_owned()),
                env: env_of(&[("API_KEY", "some_key_alpha"), ("AGENT_ID", "chef_001")]),
                ports: vec!["8000:8000".to_owned()],
            },
            Agent {
                name: Some("sous_agent".to_owned()),
                description: Some("Agent to help primary.".to_owned()),
                build: Some("prod".to_owned()),
                externals: Some("none".to_owned()),
                image: Some("my_ai_agent_sous:latest".to_owned()),
                command: Some("python /app/sous_agent.py".to_owned()),
                env: env_of(&[("API_KEY", "some_key_beta"), ("AGENT_ID", "sous_001")]),
                ports: Vec::new(),
            },
        ])
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

fn env_of(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}
