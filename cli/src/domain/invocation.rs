//! Argument vectors for the container runtime CLI.
//!
//! [`ContainerCli`] produces the five invocation shapes the orchestrator
//! issues (`build`, `run`, `ps`, `stop`, `rm`) as explicit
//! program-plus-arguments values. Nothing here goes through a shell; the
//! rendered [`Invocation::command_line`] is only used for narration.

use crate::domain::agent::ContainerSpec;
use crate::domain::error::AgentError;

/// Go template requested from `ps`: ID, status and name separated by tabs.
pub const PS_FORMAT: &str = "{{.ID}}\t{{.Status}}\t{{.Names}}";

/// Runtime CLI used when none is configured.
pub const DEFAULT_RUNTIME: &str = "docker";

/// A single external command: program name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Shell-quoted rendering of the full command, for diagnostics.
    #[must_use]
    pub fn command_line(&self) -> String {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        shlex::try_join(words.clone()).unwrap_or_else(|_| words.collect::<Vec<_>>().join(" "))
    }
}

/// Builds invocations for a particular runtime program (`docker`, `podman`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerCli {
    program: String,
}

impl Default for ContainerCli {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME)
    }
}

impl ContainerCli {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// `build -t <image> <context>`
    #[must_use]
    pub fn build(&self, image: &str, context: &str) -> Invocation {
        self.invoke(["build", "-t", image, context])
    }

    /// `run -d --rm --name <name> [-e K=V]... [-p host:container]... <image> [command...]`
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::UnsplittableCommand`] when the agent's command has
    /// unbalanced quoting.
    pub fn run(&self, spec: &ContainerSpec<'_>) -> Result<Invocation, AgentError> {
        let command_words = match spec.command {
            Some(command) => {
                shlex::split(command).ok_or_else(|| AgentError::UnsplittableCommand {
                    agent: spec.name.to_owned(),
                    command: command.to_owned(),
                })?
            }
            None => Vec::new(),
        };

        let mut args: Vec<String> = ["run", "-d", "--rm", "--name", spec.name]
            .into_iter()
            .map(str::to_owned)
            .collect();
        for (key, value) in spec.env {
            args.push("-e".to_owned());
            args.push(format!("{key}={value}"));
        }
        for port in spec.ports {
            args.push("-p".to_owned());
            args.push(port.clone());
        }
        args.push(spec.image.to_owned());
        args.extend(command_words);

        Ok(Invocation::new(self.program.clone(), args))
    }

    /// `ps -f name=^/<name>$ --format <PS_FORMAT>`
    ///
    /// The filter is anchored on both ends so `chef` never matches `chef_2`.
    #[must_use]
    pub fn ps(&self, name: &str) -> Invocation {
        let filter = format!("name=^/{name}$");
        self.invoke(["ps", "-f", &filter, "--format", PS_FORMAT])
    }

    /// `stop <name>`
    #[must_use]
    pub fn stop(&self, name: &str) -> Invocation {
        self.invoke(["stop", name])
    }

    /// `rm <name>`
    #[must_use]
    pub fn rm(&self, name: &str) -> Invocation {
        self.invoke(["rm", name])
    }

    fn invoke<const N: usize>(&self, args: [&str; N]) -> Invocation {
        Invocation::new(
            self.program.clone(),
            args.into_iter().map(str::to_owned).collect(),
        )
    }
}

/// One row of `ps` output in [`PS_FORMAT`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunningContainer {
    pub id: String,
    pub status: String,
    pub name: String,
}

impl RunningContainer {
    /// Parse the first line of `ps` output. Returns `None` when there is no
    /// output; missing columns are left empty.
    #[must_use]
    pub fn from_ps_output(stdout: &str) -> Option<Self> {
        let line = stdout.trim().lines().next()?;
        let mut columns = line.splitn(3, '\t').map(str::to_owned);
        Some(Self {
            id: columns.next().unwrap_or_default(),
            status: columns.next().unwrap_or_default(),
            name: columns.next().unwrap_or_default(),
        })
    }
}
