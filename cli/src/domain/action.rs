//! The closed set of orchestration actions and the steps each one runs.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ActionError;

/// One per-agent pass over the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Build,
    Start,
    Monitor,
    Stop,
    Cleanup,
    Inventory,
}

/// A high-level action selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
    Monitor,
    Restart,
    Cleanup,
    FullCycle,
    Inventory,
}

impl Action {
    /// Every action, in the order they are listed in usage text.
    pub const ALL: [Action; 7] = [
        Action::Start,
        Action::Stop,
        Action::Monitor,
        Action::Restart,
        Action::Cleanup,
        Action::FullCycle,
        Action::Inventory,
    ];

    /// The command-line spelling of this action.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Monitor => "monitor",
            Action::Restart => "restart",
            Action::Cleanup => "cleanup",
            Action::FullCycle => "full_cycle",
            Action::Inventory => "inventory",
        }
    }

    /// Ordered steps this action runs. Every step runs even if an earlier one
    /// reported failures.
    #[must_use]
    pub fn steps(self) -> &'static [Step] {
        match self {
            Action::Start => &[Step::Build, Step::Start, Step::Monitor],
            Action::Stop => &[Step::Stop],
            Action::Monitor => &[Step::Monitor],
            Action::Restart => &[Step::Stop, Step::Start, Step::Monitor],
            Action::Cleanup => &[Step::Cleanup],
            Action::FullCycle => &[
                Step::Stop,
                Step::Cleanup,
                Step::Build,
                Step::Start,
                Step::Monitor,
            ],
            Action::Inventory => &[Step::Inventory],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ActionError;

    /// Exact, case-sensitive match on the command-line spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ActionError::Unknown(s.to_owned()))
    }
}
