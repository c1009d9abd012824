//! Scheduling algorithm selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// The scheduling disciplines the engine can simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Algorithm {
    /// First-In-First-Out, non-preemptive, ordered by arrival time.
    Fifo,
    /// Shortest-Job-First, non-preemptive, ordered by burst time.
    Sjf,
    /// Preemptive time slicing with a fixed quantum.
    RoundRobin,
    /// Non-preemptive, ordered by priority (lower number first).
    Priority,
}

impl Algorithm {
    /// Every algorithm, in the order reports list them.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fifo,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    /// Selector name (e.g., "ROUND_ROBIN").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "FIFO",
            Algorithm::Sjf => "SJF",
            Algorithm::RoundRobin => "ROUND_ROBIN",
            Algorithm::Priority => "PRIORITY",
        }
    }

    /// Short tag stamped on schedule entries (e.g., "RR").
    pub fn tag(&self) -> &'static str {
        match self {
            Algorithm::RoundRobin => "RR",
            other => other.name(),
        }
    }

    /// Whether a running process can be interrupted before it completes.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "FIFO" | "FCFS" => Ok(Algorithm::Fifo),
            "SJF" => Ok(Algorithm::Sjf),
            "ROUND_ROBIN" | "RR" => Ok(Algorithm::RoundRobin),
            "PRIORITY" => Ok(Algorithm::Priority),
            _ => Err(SimulationError::UnknownAlgorithm(s.to_string())),
        }
    }
}
