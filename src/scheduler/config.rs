//! Simulation configuration and request container.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{Algorithm, ProcessDescriptor};
use crate::validation::validate_quantum;

/// Quantum used by Round-Robin when none is configured.
pub const DEFAULT_QUANTUM: i64 = 4;

/// How Round-Robin treats arrival times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalPolicy {
    /// Every process is in the ready queue at t=0, in input order.
    /// Waiting and turnaround are measured from t=0.
    #[default]
    Ignore,
    /// A process joins the ready queue only once its arrival time has
    /// passed. Arrivals during a slice are queued ahead of the preempted
    /// process.
    Gate,
}

/// Engine settings shared by all algorithms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round-Robin time slice. `None` = `DEFAULT_QUANTUM`.
    pub quantum: Option<i64>,
    /// Arrival handling for Round-Robin.
    pub round_robin_arrivals: ArrivalPolicy,
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the Round-Robin arrival policy.
    pub fn with_arrival_policy(mut self, policy: ArrivalPolicy) -> Self {
        self.round_robin_arrivals = policy;
        self
    }

    /// The quantum a Round-Robin run uses.
    ///
    /// # Errors
    /// `InvalidInput` if a non-positive quantum was configured.
    pub fn effective_quantum(&self) -> Result<i64> {
        let quantum = self.quantum.unwrap_or(DEFAULT_QUANTUM);
        validate_quantum(quantum).map_err(SimulationError::InvalidInput)?;
        Ok(quantum)
    }
}

/// Input container for one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule, in input order.
    pub processes: Vec<ProcessDescriptor>,
    /// Discipline to simulate.
    pub algorithm: Algorithm,
    /// Engine settings.
    #[serde(default)]
    pub config: SimulationConfig,
}

impl SimulationRequest {
    /// Creates a new request with the default configuration.
    pub fn new(processes: Vec<ProcessDescriptor>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            config: SimulationConfig::default(),
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.config.quantum = Some(quantum);
        self
    }

    /// Sets the Round-Robin arrival policy.
    pub fn with_arrival_policy(mut self, policy: ArrivalPolicy) -> Self {
        self.config.round_robin_arrivals = policy;
        self
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }
}
