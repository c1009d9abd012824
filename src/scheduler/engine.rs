//! Simulation entry points.
//!
//! Each algorithm is a pure runner `fn(&[ProcessDescriptor], &RunParams) -> Run`
//! selected from a lookup table keyed by `Algorithm`. The runner builds the
//! schedule, counts context switches and records the step trace in one
//! pass; the metrics aggregator is applied afterwards.
//!
//! No state survives a call: every run owns its working copies and returns
//! freshly built values.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::metrics::{ArrivalBasis, MetricsSummary, ProcessMetrics};
use super::non_preemptive::{run_fifo, run_priority, run_sjf};
use super::round_robin::run_round_robin;
use super::{ArrivalPolicy, SimulationConfig, SimulationRequest};
use crate::error::{Result, SimulationError};
use crate::models::{Algorithm, ProcessDescriptor, Schedule};
use crate::trace::{StepTrace, Trace};
use crate::validation::validate_processes;

/// Resolved per-run parameters handed to a runner.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunParams {
    pub quantum: i64,
    pub arrivals: ArrivalPolicy,
}

/// Raw output of a runner, before metrics.
#[derive(Debug, Clone, Default)]
pub(crate) struct Run {
    pub schedule: Schedule,
    pub context_switches: usize,
    pub trace: Trace,
}

impl Run {
    pub(crate) fn empty() -> Self {
        Self::default()
    }
}

type Runner = fn(&[ProcessDescriptor], &RunParams) -> Run;

fn runner_for(algorithm: Algorithm) -> Runner {
    match algorithm {
        Algorithm::Fifo => run_fifo,
        Algorithm::Sjf => run_sjf,
        Algorithm::RoundRobin => run_round_robin,
        Algorithm::Priority => run_priority,
    }
}

/// Output of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Simulated algorithm.
    pub algorithm: Algorithm,
    /// Gantt timeline.
    pub schedule: Schedule,
    /// Aggregate metrics.
    pub metrics: MetricsSummary,
    /// Per-process timing, in input order.
    pub process_metrics: Vec<ProcessMetrics>,
}

impl SimulationResult {
    /// Per-process timing for one process.
    pub fn metrics_for(&self, process_id: &str) -> Option<&ProcessMetrics> {
        self.process_metrics
            .iter()
            .find(|m| m.process_id == process_id)
    }
}

/// CPU scheduling simulator.
///
/// Holds only configuration; every `run` is independent.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Algorithm, ProcessDescriptor};
/// use u_cpusched::scheduler::Simulator;
///
/// let processes = vec![
///     ProcessDescriptor::new("1", 5),
///     ProcessDescriptor::new("2", 3).with_arrival_time(1),
/// ];
/// let result = Simulator::new().run(&processes, Algorithm::Fifo).unwrap();
///
/// assert_eq!(result.schedule.len(), 2);
/// assert_eq!(result.schedule.entries[1].start_time, 5);
/// assert!((result.metrics.avg_waiting_time - 2.0).abs() < 1e-10);
/// assert_eq!(result.metrics.context_switches, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
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

    /// Current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates `algorithm` over `processes`.
    ///
    /// # Errors
    /// `InvalidInput` if a process has a non-positive burst, a negative
    /// arrival or a duplicate id, if the latest arrival plus the total burst
    /// overflows `i64`, or (Round-Robin only) if the quantum is not positive.
    /// An empty process list is not an error.
    pub fn run(
        &self,
        processes: &[ProcessDescriptor],
        algorithm: Algorithm,
    ) -> Result<SimulationResult> {
        let (params, run) = self.execute(processes, algorithm)?;

        let basis = match (algorithm, params.arrivals) {
            (Algorithm::RoundRobin, ArrivalPolicy::Ignore) => ArrivalBasis::Origin,
            _ => ArrivalBasis::Declared,
        };
        let (metrics, process_metrics) =
            MetricsSummary::calculate(&run.schedule, processes, run.context_switches, basis);

        info!(
            algorithm = %algorithm,
            processes = processes.len(),
            entries = run.schedule.len(),
            makespan = run.schedule.makespan(),
            context_switches = run.context_switches,
            "simulation complete"
        );

        Ok(SimulationResult {
            algorithm,
            schedule: run.schedule,
            metrics,
            process_metrics,
        })
    }

    /// Records the step trace of `algorithm` over `processes`.
    ///
    /// The steps come from the same runner `run` uses, so they match its
    /// decisions one to one.
    pub fn trace(&self, processes: &[ProcessDescriptor], algorithm: Algorithm) -> Result<StepTrace> {
        let (_, run) = self.execute(processes, algorithm)?;
        Ok(StepTrace::new(algorithm, run.trace))
    }

    fn execute(
        &self,
        processes: &[ProcessDescriptor],
        algorithm: Algorithm,
    ) -> Result<(RunParams, Run)> {
        let params = self.resolve(processes, algorithm).map_err(|err| {
            warn!(algorithm = %algorithm, error = %err, "rejected simulation input");
            err
        })?;
        let run = runner_for(algorithm)(processes, &params);
        Ok((params, run))
    }

    fn resolve(&self, processes: &[ProcessDescriptor], algorithm: Algorithm) -> Result<RunParams> {
        let mut errors = validate_processes(processes).err().unwrap_or_default();
        let quantum = if algorithm == Algorithm::RoundRobin {
            match self.config.effective_quantum() {
                Ok(q) => q,
                Err(err) => {
                    errors.extend(err.validation_errors().iter().cloned());
                    0
                }
            }
        } else {
            self.config.quantum.unwrap_or(super::DEFAULT_QUANTUM)
        };

        if !errors.is_empty() {
            return Err(SimulationError::InvalidInput(errors));
        }
        Ok(RunParams {
            quantum,
            arrivals: self.config.round_robin_arrivals,
        })
    }
}

/// Simulates `algorithm` over `processes`.
///
/// `quantum` is used by Round-Robin only; `None` selects `DEFAULT_QUANTUM`.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Algorithm, ProcessDescriptor};
/// use u_cpusched::scheduler::simulate;
///
/// let processes = vec![ProcessDescriptor::new("1", 5)];
/// let result = simulate(&processes, Algorithm::RoundRobin, Some(4)).unwrap();
///
/// let slices: Vec<(i64, i64)> = result
///     .schedule
///     .entries
///     .iter()
///     .map(|e| (e.start_time, e.duration))
///     .collect();
/// assert_eq!(slices, vec![(0, 4), (4, 1)]);
/// assert_eq!(result.metrics.context_switches, 1);
/// ```
pub fn simulate(
    processes: &[ProcessDescriptor],
    algorithm: Algorithm,
    quantum: Option<i64>,
) -> Result<SimulationResult> {
    let config = SimulationConfig {
        quantum,
        ..SimulationConfig::default()
    };
    Simulator::new().with_config(config).run(processes, algorithm)
}

/// Simulates a request.
pub fn simulate_request(request: &SimulationRequest) -> Result<SimulationResult> {
    Simulator::new()
        .with_config(request.config.clone())
        .run(&request.processes, request.algorithm)
}

/// Records the step trace of `algorithm` over `processes`.
pub fn step_trace(
    processes: &[ProcessDescriptor],
    algorithm: Algorithm,
    config: &SimulationConfig,
) -> Result<StepTrace> {
    Simulator::new()
        .with_config(config.clone())
        .trace(processes, algorithm)
}
