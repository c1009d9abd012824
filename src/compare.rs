//! Side-by-side comparison of all algorithms on one workload.
//!
//! Runs every `Algorithm` with the same configuration and ranks them by
//! average turnaround or waiting time, the figures a comparison chart plots.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Algorithm, ProcessDescriptor};
use crate::scheduler::{MetricsSummary, SimulationConfig, Simulator};

/// Metrics of one algorithm in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmReport {
    pub algorithm: Algorithm,
    pub metrics: MetricsSummary,
    /// Completion time of the last process.
    pub makespan: i64,
    /// Number of schedule entries.
    pub dispatches: usize,
}

/// Reports for every algorithm, in `Algorithm::ALL` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub reports: Vec<AlgorithmReport>,
}

impl Comparison {
    /// Report for one algorithm.
    pub fn report(&self, algorithm: Algorithm) -> Option<&AlgorithmReport> {
        self.reports.iter().find(|r| r.algorithm == algorithm)
    }

    /// Algorithm with the lowest average turnaround (first on ties).
    pub fn best_by_turnaround(&self) -> Option<Algorithm> {
        self.best_by(|m| m.avg_turnaround_time)
    }

    /// Algorithm with the lowest average waiting time (first on ties).
    pub fn best_by_waiting(&self) -> Option<Algorithm> {
        self.best_by(|m| m.avg_waiting_time)
    }

    fn best_by(&self, score: impl Fn(&MetricsSummary) -> f64) -> Option<Algorithm> {
        let mut best: Option<(&AlgorithmReport, f64)> = None;
        for report in &self.reports {
            let value = score(&report.metrics);
            match best {
                Some((_, current)) if value >= current => {}
                _ => best = Some((report, value)),
            }
        }
        best.map(|(r, _)| r.algorithm)
    }
}

/// Simulates every algorithm over `processes` with `config`.
///
/// # Errors
/// The first `InvalidInput` any run reports.
pub fn compare_algorithms(
    processes: &[ProcessDescriptor],
    config: &SimulationConfig,
) -> Result<Comparison> {
    let simulator = Simulator::new().with_config(config.clone());
    let reports = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let result = simulator.run(processes, algorithm)?;
            Ok(AlgorithmReport {
                algorithm,
                makespan: result.schedule.makespan(),
                dispatches: result.schedule.len(),
                metrics: result.metrics,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Comparison { reports })
}
