//! Schedule performance metrics.
//!
//! Shared arithmetic applied identically to the output of every algorithm.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | Context switches | CPU handoffs reported by the runner |
//! | CPU utilization | round(100 * end / (end + 5)) |
//!
//! Completion is the end of a process's *last* entry and first start the
//! start of its *first* entry, so a process sliced by Round-Robin is
//! measured once, not once per slice.

use serde::{Deserialize, Serialize};

use crate::models::{ProcessDescriptor, ProcessSpan, Schedule};

/// Constant overhead term of the utilization approximation.
const UTILIZATION_OVERHEAD: f64 = 5.0;

/// Where waiting and turnaround are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalBasis {
    /// Each process's declared `arrival_time`.
    Declared,
    /// t=0 for every process (arrival-agnostic Round-Robin).
    Origin,
}

/// Aggregate metrics of one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    /// Mean waiting time over distinct processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over distinct processes.
    pub avg_turnaround_time: f64,
    /// Number of CPU handoffs.
    pub context_switches: usize,
    /// Approximate utilization percentage (0..=100).
    pub cpu_utilization: u32,
}

/// Per-process timing derived from a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    pub process_id: String,
    /// Arrival time the measurements are relative to.
    pub arrival_time: i64,
    pub burst_time: i64,
    pub first_start: i64,
    pub completion_time: i64,
    pub waiting_time: i64,
    pub turnaround_time: i64,
    pub response_time: i64,
}

impl ProcessMetrics {
    /// Measures one process from its span in the schedule.
    pub fn calculate(process: &ProcessDescriptor, span: ProcessSpan, basis: ArrivalBasis) -> Self {
        let ProcessSpan {
            first_start,
            completion_time,
        } = span;
        let arrival_time = match basis {
            ArrivalBasis::Declared => process.arrival_time,
            ArrivalBasis::Origin => 0,
        };
        let turnaround_time = completion_time - arrival_time;

        Self {
            process_id: process.id.clone(),
            arrival_time,
            burst_time: process.burst_time,
            first_start,
            completion_time,
            waiting_time: turnaround_time - process.burst_time,
            turnaround_time,
            response_time: first_start - arrival_time,
        }
    }
}

impl MetricsSummary {
    /// All-zero metrics (empty workload).
    pub fn zero() -> Self {
        Self::default()
    }

    /// Computes per-process metrics and their summary.
    ///
    /// Processes without schedule entries are skipped. Averages divide by
    /// the number of measured processes and are accumulated in `f64`; an
    /// empty workload yields `MetricsSummary::zero()`.
    pub fn calculate(
        schedule: &Schedule,
        processes: &[ProcessDescriptor],
        context_switches: usize,
        basis: ArrivalBasis,
    ) -> (Self, Vec<ProcessMetrics>) {
        let spans = schedule.spans();
        let per_process: Vec<ProcessMetrics> = processes
            .iter()
            .filter_map(|p| {
                let span = spans.get(p.id.as_str())?;
                Some(ProcessMetrics::calculate(p, *span, basis))
            })
            .collect();

        if per_process.is_empty() {
            return (Self::zero(), per_process);
        }

        let count = per_process.len() as f64;
        let total_waiting: f64 = per_process.iter().map(|m| m.waiting_time as f64).sum();
        let total_turnaround: f64 = per_process.iter().map(|m| m.turnaround_time as f64).sum();

        let summary = Self {
            avg_waiting_time: total_waiting / count,
            avg_turnaround_time: total_turnaround / count,
            context_switches,
            cpu_utilization: cpu_utilization(schedule.makespan()),
        };
        (summary, per_process)
    }
}

/// Utilization approximation `round(100 * end / (end + 5))`.
pub fn cpu_utilization(end_time: i64) -> u32 {
    if end_time <= 0 {
        return 0;
    }
    let end = end_time as f64;
    ((end / (end + UTILIZATION_OVERHEAD)) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Algorithm, ScheduleEntry};

    fn entry(id: &str, start: i64, duration: i64) -> ScheduleEntry {
        ScheduleEntry::new(id, id, start, duration, Algorithm::Fifo)
    }

    #[test]
    fn test_metrics_basic() {
        let processes = vec![
            ProcessDescriptor::new("P1", 5),
            ProcessDescriptor::new("P2", 3).with_arrival_time(1),
        ];
        let mut schedule = Schedule::new();
        schedule.push(entry("P1", 0, 5));
        schedule.push(entry("P2", 5, 3));

        let (summary, per_process) =
            MetricsSummary::calculate(&schedule, &processes, 1, ArrivalBasis::Declared);
        assert_eq!(per_process[0].waiting_time, 0);
        assert_eq!(per_process[1].waiting_time, 4);
        assert_eq!(per_process[0].turnaround_time, 5);
        assert_eq!(per_process[1].turnaround_time, 7);
        assert!((summary.avg_waiting_time - 2.0).abs() < 1e-10);
        assert!((summary.avg_turnaround_time - 6.0).abs() < 1e-10);
        assert_eq!(summary.context_switches, 1);
        assert_eq!(summary.cpu_utilization, 62);
    }

    #[test]
    fn test_sliced_process_measured_once() {
        let processes = vec![
            ProcessDescriptor::new("P1", 5),
            ProcessDescriptor::new("P2", 2),
        ];
        let mut schedule = Schedule::new();
        schedule.push(entry("P1", 0, 4));
        schedule.push(entry("P2", 4, 2));
        schedule.push(entry("P1", 6, 1));

        let spans = schedule.spans();
        let p1 = ProcessMetrics::calculate(&processes[0], spans["P1"], ArrivalBasis::Declared);
        assert_eq!(p1.first_start, 0);
        assert_eq!(p1.completion_time, 7);
        assert_eq!(p1.turnaround_time, 7);
        assert_eq!(p1.waiting_time, 2);
        assert_eq!(p1.response_time, 0);
    }

    #[test]
    fn test_origin_basis() {
        let process = ProcessDescriptor::new("P1", 2).with_arrival_time(3);
        let span = ProcessSpan {
            first_start: 0,
            completion_time: 2,
        };

        let m = ProcessMetrics::calculate(&process, span, ArrivalBasis::Origin);
        assert_eq!(m.arrival_time, 0);
        assert_eq!(m.turnaround_time, 2);
        assert_eq!(m.waiting_time, 0);
    }

    #[test]
    fn test_unscheduled_process_skipped() {
        let processes = vec![
            ProcessDescriptor::new("P1", 2),
            ProcessDescriptor::new("P9", 2),
        ];
        let mut schedule = Schedule::new();
        schedule.push(entry("P1", 0, 2));

        let (summary, per_process) =
            MetricsSummary::calculate(&schedule, &processes, 0, ArrivalBasis::Declared);
        assert_eq!(per_process.len(), 1);
        assert_eq!(per_process[0].process_id, "P1");
        assert!((summary.avg_turnaround_time - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_averages_near_time_limit() {
        let half = i64::MAX / 2;
        let processes = vec![
            ProcessDescriptor::new("P1", half),
            ProcessDescriptor::new("P2", half),
        ];
        let mut schedule = Schedule::new();
        schedule.push(entry("P1", 0, half));
        schedule.push(entry("P2", half, half));

        let (summary, per_process) =
            MetricsSummary::calculate(&schedule, &processes, 1, ArrivalBasis::Declared);
        assert_eq!(per_process[1].turnaround_time, 2 * half);
        assert!(summary.avg_turnaround_time.is_finite());
        assert!(summary.avg_turnaround_time > half as f64);
        assert_eq!(summary.cpu_utilization, 100);
    }

    #[test]
    fn test_metrics_empty() {
        let (summary, per_process) =
            MetricsSummary::calculate(&Schedule::new(), &[], 0, ArrivalBasis::Declared);
        assert_eq!(summary, MetricsSummary::zero());
        assert!(per_process.is_empty());
    }

    #[test]
    fn test_cpu_utilization_formula() {
        assert_eq!(cpu_utilization(0), 0);
        assert_eq!(cpu_utilization(5), 50);
        assert_eq!(cpu_utilization(8), 62);
        assert_eq!(cpu_utilization(9), 64);
        assert_eq!(cpu_utilization(15), 75);
        assert_eq!(cpu_utilization(1995), 100);
    }
}
