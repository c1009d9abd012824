//! Single-CPU scheduling engine and metrics.
//!
//! Simulates a process list under one discipline and returns the Gantt
//! schedule, aggregate metrics and per-process timing.
//!
//! # Algorithms
//!
//! | Algorithm | Order | Preemptive |
//! |-----------|-------|------------|
//! | FIFO | arrival time | no |
//! | SJF | burst time, fixed before the run | no |
//! | Round-Robin | ready queue, fixed quantum | yes |
//! | Priority | priority number, lower first | no |
//!
//! All share one clock rule: a dispatch starts at
//! `max(current_time, arrival_time)` and advances `current_time` by the
//! executed duration. Round-Robin under `ArrivalPolicy::Ignore` (the
//! default) treats every arrival time as 0.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod config;
mod engine;
mod metrics;
mod non_preemptive;
mod round_robin;

pub use config::{ArrivalPolicy, SimulationConfig, SimulationRequest, DEFAULT_QUANTUM};
pub use engine::{simulate, simulate_request, step_trace, SimulationResult, Simulator};
pub use metrics::{cpu_utilization, ArrivalBasis, MetricsSummary, ProcessMetrics};
