//! Reproducible workload generation.
//!
//! Builds process lists for demos, benchmarks and invariant tests. Ids
//! follow the `proc_N` convention (1-based) and arrivals are spaced evenly
//! by default, two time units apart.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{ProcessDescriptor, DEFAULT_PRIORITY};

/// Burst assigned to processes created without an explicit one.
pub const DEFAULT_BURST: i64 = 5;

/// Arrival spacing between consecutive processes.
pub const DEFAULT_ARRIVAL_SPACING: i64 = 2;

/// Seeded random workload generator.
///
/// The same seed and settings always produce the same processes.
///
/// # Example
///
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let a = WorkloadGenerator::new(7).with_count(5).generate();
/// let b = WorkloadGenerator::new(7).with_count(5).generate();
/// assert_eq!(a, b);
/// assert_eq!(a[0].id, "proc_1");
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    count: usize,
    burst_range: (i64, i64),
    priority_range: (i32, i32),
    max_arrival_gap: i64,
}

impl WorkloadGenerator {
    /// Creates a generator: 5 processes, bursts 1..=10, priorities 1..=10,
    /// arrival gaps 0..=`DEFAULT_ARRIVAL_SPACING`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            count: 5,
            burst_range: (1, 10),
            priority_range: (1, 10),
            max_arrival_gap: DEFAULT_ARRIVAL_SPACING,
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the inclusive burst range. Bounds are clamped to at least 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(1);
        self.burst_range = (min, max.max(min));
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max.max(min));
        self
    }

    /// Sets the largest gap between consecutive arrivals (0 = all at t=0).
    pub fn with_max_arrival_gap(mut self, gap: i64) -> Self {
        self.max_arrival_gap = gap.max(0);
        self
    }

    /// Generates the workload.
    pub fn generate(&self) -> Vec<ProcessDescriptor> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut arrival = 0;

        (1..=self.count)
            .map(|n| {
                let burst = rng.random_range(self.burst_range.0..=self.burst_range.1);
                let priority = rng.random_range(self.priority_range.0..=self.priority_range.1);
                let process = ProcessDescriptor::new(format!("proc_{n}"), burst)
                    .with_name(format!("P{n}"))
                    .with_arrival_time(arrival)
                    .with_priority(priority);
                arrival += rng.random_range(0..=self.max_arrival_gap);
                process
            })
            .collect()
    }

    /// Processes named `names`, with default burst and priority, arriving
    /// `DEFAULT_ARRIVAL_SPACING` apart in the given order.
    pub fn sequential<S: AsRef<str>>(names: &[S]) -> Vec<ProcessDescriptor> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                ProcessDescriptor::new(format!("proc_{}", i + 1), DEFAULT_BURST)
                    .with_name(name.as_ref())
                    .with_arrival_time(i as i64 * DEFAULT_ARRIVAL_SPACING)
                    .with_priority(DEFAULT_PRIORITY)
            })
            .collect()
    }
}
