//! Process descriptor model.
//!
//! A process descriptor is the read-only input record the engine schedules:
//! when the process becomes eligible, how much CPU it needs, and its priority.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).
//! The caller defines what one unit means (the reference UI labels them ms).

use serde::{Deserialize, Serialize};

/// Priority assigned when the caller does not specify one.
pub const DEFAULT_PRIORITY: i32 = 5;

/// A process to be scheduled on the simulated CPU.
///
/// Descriptors are never mutated by the engine. Preemptive runs work on
/// their own per-run copy of the remaining burst.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDescriptor {
    /// Unique process identifier.
    pub id: String,
    /// Display label. Never used for ordering.
    pub name: String,
    /// Time unit at which the process becomes eligible to run (>= 0).
    pub arrival_time: i64,
    /// Total CPU time required (> 0).
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
}

impl ProcessDescriptor {
    /// Creates a process arriving at t=0 with the given burst.
    ///
    /// The name defaults to the id.
    pub fn new(id: impl Into<String>, burst_time: i64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            arrival_time: 0,
            burst_time,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst_time(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
