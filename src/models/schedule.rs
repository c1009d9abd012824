//! Schedule (Gantt timeline) model.
//!
//! A schedule is the ordered list of CPU allocation intervals produced by
//! one simulation run. Under Round-Robin a process may own several entries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Algorithm;

/// One CPU allocation interval `[start_time, start_time + duration)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Process that held the CPU.
    pub process_id: String,
    /// Display label of that process (denormalized for rendering).
    pub process_name: String,
    /// Interval start.
    pub start_time: i64,
    /// Interval length (> 0).
    pub duration: i64,
    /// Algorithm that produced this entry.
    pub algorithm: Algorithm,
}

/// First dispatch and completion of one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpan {
    /// Start of the process's first entry.
    pub first_start: i64,
    /// End of the process's last entry.
    pub completion_time: i64,
}

/// A single-CPU execution timeline.
///
/// Entries are kept in non-decreasing `start_time` order and never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Allocation intervals in execution order.
    pub entries: Vec<ScheduleEntry>,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(
        process_id: impl Into<String>,
        process_name: impl Into<String>,
        start_time: i64,
        duration: i64,
        algorithm: Algorithm,
    ) -> Self {
        Self {
            process_id: process_id.into(),
            process_name: process_name.into(),
            start_time,
            duration,
            algorithm,
        }
    }

    /// End of the interval (exclusive).
    #[inline]
    pub fn end_time(&self) -> i64 {
        self.start_time + self.duration
    }

    /// Tag of the producing algorithm (e.g., "RR").
    #[inline]
    pub fn algorithm_tag(&self) -> &'static str {
        self.algorithm.tag()
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest end time across all entries (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.end_time()).max().unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(|e| e.duration).sum()
    }

    /// All entries for a given process, in execution order.
    pub fn entries_for_process(&self, process_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_id == process_id)
            .collect()
    }

    /// Span of every scheduled process, keyed by process ID.
    ///
    /// Built in one pass over the entries.
    pub fn spans(&self) -> HashMap<&str, ProcessSpan> {
        let mut spans: HashMap<&str, ProcessSpan> = HashMap::new();
        for entry in &self.entries {
            spans
                .entry(entry.process_id.as_str())
                .and_modify(|span| {
                    span.completion_time = span.completion_time.max(entry.end_time());
                })
                .or_insert(ProcessSpan {
                    first_start: entry.start_time,
                    completion_time: entry.end_time(),
                });
        }
        spans
    }

    /// Whether entries are sorted by start and pairwise non-overlapping.
    pub fn is_well_formed(&self) -> bool {
        self.entries
            .windows(2)
            .all(|w| w[0].start_time <= w[1].start_time && w[0].end_time() <= w[1].start_time)
    }
}
