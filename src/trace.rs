//! Step-trace recording for simulation runs.
//!
//! Every ordering decision the engine makes (sort criterion, dispatch,
//! completion, requeue) is recorded as a `TraceEvent` by the same runner
//! that builds the schedule, so the explanation always matches the result.
//! Events render to the human-readable sentences an explanation panel shows.

use std::fmt;

use crate::dispatching::SortKey;
use crate::models::Algorithm;

/// A single recorded decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    /// Simulated time at which the decision was taken.
    pub time: i64,
    /// The decision.
    pub kind: TraceKind,
}

/// The type of decision recorded.
///
/// Process fields hold display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceKind {
    /// The process list was sorted by `key`.
    Sorted { key: SortKey },
    /// A process was taken from the sorted list; `value` is its sort key.
    Considered {
        process: String,
        key: SortKey,
        value: i64,
    },
    /// A process was given the CPU.
    Started { process: String },
    /// A process ran uninterrupted for `duration`.
    Ran { process: String, duration: i64 },
    /// A non-preemptive process finished its burst.
    Completed { process: String },
    /// The process that will be considered next.
    NextUp {
        process: String,
        key: SortKey,
        value: i64,
    },
    /// Round-Robin started with this quantum.
    QuantumSet { quantum: i64 },
    /// Ready queue contents before the first dispatch.
    InitialQueue { queue: Vec<String> },
    /// A process arrived and joined the tail of the ready queue.
    Arrived { process: String },
    /// The ready queue was empty; the CPU idles until the event time.
    Idle,
    /// The head of the ready queue was dequeued.
    Selected { process: String, remaining: i64 },
    /// A process executed one slice.
    Executed { process: String, duration: i64 },
    /// A process finished its burst in its last slice.
    Finished { process: String },
    /// A process exhausted its slice and went back to the tail.
    Requeued { process: String, remaining: i64 },
    /// Ready queue contents after a slice.
    CurrentQueue { queue: Vec<String> },
}

/// A complete run trace, in decision order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, time: i64, kind: TraceKind) {
        self.events.push(TraceEvent { time, kind });
    }

    /// All events in decision order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Step trace of one algorithm over one workload.
///
/// `steps()` renders lazily and can be called any number of times; each
/// call replays the same finite sequence from the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTrace {
    algorithm: Algorithm,
    trace: Trace,
}

impl StepTrace {
    pub(crate) fn new(algorithm: Algorithm, trace: Trace) -> Self {
        Self { algorithm, trace }
    }

    /// The traced algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The underlying events.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Human-readable steps, one per event.
    pub fn steps(&self) -> impl Iterator<Item = String> + '_ {
        self.trace.events.iter().map(|e| e.to_string())
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Whether there are no steps (empty workload).
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.time;
        match &self.kind {
            TraceKind::Sorted { key } => match key {
                SortKey::ArrivalTime => write!(f, "Sort processes by arrival time"),
                SortKey::BurstTime => write!(f, "Sort processes by burst time (shortest first)"),
                SortKey::Priority => write!(
                    f,
                    "Sort processes by priority (lower number = higher priority)"
                ),
            },
            TraceKind::Considered {
                process,
                key,
                value,
            } => match key {
                SortKey::ArrivalTime => write!(f, "Process {process} arrives at time {value}"),
                SortKey::BurstTime => write!(f, "Process {process} has burst time {value}ms"),
                SortKey::Priority => write!(f, "Process {process} has priority {value}"),
            },
            TraceKind::Started { process } => {
                write!(f, "Process {process} starts execution at time {t}")
            }
            TraceKind::Ran { process, duration } => {
                write!(f, "Process {process} runs for {duration}ms")
            }
            TraceKind::Completed { process } => {
                write!(f, "Process {process} completes at time {t}")
            }
            TraceKind::NextUp {
                process,
                key,
                value,
            } => match key {
                SortKey::ArrivalTime => write!(f, "Next process in queue: {process}"),
                SortKey::BurstTime => {
                    write!(f, "Next shortest job: {process} with burst time {value}ms")
                }
                SortKey::Priority => {
                    write!(f, "Next highest priority: {process} with priority {value}")
                }
            },
            TraceKind::QuantumSet { quantum } => {
                write!(f, "Initialize Round Robin with time quantum = {quantum}ms")
            }
            TraceKind::InitialQueue { queue } => write!(f, "Initial queue: {}", queue.join(", ")),
            TraceKind::Arrived { process } => {
                write!(f, "Process {process} arrives at time {t}, added to queue")
            }
            TraceKind::Idle => write!(f, "CPU idle until time {t}"),
            TraceKind::Selected { process, remaining } => {
                write!(f, "Selected process: {process} with {remaining}ms remaining")
            }
            TraceKind::Executed { process, duration } => {
                write!(f, "Process {process} executes for {duration}ms")
            }
            TraceKind::Finished { process } => {
                write!(f, "Process {process} completed at time {t}")
            }
            TraceKind::Requeued { process, remaining } => write!(
                f,
                "Process {process} still has {remaining}ms remaining, added back to queue"
            ),
            TraceKind::CurrentQueue { queue } => write!(f, "Current queue: {}", queue.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(time: i64, kind: TraceKind) -> String {
        TraceEvent { time, kind }.to_string()
    }

    #[test]
    fn test_sort_sentences() {
        assert_eq!(
            render(0, TraceKind::Sorted { key: SortKey::ArrivalTime }),
            "Sort processes by arrival time"
        );
        assert_eq!(
            render(0, TraceKind::Sorted { key: SortKey::BurstTime }),
            "Sort processes by burst time (shortest first)"
        );
    }

    #[test]
    fn test_dispatch_sentences() {
        let p = || "editor".to_string();
        assert_eq!(
            render(3, TraceKind::Started { process: p() }),
            "Process editor starts execution at time 3"
        );
        assert_eq!(
            render(3, TraceKind::Ran { process: p(), duration: 5 }),
            "Process editor runs for 5ms"
        );
        assert_eq!(
            render(8, TraceKind::Completed { process: p() }),
            "Process editor completes at time 8"
        );
        assert_eq!(
            render(
                8,
                TraceKind::NextUp {
                    process: p(),
                    key: SortKey::Priority,
                    value: 2
                }
            ),
            "Next highest priority: editor with priority 2"
        );
    }

    #[test]
    fn test_round_robin_sentences() {
        assert_eq!(
            render(0, TraceKind::QuantumSet { quantum: 4 }),
            "Initialize Round Robin with time quantum = 4ms"
        );
        assert_eq!(
            render(
                0,
                TraceKind::InitialQueue {
                    queue: vec!["A".into(), "B".into()]
                }
            ),
            "Initial queue: A, B"
        );
        assert_eq!(
            render(
                4,
                TraceKind::Requeued {
                    process: "A".into(),
                    remaining: 1
                }
            ),
            "Process A still has 1ms remaining, added back to queue"
        );
        assert_eq!(
            render(4, TraceKind::CurrentQueue { queue: vec![] }),
            "Current queue: "
        );
        assert_eq!(
            render(6, TraceKind::Finished { process: "B".into() }),
            "Process B completed at time 6"
        );
        assert_eq!(render(6, TraceKind::Idle), "CPU idle until time 6");
    }

    #[test]
    fn test_steps_restartable() {
        let mut trace = Trace::new();
        trace.record(0, TraceKind::Sorted { key: SortKey::Priority });
        trace.record(0, TraceKind::Started { process: "A".into() });
        let steps = StepTrace::new(Algorithm::Priority, trace);

        let first: Vec<String> = steps.steps().collect();
        let second: Vec<String> = steps.steps().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps.algorithm(), Algorithm::Priority);
    }
}
