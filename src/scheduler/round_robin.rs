//! Preemptive Round-Robin runner.
//!
//! # Algorithm
//!
//! 1. Seed a FIFO ready queue with per-run working copies carrying
//!    `remaining = burst_time`.
//! 2. Dequeue the head and run it for `min(remaining, quantum)`.
//! 3. If work remains, requeue it at the tail (one context switch),
//!    otherwise it is complete.
//! 4. Stop when the queue is empty.
//!
//! Under `ArrivalPolicy::Ignore` every process is queued at t=0 in input
//! order. Under `ArrivalPolicy::Gate` processes are admitted in arrival
//! order once `arrival_time <= current_time`, and the CPU idles forward to
//! the next arrival when the queue runs dry.
//!
//! # Complexity
//! O(sum(burst) / quantum + n) slices.

use std::collections::VecDeque;

use tracing::debug;

use super::engine::{Run, RunParams};
use super::ArrivalPolicy;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Algorithm, ProcessDescriptor, Schedule, ScheduleEntry};
use crate::trace::{Trace, TraceKind};

/// Per-run working copy of a process.
#[derive(Debug, Clone, Copy)]
struct Working {
    index: usize,
    remaining: i64,
}

pub(crate) fn run_round_robin(processes: &[ProcessDescriptor], params: &RunParams) -> Run {
    let mut run = Run::empty();
    if processes.is_empty() {
        return run;
    }

    let quantum = params.quantum;
    let mut schedule = Schedule::new();
    let mut trace = Trace::new();
    let mut current_time: i64 = 0;
    let mut context_switches = 0;

    let mut pending: VecDeque<usize> = match params.arrivals {
        ArrivalPolicy::Ignore => VecDeque::new(),
        ArrivalPolicy::Gate => RuleEngine::new()
            .with_rule(rules::FirstCome)
            .sort_indices(processes)
            .into(),
    };
    let mut queue: VecDeque<Working> = match params.arrivals {
        ArrivalPolicy::Ignore => (0..processes.len())
            .map(|index| Working {
                index,
                remaining: processes[index].burst_time,
            })
            .collect(),
        ArrivalPolicy::Gate => VecDeque::new(),
    };
    admit(processes, &mut pending, &mut queue, current_time, None);

    let names = |queue: &VecDeque<Working>| -> Vec<String> {
        queue
            .iter()
            .map(|w| processes[w.index].name.clone())
            .collect()
    };

    trace.record(current_time, TraceKind::QuantumSet { quantum });
    trace.record(
        current_time,
        TraceKind::InitialQueue {
            queue: names(&queue),
        },
    );

    loop {
        if queue.is_empty() {
            let Some(&next) = pending.front() else {
                break;
            };
            current_time = current_time.max(processes[next].arrival_time);
            trace.record(current_time, TraceKind::Idle);
            admit(processes, &mut pending, &mut queue, current_time, Some(&mut trace));
        }
        let Some(mut head) = queue.pop_front() else {
            break;
        };
        let process = &processes[head.index];

        trace.record(
            current_time,
            TraceKind::Selected {
                process: process.name.clone(),
                remaining: head.remaining,
            },
        );

        let start = current_time;
        let duration = head.remaining.min(quantum);
        schedule.push(ScheduleEntry::new(
            &process.id,
            &process.name,
            start,
            duration,
            Algorithm::RoundRobin,
        ));
        trace.record(
            start,
            TraceKind::Executed {
                process: process.name.clone(),
                duration,
            },
        );

        head.remaining -= duration;
        current_time += duration;
        debug!(
            process = %process.id,
            start,
            duration,
            remaining = head.remaining,
            "slice"
        );

        admit(processes, &mut pending, &mut queue, current_time, Some(&mut trace));

        if head.remaining > 0 {
            trace.record(
                current_time,
                TraceKind::Requeued {
                    process: process.name.clone(),
                    remaining: head.remaining,
                },
            );
            queue.push_back(head);
            context_switches += 1;
        } else {
            trace.record(
                current_time,
                TraceKind::Finished {
                    process: process.name.clone(),
                },
            );
        }

        trace.record(
            current_time,
            TraceKind::CurrentQueue {
                queue: names(&queue),
            },
        );
    }

    run.context_switches = context_switches;
    run.schedule = schedule;
    run.trace = trace;
    run
}

/// Moves every pending process that has arrived by `now` to the queue tail.
fn admit(
    processes: &[ProcessDescriptor],
    pending: &mut VecDeque<usize>,
    queue: &mut VecDeque<Working>,
    now: i64,
    mut trace: Option<&mut Trace>,
) {
    while let Some(&index) = pending.front() {
        let process = &processes[index];
        if process.arrival_time > now {
            break;
        }
        pending.pop_front();
        queue.push_back(Working {
            index,
            remaining: process.burst_time,
        });
        if let Some(trace) = trace.as_deref_mut() {
            trace.record(
                process.arrival_time,
                TraceKind::Arrived {
                    process: process.name.clone(),
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(quantum: i64, arrivals: ArrivalPolicy) -> RunParams {
        RunParams { quantum, arrivals }
    }

    fn slices(run: &Run) -> Vec<(String, i64, i64)> {
        run.schedule
            .entries
            .iter()
            .map(|e| (e.process_id.clone(), e.start_time, e.duration))
            .collect()
    }

    fn slice(id: &str, start: i64, duration: i64) -> (String, i64, i64) {
        (id.to_string(), start, duration)
    }

    #[test]
    fn test_single_process_split() {
        let processes = vec![ProcessDescriptor::new("P1", 5)];
        let run = run_round_robin(&processes, &params(4, ArrivalPolicy::Ignore));
        assert_eq!(slices(&run), vec![slice("P1", 0, 4), slice("P1", 4, 1)]);
        assert_eq!(run.context_switches, 1);
    }

    #[test]
    fn test_interleaving() {
        let processes = vec![
            ProcessDescriptor::new("P1", 5),
            ProcessDescriptor::new("P2", 3),
            ProcessDescriptor::new("P3", 6),
        ];
        let run = run_round_robin(&processes, &params(2, ArrivalPolicy::Ignore));
        assert_eq!(
            slices(&run),
            vec![
                slice("P1", 0, 2),
                slice("P2", 2, 2),
                slice("P3", 4, 2),
                slice("P1", 6, 2),
                slice("P2", 8, 1),
                slice("P3", 9, 2),
                slice("P1", 11, 1),
                slice("P3", 12, 2),
            ]
        );
        assert_eq!(run.context_switches, run.schedule.len() - processes.len());
    }

    #[test]
    fn test_ignore_policy_runs_late_arrivals_immediately() {
        let processes = vec![
            ProcessDescriptor::new("P1", 2).with_arrival_time(10),
            ProcessDescriptor::new("P2", 2),
        ];
        let run = run_round_robin(&processes, &params(4, ArrivalPolicy::Ignore));
        assert_eq!(slices(&run), vec![slice("P1", 0, 2), slice("P2", 2, 2)]);
    }

    #[test]
    fn test_gate_policy_waits_for_arrival() {
        let processes = vec![
            ProcessDescriptor::new("P1", 2).with_arrival_time(10),
            ProcessDescriptor::new("P2", 2),
        ];
        let run = run_round_robin(&processes, &params(4, ArrivalPolicy::Gate));
        assert_eq!(slices(&run), vec![slice("P2", 0, 2), slice("P1", 10, 2)]);
        assert_eq!(run.context_switches, 0);
        assert!(run.schedule.is_well_formed());
    }

    #[test]
    fn test_gate_policy_arrival_queued_before_preempted() {
        let processes = vec![
            ProcessDescriptor::new("P1", 6),
            ProcessDescriptor::new("P2", 2).with_arrival_time(3),
        ];
        let run = run_round_robin(&processes, &params(4, ArrivalPolicy::Gate));
        assert_eq!(
            slices(&run),
            vec![slice("P1", 0, 4), slice("P2", 4, 2), slice("P1", 6, 2)]
        );
        assert_eq!(run.context_switches, 1);
    }

    #[test]
    fn test_trace_steps() {
        let processes = vec![
            ProcessDescriptor::new("P1", 5).with_name("A"),
            ProcessDescriptor::new("P2", 2).with_name("B"),
        ];
        let run = run_round_robin(&processes, &params(4, ArrivalPolicy::Ignore));
        let steps: Vec<String> = run.trace.events().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            steps,
            vec![
                "Initialize Round Robin with time quantum = 4ms",
                "Initial queue: A, B",
                "Selected process: A with 5ms remaining",
                "Process A executes for 4ms",
                "Process A still has 1ms remaining, added back to queue",
                "Current queue: B, A",
                "Selected process: B with 2ms remaining",
                "Process B executes for 2ms",
                "Process B completed at time 6",
                "Current queue: A",
                "Selected process: A with 1ms remaining",
                "Process A executes for 1ms",
                "Process A completed at time 7",
                "Current queue: ",
            ]
        );
    }

    #[test]
    fn test_gate_trace_records_idle_and_arrivals() {
        let processes = vec![ProcessDescriptor::new("P1", 1).with_arrival_time(3)];
        let run = run_round_robin(&processes, &params(4, ArrivalPolicy::Gate));
        let steps: Vec<String> = run.trace.events().iter().map(|e| e.to_string()).collect();
        assert_eq!(steps[1], "Initial queue: ");
        assert_eq!(steps[2], "CPU idle until time 3");
        assert_eq!(steps[3], "Process P1 arrives at time 3, added to queue");
    }

    #[test]
    fn test_input_untouched() {
        let processes = vec![ProcessDescriptor::new("P1", 9)];
        let before = processes.clone();
        run_round_robin(&processes, &params(2, ArrivalPolicy::Ignore));
        assert_eq!(processes, before);
    }

    #[test]
    fn test_empty() {
        let run = run_round_robin(&[], &params(4, ArrivalPolicy::Ignore));
        assert!(run.schedule.is_empty());
        assert_eq!(run.context_switches, 0);
    }
}
