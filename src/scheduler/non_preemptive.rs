//! Run-to-completion runner shared by FIFO, SJF and Priority.
//!
//! # Algorithm
//!
//! 1. Sort the process indices once with the algorithm's rule engine
//!    (stable, ties keep input order).
//! 2. Dispatch each in that order at `max(current_time, arrival_time)`.
//! 3. Run it for its whole burst and advance `current_time`.
//!
//! The order is fixed up front: a later arrival with a better key does not
//! overtake a process already ahead of it.

use tracing::debug;

use super::engine::{Run, RunParams};
use crate::dispatching::RuleEngine;
use crate::models::{Algorithm, ProcessDescriptor, Schedule, ScheduleEntry};
use crate::trace::{Trace, TraceKind};

pub(crate) fn run_fifo(processes: &[ProcessDescriptor], _params: &RunParams) -> Run {
    run_ordered(processes, Algorithm::Fifo)
}

pub(crate) fn run_sjf(processes: &[ProcessDescriptor], _params: &RunParams) -> Run {
    run_ordered(processes, Algorithm::Sjf)
}

pub(crate) fn run_priority(processes: &[ProcessDescriptor], _params: &RunParams) -> Run {
    run_ordered(processes, Algorithm::Priority)
}

fn run_ordered(processes: &[ProcessDescriptor], algorithm: Algorithm) -> Run {
    let mut run = Run::empty();
    let Some(engine) = RuleEngine::for_algorithm(algorithm) else {
        return run;
    };
    let Some(key) = engine.primary_key() else {
        return run;
    };
    if processes.is_empty() {
        return run;
    }

    let order = engine.sort_indices(processes);
    let mut schedule = Schedule::new();
    let mut trace = Trace::new();
    let mut current_time: i64 = 0;

    trace.record(current_time, TraceKind::Sorted { key });

    for (pos, &idx) in order.iter().enumerate() {
        let process = &processes[idx];
        let start = current_time.max(process.arrival_time);
        let duration = process.burst_time;

        trace.record(
            current_time,
            TraceKind::Considered {
                process: process.name.clone(),
                key,
                value: key.value(process),
            },
        );
        trace.record(
            start,
            TraceKind::Started {
                process: process.name.clone(),
            },
        );
        trace.record(
            start,
            TraceKind::Ran {
                process: process.name.clone(),
                duration,
            },
        );
        debug!(process = %process.id, start, duration, algorithm = %algorithm, "dispatch");

        schedule.push(ScheduleEntry::new(
            &process.id,
            &process.name,
            start,
            duration,
            algorithm,
        ));
        current_time = start + duration;

        trace.record(
            current_time,
            TraceKind::Completed {
                process: process.name.clone(),
            },
        );

        if let Some(&next_idx) = order.get(pos + 1) {
            let next = &processes[next_idx];
            trace.record(
                current_time,
                TraceKind::NextUp {
                    process: next.name.clone(),
                    key,
                    value: key.value(next),
                },
            );
        }
    }

    run.context_switches = processes.len() - 1;
    run.schedule = schedule;
    run.trace = trace;
    run
}
