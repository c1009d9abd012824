//! Built-in dispatching rules.
//!
//! - **FIFO**: arrival time
//! - **SJF**: burst time
//! - **PRIORITY**: priority number
//!
//! # Score Convention
//! All rules return lower scores for processes dispatched first.

use super::{DispatchingRule, SortKey};

/// First-In-First-Out.
///
/// Dispatches processes in order of arrival.
#[derive(Debug, Clone, Copy)]
pub struct FirstCome;

impl DispatchingRule for FirstCome {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn sort_key(&self) -> SortKey {
        SortKey::ArrivalTime
    }

    fn description(&self) -> &'static str {
        "First-In-First-Out"
    }
}

/// Shortest Job First.
///
/// Dispatches processes with smaller burst first. The order is fixed before
/// the run starts; later arrivals do not reorder it.
#[derive(Debug, Clone, Copy)]
pub struct ShortestJob;

impl DispatchingRule for ShortestJob {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn sort_key(&self) -> SortKey {
        SortKey::BurstTime
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Static priority.
///
/// Lower priority number = dispatched first.
#[derive(Debug, Clone, Copy)]
pub struct LowestPriorityNumber;

impl DispatchingRule for LowestPriorityNumber {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Priority
    }

    fn description(&self) -> &'static str {
        "Priority (lower number = higher priority)"
    }
}
