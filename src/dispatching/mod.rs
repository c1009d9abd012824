//! Dispatching rules and rule engine for process ordering.
//!
//! The non-preemptive disciplines differ only in the key they sort the
//! process list by before running it to completion. Each key is a
//! `DispatchingRule`; the `RuleEngine` applies rules in sequence and keeps
//! input order on full ties (stable sort).
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine};
//! use u_cpusched::models::ProcessDescriptor;
//!
//! let processes = vec![
//!     ProcessDescriptor::new("P1", 5),
//!     ProcessDescriptor::new("P2", 3).with_arrival_time(1),
//! ];
//! let engine = RuleEngine::new().with_rule(rules::ShortestJob);
//! assert_eq!(engine.sort_indices(&processes), vec![1, 0]);
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::ProcessDescriptor;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// The process attribute a rule orders by.
///
/// Carried into the step trace so explanations name the criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// `arrival_time`, earliest first.
    ArrivalTime,
    /// `burst_time`, shortest first.
    BurstTime,
    /// `priority`, lowest number first.
    Priority,
}

impl SortKey {
    /// Reads the keyed attribute from a process.
    pub fn value(&self, process: &ProcessDescriptor) -> i64 {
        match self {
            SortKey::ArrivalTime => process.arrival_time,
            SortKey::BurstTime => process.burst_time,
            SortKey::Priority => i64::from(process.priority),
        }
    }
}

/// A dispatching rule that evaluates process order.
///
/// # Score Convention
/// **Lower score = dispatched earlier.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FIFO", "SJF").
    fn name(&self) -> &'static str;

    /// Attribute this rule orders by.
    fn sort_key(&self) -> SortKey;

    /// Evaluates the dispatch order score of a process.
    fn evaluate(&self, process: &ProcessDescriptor) -> RuleScore {
        self.sort_key().value(process)
    }

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
