//! Rule engine for process ordering.
//!
//! Composes dispatching rules into a lexicographic comparison: the next
//! rule is consulted only when all previous rules tie. Full ties keep the
//! caller's input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, SortKey};
use crate::models::{Algorithm, ProcessDescriptor};

/// A composable rule engine for process ordering.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::LowestPriorityNumber)
///     .with_rule(rules::FirstCome);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// The engine a non-preemptive algorithm sorts with.
    ///
    /// Returns `None` for Round-Robin, which orders by queue position.
    pub fn for_algorithm(algorithm: Algorithm) -> Option<Self> {
        match algorithm {
            Algorithm::Fifo => Some(Self::new().with_rule(rules::FirstCome)),
            Algorithm::Sjf => Some(Self::new().with_rule(rules::ShortestJob)),
            Algorithm::Priority => Some(Self::new().with_rule(rules::LowestPriorityNumber)),
            Algorithm::RoundRobin => None,
        }
    }

    /// Adds a rule after the existing ones.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Attribute of the first rule, if any.
    pub fn primary_key(&self) -> Option<SortKey> {
        self.rules.first().map(|r| r.sort_key())
    }

    /// Sorts processes by dispatch order (first dispatched first).
    ///
    /// The sort is stable. Returns indices into `processes`, which is left
    /// untouched.
    pub fn sort_indices(&self, processes: &[ProcessDescriptor]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    fn compare(&self, a: &ProcessDescriptor, b: &ProcessDescriptor) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a).cmp(&rule.evaluate(b)) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
