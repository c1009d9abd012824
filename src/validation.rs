//! Input validation for simulation requests.
//!
//! Checks the process list and quantum before any scheduling happens.
//! Detects:
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate process IDs
//! - Workloads whose timeline would exceed `i64`
//! - Non-positive Round-Robin quantum
//!
//! All problems are collected so the caller can report them at once.

use crate::models::ProcessDescriptor;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Two processes share the same ID.
    DuplicateId,
    /// Round-Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Latest arrival plus total burst does not fit in an `i64`.
    HorizonOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. Every burst time is positive
/// 2. Every arrival time is non-negative
/// 3. No duplicate process IDs
/// 4. `max(arrival) + sum(burst)` fits in an `i64`
///
/// Every simulated time is bounded by check 4, so a list that passes can
/// be scheduled without overflow. An empty list is valid.
pub fn validate_processes(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst time {}", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival plus total burst time exceeds the representable time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any time a run can reach, `None` on overflow.
fn horizon(processes: &[ProcessDescriptor]) -> Option<i64> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)))
}

/// Validates a Round-Robin quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Round-Robin quantum must be positive, got {quantum}"),
        )])
    }
}
