//! Error types for simulation requests.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the simulation entry points.
///
/// A failed call never produces a partial schedule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The request violates the input contract (see `validation`).
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    /// An algorithm selector string did not name a known discipline.
    #[error("unknown scheduling algorithm '{0}'")]
    UnknownAlgorithm(String),
}

/// Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

impl SimulationError {
    /// Validation errors carried by an `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SimulationError::InvalidInput(errors) => errors,
            SimulationError::UnknownAlgorithm(_) => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
