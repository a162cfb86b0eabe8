//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised when data crossing into the domain cannot be turned into a
/// valid value object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Difficulty level out of range: {0} (expected 1, 2 or 3)")]
    InvalidDifficultyLevel(i64),

    #[error("Unknown difficulty label: {0:?}")]
    InvalidDifficultyLabel(String),

    #[error("Invalid problem id: {0:?}")]
    InvalidProblemId(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),
}
