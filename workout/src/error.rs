use thiserror::Error;

use crate::WorkoutKind;

#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("unrecognized workout type: {0}")]
    UnrecognizedWorkoutType(String),
    #[error("{kind} expects {expected} parameters, got {found}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        found: usize,
    },
    /// Field which counts discrete things got fractional or negative value
    #[error("{field} must be a whole non-negative number, got {value}")]
    NotACount { field: &'static str, value: f64 },
    #[error("{kind} has zero duration, speed is undefined")]
    DivisionByZero { kind: WorkoutKind },
    #[error("invalid number `{value}` in record {record}")]
    InvalidNumber { record: u64, value: String },
    #[error("record {0} has no workout code")]
    EmptyRecord(u64),
    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
