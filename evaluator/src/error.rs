//! Evaluator error types

use shared::SharedError;
use thiserror::Error;

/// Result type for evaluator operations
pub type EvaluatorResult<T> = Result<T, EvaluatorError>;

#[derive(Error, Debug)]
pub enum EvaluatorError {
    /// Handover and teleport require two distinct records; a self-transfer
    /// has no defined meaning and is rejected rather than guessed at.
    #[error("Source and destination are the same record: index {index}")]
    SameRecord { index: usize },

    #[error("Record index {index} out of range for mesh of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] SharedError),
}
