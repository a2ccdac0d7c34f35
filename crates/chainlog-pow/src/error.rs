//! Error types for mining and staging.

use chainlog_core::{CapacityExceeded, ValidationError};
use thiserror::Error;

/// The mining loop stopped before finding a qualifying digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PowError {
    #[error("mining cancelled after {attempts} attempts")]
    Cancelled { attempts: u64 },

    #[error("attempt limit of {limit} exhausted without a qualifying digest")]
    AttemptsExhausted { limit: u64 },
}

/// Errors from the pending stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PendingError {
    #[error(transparent)]
    BatchFull(#[from] CapacityExceeded),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no transactions staged")]
    Empty,
}
