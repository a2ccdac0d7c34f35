//! Error types for the Ledger facade.

use chainlog_core::{ChainError, ValidationError};
use chainlog_pow::{PendingError, PowError};
use thiserror::Error;

/// Errors surfaced by [`Ledger`](crate::Ledger) operations.
///
/// All variants are recoverable at the boundary; the ledger never
/// terminates the process. A broken chain is not an error at all — it
/// is the `false` answer of [`Ledger::verify`](crate::Ledger::verify).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A record field failed boundary validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An id-addressed operation found no matching block.
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// Staging rejected a transaction.
    #[error("staging error: {0}")]
    Pending(#[from] PendingError),

    /// Mining stopped before finding a qualifying digest.
    #[error("mining error: {0}")]
    Pow(#[from] PowError),

    /// Mining was requested with nothing staged.
    #[error("no transactions staged for mining")]
    NothingStaged,
}

/// Result type for Ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
