//! Error types for chainlog-core.
//!
//! Integrity violations are deliberately absent here: a broken chain is
//! a query result (`Chain::verify` returning false), not a fault.

use thiserror::Error;

/// A batch block is already at its fixed transaction capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("batch is full: capacity is {capacity} transactions")]
pub struct CapacityExceeded {
    pub capacity: usize,
}

/// A record field failed boundary validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} exceeds {limit} characters (got {actual})")]
    FieldTooLong {
        field: &'static str,
        limit: usize,
        actual: usize,
    },

    #[error("job id must not be empty")]
    EmptyJobId,
}

/// Errors from id-addressed chain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("no block with job id {0:?}")]
    JobNotFound(String),
}
