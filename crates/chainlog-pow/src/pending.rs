//! The pending stage: transactions accumulating toward the next block.
//!
//! The stage holds at most one block's worth of transactions. Once the
//! batch capacity is reached further staging is rejected; finalizing an
//! empty stage is likewise rejected, before any mining work starts.

use chainlog_core::{validate_transaction_details, Batch, Transaction};

use crate::error::PendingError;

/// Accumulates transactions for the next block to be mined.
#[derive(Debug, Clone, Default)]
pub struct PendingStage {
    batch: Batch,
}

impl PendingStage {
    /// An empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a stage from an already-validated batch.
    ///
    /// Used to put transactions back when mining is cancelled, so a
    /// retry does not lose staged work.
    pub fn from_batch(batch: Batch) -> Self {
        Self { batch }
    }

    /// Validate and stage one transaction, computing its signature
    /// digest. Rejects with [`PendingError::BatchFull`] at capacity.
    pub fn stage(&mut self, id: u32, details: &str) -> Result<(), PendingError> {
        validate_transaction_details(details)?;
        self.batch.push(Transaction::new(id, details))?;
        Ok(())
    }

    /// The staged transactions in staging order.
    pub fn transactions(&self) -> &[Transaction] {
        self.batch.transactions()
    }

    pub fn len(&self) -> usize {
        self.batch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }

    /// Drain the staged transactions into a [`Batch`], leaving the
    /// stage empty for the next block. An empty stage is a caller
    /// error, reported before any block is built.
    pub fn take_batch(&mut self) -> Result<Batch, PendingError> {
        if self.batch.is_empty() {
            return Err(PendingError::Empty);
        }
        Ok(std::mem::take(&mut self.batch))
    }
}
