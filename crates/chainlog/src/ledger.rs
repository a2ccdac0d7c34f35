//! The Ledger: unified boundary API over the chain, the pending stage,
//! and the miner.
//!
//! A `Ledger` is the single owned store object a CLI or UI layer holds;
//! there is no hidden global. Every operation runs synchronously on the
//! caller's thread, and only mining is potentially long-running (it
//! takes a [`CancelFlag`] for that reason).

use chainlog_core::{
    now_secs, validate_job, validate_job_update, Block, Chain, Job, JobUpdate, Record,
};
use chainlog_pow::{CancelFlag, Miner, MinerConfig, PendingStage};
use tracing::{debug, info, warn};

use crate::error::{LedgerError, Result};

/// Configuration for the Ledger.
#[derive(Debug, Clone, Default)]
pub struct LedgerConfig {
    /// Mining parameters for batch blocks.
    pub miner: MinerConfig,
}

/// A tamper-evident, hash-chained record ledger.
///
/// Merges the two record shapes over one chain: job postings appended
/// directly, and transaction batches staged and sealed by proof of
/// work. Modify and delete deliberately break downstream hash links;
/// [`Ledger::verify`] is the tamper detector, by design.
#[derive(Debug, Default)]
pub struct Ledger {
    chain: Chain,
    pending: PendingStage,
    miner: Miner,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            chain: Chain::new(),
            pending: PendingStage::new(),
            miner: Miner::new(config.miner),
        }
    }

    /// Read access to the underlying chain.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    // ─────────────────────────────────────────────────────────────────
    // Job operations
    // ─────────────────────────────────────────────────────────────────

    /// Validate a job and append it as a new sealed block.
    pub fn add_job(&mut self, job: Job) -> Result<&Block> {
        validate_job(&job)?;
        let block = self.chain.append(Record::Job(job));
        info!(index = block.index, hash = %block.hash, "job appended");
        Ok(block)
    }

    /// All blocks in chain order.
    pub fn list(&self) -> &[Block] {
        self.chain.blocks()
    }

    /// Whether every hash link in the chain holds.
    pub fn verify(&self) -> bool {
        let ok = self.chain.verify();
        if !ok {
            warn!(
                broken_at = ?self.chain.first_broken_link(),
                "chain integrity check failed"
            );
        }
        ok
    }

    /// Blocks whose record contains `keyword`, in chain order.
    pub fn search(&self, keyword: &str) -> Vec<&Block> {
        self.chain.search(keyword)
    }

    /// Update the first job with the given id and reseal its block.
    ///
    /// Leaves downstream links dangling; a subsequent [`Ledger::verify`]
    /// reports the chain as broken unless the block was the tail.
    pub fn modify_job(&mut self, id: &str, update: &JobUpdate) -> Result<()> {
        validate_job_update(update)?;
        self.chain.modify(id, update)?;
        info!(id, "job modified; downstream links now stale");
        Ok(())
    }

    /// Remove the first job with the given id without touching any
    /// stored digest.
    pub fn delete_job(&mut self, id: &str) -> Result<()> {
        let removed = self.chain.delete(id)?;
        info!(id, index = removed.index, "job deleted; successor link now dangling");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────
    // Proof-of-work operations
    // ─────────────────────────────────────────────────────────────────

    /// Stage a transaction into the next batch block.
    pub fn stage_transaction(&mut self, id: u32, details: &str) -> Result<()> {
        self.pending.stage(id, details)?;
        debug!(id, staged = self.pending.len(), "transaction staged");
        Ok(())
    }

    /// Transactions currently staged.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Mine the staged batch into a sealed block and append it.
    ///
    /// Rejects an empty stage before any mining work starts. On
    /// cancellation or attempt exhaustion the staged transactions are
    /// put back, so the caller can retry.
    pub fn mine_and_append(&mut self, cancel: &CancelFlag) -> Result<&Block> {
        if self.pending.is_empty() {
            return Err(LedgerError::NothingStaged);
        }

        let batch = self.pending.take_batch()?;
        let mut block = Block::new(
            self.chain.len() as u64,
            now_secs(),
            Record::Batch(batch),
            self.chain.tail_hash(),
        );

        match self.miner.seal(&mut block, cancel) {
            Ok(report) => {
                info!(
                    index = block.index,
                    attempts = report.attempts,
                    hash = %report.hash,
                    "block mined and appended"
                );
                Ok(self.chain.append_block(block))
            }
            Err(err) => {
                warn!(%err, "mining stopped; restoring staged transactions");
                if let Record::Batch(batch) = block.payload {
                    self.pending = PendingStage::from_batch(batch);
                }
                Err(err.into())
            }
        }
    }
}
