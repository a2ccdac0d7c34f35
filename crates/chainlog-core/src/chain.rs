//! Chain: the ordered, tamper-evident sequence of blocks.
//!
//! The chain owns every block, oldest first. Every operation is a
//! linear scan over the sequence; no index is maintained.
//!
//! Modify and delete deliberately do not cascade: modify reseals only
//! the targeted block, delete touches no digest at all. Either leaves
//! downstream `previous_hash` references dangling, and `verify` is the
//! sole detector of that state. Consumers must not "repair" the chain
//! on the store's behalf.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::digest::Digest;
use crate::error::ChainError;
use crate::record::{JobUpdate, Record};

/// An ordered sequence of blocks, each bound to its predecessor by
/// digest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// An empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// The digest a new block must reference: the tail's digest, or the
    /// genesis sentinel when the chain is empty.
    pub fn tail_hash(&self) -> Digest {
        self.blocks
            .last()
            .map(|b| b.hash.clone())
            .unwrap_or_else(Digest::genesis)
    }

    /// Wrap a record in a block linked to the current tail and append it.
    ///
    /// The block's index is its 0-based position from genesis. Appending
    /// never fails; an empty chain is the initial state, not an error.
    pub fn append(&mut self, record: Record) -> &Block {
        let block = Block::new(
            self.blocks.len() as u64,
            now_secs(),
            record,
            self.tail_hash(),
        );
        self.append_block(block)
    }

    /// Append an externally built block (e.g. one sealed by the miner).
    ///
    /// The caller is responsible for having linked it to the current
    /// tail; a mislinked block is not rejected here, it simply fails
    /// `verify` like any other broken link.
    pub fn append_block(&mut self, block: Block) -> &Block {
        self.blocks.push(block);
        self.blocks.last().expect("just pushed")
    }

    /// Whether every adjacent pair satisfies
    /// `successor.previous_hash == predecessor.hash`.
    ///
    /// An empty chain is vacuously valid.
    pub fn verify(&self) -> bool {
        self.first_broken_link().is_none()
    }

    /// Position of the first block whose `previous_hash` does not match
    /// its predecessor's stored digest, if any.
    pub fn first_broken_link(&self) -> Option<usize> {
        self.blocks
            .windows(2)
            .position(|pair| pair[1].previous_hash != pair[0].hash)
            .map(|i| i + 1)
    }

    /// All blocks whose record contains `keyword` (case-sensitive
    /// substring over job title/description or transaction details),
    /// in chain order. Empty when nothing matches.
    pub fn search(&self, keyword: &str) -> Vec<&Block> {
        self.blocks
            .iter()
            .filter(|b| b.payload.matches_keyword(keyword))
            .collect()
    }

    /// Apply `update` to the first job block with the given id and
    /// reseal that block only.
    ///
    /// The reseal changes the block's digest while every downstream
    /// `previous_hash` still names the old one, so a subsequent
    /// `verify` reports the chain as broken unless the block was the
    /// tail. That is the intended tamper-evidence behavior.
    pub fn modify(&mut self, id: &str, update: &JobUpdate) -> Result<(), ChainError> {
        let block = self
            .blocks
            .iter_mut()
            .find(|b| b.payload.job_id() == Some(id))
            .ok_or_else(|| ChainError::JobNotFound(id.to_string()))?;

        if let Record::Job(job) = &mut block.payload {
            update.apply_to(job);
        }
        block.reseal();
        Ok(())
    }

    /// Unlink the first job block with the given id, returning it.
    ///
    /// No stored digest is adjusted: the removed block's successor keeps
    /// naming the removed block's digest in `previous_hash`, so `verify`
    /// reports the gap unless the removed block was the tail.
    pub fn delete(&mut self, id: &str) -> Result<Block, ChainError> {
        let position = self
            .blocks
            .iter()
            .position(|b| b.payload.job_id() == Some(id))
            .ok_or_else(|| ChainError::JobNotFound(id.to_string()))?;

        Ok(self.blocks.remove(position))
    }

    /// All blocks, oldest first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterate blocks, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// The most recently appended block.
    pub fn tail(&self) -> Option<&Block> {
        self.blocks.last()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Current Unix time in seconds, as stamped onto appended blocks.
pub fn now_secs() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_secs() as i64
}
