//! Block: one link in the hash chain.
//!
//! A block owns its record payload, its own digest, and the digest of
//! its predecessor. The digest binds the block's fields as of the last
//! seal; mutating a sealed block without resealing leaves the stored
//! digest stale, which `Chain::verify` exists to detect.

use serde::{Deserialize, Serialize};

use crate::canonical::{batch_preimage, job_preimage};
use crate::digest::Digest;
use crate::record::Record;

/// One link in the chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// 0-based position from genesis, assigned at append time.
    pub index: u64,
    /// Unix timestamp (seconds) of block creation.
    pub created_at: i64,
    /// The record payload.
    pub payload: Record,
    /// Digest of the predecessor, or the genesis sentinel.
    pub previous_hash: Digest,
    /// Digest of this block as of its last seal.
    pub hash: Digest,
    /// Mining counter. Stays 0 for blocks that are never mined.
    pub nonce: u64,
}

impl Block {
    /// Construct and seal a block.
    pub fn new(index: u64, created_at: i64, payload: Record, previous_hash: Digest) -> Self {
        let mut block = Self {
            index,
            created_at,
            payload,
            previous_hash,
            hash: Digest::genesis(), // placeholder until sealed below
            nonce: 0,
        };
        block.reseal();
        block
    }

    /// Recompute the digest from the block's current field values.
    pub fn compute_hash(&self) -> Digest {
        let preimage = match &self.payload {
            Record::Job(job) => job_preimage(job, &self.previous_hash),
            Record::Batch(batch) => batch_preimage(
                self.index,
                self.created_at,
                batch.len(),
                &self.previous_hash,
                self.nonce,
            ),
        };
        Digest::compute(&preimage)
    }

    /// Recompute and store the digest.
    pub fn reseal(&mut self) {
        self.hash = self.compute_hash();
    }

    /// Whether the stored digest matches the current field values.
    pub fn is_sealed(&self) -> bool {
        self.hash == self.compute_hash()
    }
}
