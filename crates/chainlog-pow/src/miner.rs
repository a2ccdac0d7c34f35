//! Brute-force nonce search against a leading-zeros difficulty target.
//!
//! The search increments the block's nonce from its current value and
//! reseals until the digest shows the required run of leading `'0'`
//! characters. Expected work scales as `16^difficulty`. Unlike the
//! reference behavior, the loop is bounded: callers pass a [`CancelFlag`]
//! and may set an attempt limit, so a high difficulty cannot block the
//! thread indefinitely.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chainlog_core::{Block, Digest};
use tracing::trace;

use crate::error::PowError;

/// Difficulty applied when none is configured.
pub const DEFAULT_DIFFICULTY: usize = 4;

/// How many attempts pass between cancel-flag polls.
const CANCEL_CHECK_INTERVAL: u64 = 1024;

/// Cooperative cancellation handle for a mining run.
///
/// Cloneable and cheap; another thread of control (a signal handler, a
/// UI callback) can hold a clone and flip it while `seal` runs.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the current mining run stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Miner configuration.
#[derive(Debug, Clone)]
pub struct MinerConfig {
    /// Required count of leading `'0'` hex characters.
    pub difficulty: usize,
    /// Hard cap on attempts; `None` leaves only the cancel flag.
    pub max_attempts: Option<u64>,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            max_attempts: None,
        }
    }
}

/// Outcome of a successful seal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealReport {
    /// Number of nonce increments performed.
    pub attempts: u64,
    /// The qualifying digest now stored on the block.
    pub hash: Digest,
}

/// The proof-of-work miner.
#[derive(Debug, Clone, Default)]
pub struct Miner {
    config: MinerConfig,
}

impl Miner {
    pub fn new(config: MinerConfig) -> Self {
        Self { config }
    }

    /// Miner with the given difficulty and no attempt cap.
    pub fn with_difficulty(difficulty: usize) -> Self {
        Self::new(MinerConfig {
            difficulty,
            max_attempts: None,
        })
    }

    pub fn difficulty(&self) -> usize {
        self.config.difficulty
    }

    /// Search for a qualifying nonce, mutating `block` in place.
    ///
    /// The nonce strictly increases from its value at entry; every
    /// attempt reseals the block, so on success the stored digest is
    /// the qualifying one. On cancellation or exhaustion the block is
    /// left sealed at its last tried nonce and the error reports how
    /// many attempts were spent.
    pub fn seal(&self, block: &mut Block, cancel: &CancelFlag) -> Result<SealReport, PowError> {
        let mut attempts: u64 = 0;

        loop {
            if attempts % CANCEL_CHECK_INTERVAL == 0 {
                if cancel.is_cancelled() {
                    return Err(PowError::Cancelled { attempts });
                }
                if attempts > 0 {
                    trace!(attempts, nonce = block.nonce, "mining in progress");
                }
            }
            if let Some(limit) = self.config.max_attempts {
                if attempts >= limit {
                    return Err(PowError::AttemptsExhausted { limit });
                }
            }

            block.nonce += 1;
            block.reseal();
            attempts += 1;

            if block.hash.meets_difficulty(self.config.difficulty) {
                return Ok(SealReport {
                    attempts,
                    hash: block.hash.clone(),
                });
            }
        }
    }
}
