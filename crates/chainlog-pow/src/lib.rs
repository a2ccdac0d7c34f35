//! # chainlog-pow
//!
//! Proof-of-work sealing for the chainlog ledger.
//!
//! - [`Miner`] - brute-force nonce search against a leading-zeros
//!   difficulty target, with an explicit cancellation and attempt-bound
//!   contract
//! - [`PendingStage`] - accumulates transactions into the next
//!   unsealed batch block
//!
//! Mining runs to completion on the caller's thread; the [`CancelFlag`]
//! is the only concession to the outside world.

pub mod error;
pub mod miner;
pub mod pending;

pub use error::{PendingError, PowError};
pub use miner::{CancelFlag, Miner, MinerConfig, SealReport, DEFAULT_DIFFICULTY};
pub use pending::PendingStage;
