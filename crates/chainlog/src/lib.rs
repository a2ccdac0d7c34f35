//! # chainlog
//!
//! The unified API for the chainlog system: an append-mostly,
//! tamper-evident sequence of records, each block cryptographically
//! bound to its predecessor by a SHA-256 digest, with an optional
//! proof-of-work seal for batch blocks.
//!
//! ## Key Concepts
//!
//! - **Block**: one link in the chain, sealed (digest computed) at
//!   construction.
//! - **Chain**: oldest-first owned sequence; every operation is a
//!   linear scan.
//! - **Tamper evidence**: modifying or deleting a block leaves
//!   downstream `previous_hash` references dangling on purpose;
//!   [`Ledger::verify`] is the sole detector and reports the chain as
//!   broken after any non-tail mutation.
//! - **Mining**: a batch block is sealed once its digest shows the
//!   required run of leading `'0'` characters.
//!
//! ## Usage
//!
//! ```rust
//! use chainlog::{CancelFlag, Job, Ledger, LedgerConfig};
//!
//! let mut ledger = Ledger::new(LedgerConfig::default());
//!
//! ledger.add_job(Job {
//!     id: "J0001".to_string(),
//!     title: "Systems Engineer".to_string(),
//!     company: "Initech".to_string(),
//!     location: "Remote".to_string(),
//!     description: "Maintain the mainframe".to_string(),
//! }).unwrap();
//!
//! assert!(ledger.verify());
//!
//! // Proof-of-work path: stage transactions, then mine.
//! ledger.stage_transaction(1, "ten widgets").unwrap();
//! let block = ledger.mine_and_append(&CancelFlag::new()).unwrap();
//! assert!(block.hash.as_str().starts_with("0000"));
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `chainlog::core` - primitives (Digest, Block, Chain, records)
//! - `chainlog::pow` - the miner and pending stage

pub mod error;
pub mod ledger;

// Re-export component crates
pub use chainlog_core as core;
pub use chainlog_pow as pow;

// Re-export main types for convenience
pub use error::{LedgerError, Result};
pub use ledger::{Ledger, LedgerConfig};

// Re-export commonly used component types
pub use chainlog_core::{
    Batch, Block, Chain, ChainError, Digest, Job, JobUpdate, Record, Transaction,
    ValidationError,
};
pub use chainlog_pow::{CancelFlag, Miner, MinerConfig, PendingStage, PowError};
