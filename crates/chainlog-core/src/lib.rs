//! # chainlog-core
//!
//! Pure primitives for the chainlog ledger: digests, records, blocks,
//! and the hash chain itself.
//!
//! This crate contains no I/O and no clocksmithing beyond reading the
//! system time at append. It is pure computation over tamper-evident
//! data structures.
//!
//! ## Key Types
//!
//! - [`Digest`] - SHA-256 digest rendered as 64 hex chars (or the genesis sentinel)
//! - [`Record`] - block payload: a single [`Job`] or a bounded [`Batch`] of transactions
//! - [`Block`] - one link in the chain, sealed at construction
//! - [`Chain`] - the owned, ordered sequence with append/verify/search/modify/delete
//!
//! ## Tamper evidence
//!
//! Modify and delete intentionally leave downstream `previous_hash`
//! references dangling; [`Chain::verify`] is the sole detector. See the
//! [`chain`] module docs.

pub mod block;
pub mod canonical;
pub mod chain;
pub mod digest;
pub mod error;
pub mod record;
pub mod validation;

pub use block::Block;
pub use canonical::{batch_preimage, job_preimage};
pub use chain::{now_secs, Chain};
pub use digest::{Digest, DIGEST_HEX_LEN, GENESIS_SENTINEL};
pub use error::{CapacityExceeded, ChainError, ValidationError};
pub use record::{Batch, Job, JobUpdate, Record, Transaction, MAX_BATCH_TRANSACTIONS};
pub use validation::{
    validate_job, validate_job_update, validate_transaction_details, MAX_DESCRIPTION_LEN,
    MAX_DETAILS_LEN, MAX_JOB_ID_LEN, MAX_SHORT_FIELD_LEN,
};
