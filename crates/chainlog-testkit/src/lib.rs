//! # chainlog-testkit
//!
//! Testing utilities for the chainlog workspace.
//!
//! ## Fixtures
//!
//! Quickly set up canned data:
//!
//! ```rust
//! use chainlog_testkit::fixtures::{chain_of_jobs, LedgerFixture};
//!
//! let chain = chain_of_jobs(4);
//! assert!(chain.verify());
//!
//! let fixture = LedgerFixture::with_jobs(2);
//! assert_eq!(fixture.ledger.list().len(), 2);
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use chainlog_testkit::generators::{chain_from_params, ChainParams};
//!
//! proptest! {
//!     #[test]
//!     fn append_only_chains_verify(params: ChainParams) {
//!         prop_assert!(chain_from_params(&params).verify());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{chain_of_jobs, sample_job, LedgerFixture};
pub use generators::{chain_from_params, ChainParams};
