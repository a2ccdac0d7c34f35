//! Test fixtures and helpers.
//!
//! Common setup code for integration tests across the workspace.

use chainlog::{Ledger, LedgerConfig, MinerConfig};
use chainlog_core::{Chain, Job, Record};

/// A deterministic sample job. Different `n` give distinct ids, titles,
/// and descriptions within the boundary limits.
pub fn sample_job(n: usize) -> Job {
    Job {
        id: format!("J{:04}", n % 10_000),
        title: format!("Title {n}"),
        company: format!("Company {n}"),
        location: format!("City {n}"),
        description: format!("Description for posting number {n}"),
    }
}

/// A chain of `n` sample jobs built only via append (always verifies).
pub fn chain_of_jobs(n: usize) -> Chain {
    let mut chain = Chain::new();
    for i in 0..n {
        chain.append(Record::Job(sample_job(i)));
    }
    chain
}

/// A ledger fixture with a low mining difficulty so tests stay fast.
pub struct LedgerFixture {
    pub ledger: Ledger,
}

impl LedgerFixture {
    /// Empty ledger, difficulty 1 (16 expected attempts per block).
    pub fn new() -> Self {
        Self::with_difficulty(1)
    }

    /// Empty ledger with the given difficulty.
    pub fn with_difficulty(difficulty: usize) -> Self {
        Self {
            ledger: Ledger::new(LedgerConfig {
                miner: MinerConfig {
                    difficulty,
                    max_attempts: None,
                },
            }),
        }
    }

    /// Ledger pre-populated with `n` sample jobs.
    pub fn with_jobs(n: usize) -> Self {
        let mut fixture = Self::new();
        for i in 0..n {
            fixture
                .ledger
                .add_job(sample_job(i))
                .expect("sample jobs are within limits");
        }
        fixture
    }
}

impl Default for LedgerFixture {
    fn default() -> Self {
        Self::new()
    }
}
