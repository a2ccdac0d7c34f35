//! Record payloads carried inside blocks.
//!
//! Two shapes exist: a single job posting, and a bounded batch of
//! transactions (the proof-of-work variant's payload). Records are
//! immutable once their block is sealed; the store reseals the block
//! whenever it touches a record.

use serde::{Deserialize, Serialize};

use crate::digest::Digest;
use crate::error::CapacityExceeded;

/// Maximum transactions a single batch block may carry.
pub const MAX_BATCH_TRANSACTIONS: usize = 10;

/// A job posting. The id is caller-supplied; the store does not enforce
/// uniqueness, so duplicate ids resolve to the first match in chain order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
}

/// A partial update applied to a job by `Chain::modify`.
///
/// `None` fields are left untouched. The id itself is not updatable;
/// delete and re-add instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl JobUpdate {
    /// An update that changes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the company.
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Apply to a job in place.
    pub fn apply_to(&self, job: &mut Job) {
        if let Some(title) = &self.title {
            job.title = title.clone();
        }
        if let Some(company) = &self.company {
            job.company = company.clone();
        }
        if let Some(location) = &self.location {
            job.location = location.clone();
        }
        if let Some(description) = &self.description {
            job.description = description.clone();
        }
    }
}

/// One entry in a batch block.
///
/// The signature is a plain content digest over `id || details` (decimal
/// id, no separator), computed once when the transaction is staged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub details: String,
    pub signature: Digest,
}

impl Transaction {
    /// Build a transaction, computing its signature digest.
    pub fn new(id: u32, details: impl Into<String>) -> Self {
        let details = details.into();
        let signature = Digest::compute(format!("{id}{details}").as_bytes());
        Self {
            id,
            details,
            signature,
        }
    }

    /// Whether the stored signature matches the current contents.
    pub fn signature_valid(&self) -> bool {
        self.signature == Digest::compute(format!("{}{}", self.id, self.details).as_bytes())
    }
}

/// An ordered, capacity-bounded set of transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    transactions: Vec<Transaction>,
}

impl Batch {
    /// An empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction. Rejects (does not truncate) once the batch
    /// holds `MAX_BATCH_TRANSACTIONS` entries.
    pub fn push(&mut self, tx: Transaction) -> Result<(), CapacityExceeded> {
        if self.transactions.len() >= MAX_BATCH_TRANSACTIONS {
            return Err(CapacityExceeded {
                capacity: MAX_BATCH_TRANSACTIONS,
            });
        }
        self.transactions.push(tx);
        Ok(())
    }

    /// The transactions in staging order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl TryFrom<Vec<Transaction>> for Batch {
    type Error = CapacityExceeded;

    fn try_from(transactions: Vec<Transaction>) -> Result<Self, CapacityExceeded> {
        if transactions.len() > MAX_BATCH_TRANSACTIONS {
            return Err(CapacityExceeded {
                capacity: MAX_BATCH_TRANSACTIONS,
            });
        }
        Ok(Self { transactions })
    }
}

/// The payload of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Record {
    /// A single job posting.
    Job(Job),
    /// A batch of transactions (proof-of-work variant).
    Batch(Batch),
}

impl Record {
    /// The caller-supplied identifier, if this record has one.
    ///
    /// Batch records are not id-addressable.
    pub fn job_id(&self) -> Option<&str> {
        match self {
            Record::Job(job) => Some(&job.id),
            Record::Batch(_) => None,
        }
    }

    /// The job payload, if any.
    pub fn as_job(&self) -> Option<&Job> {
        match self {
            Record::Job(job) => Some(job),
            Record::Batch(_) => None,
        }
    }

    /// The batch payload, if any.
    pub fn as_batch(&self) -> Option<&Batch> {
        match self {
            Record::Job(_) => None,
            Record::Batch(batch) => Some(batch),
        }
    }

    /// Case-sensitive substring match against the searchable text of
    /// this record: job title and description, or transaction details.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        match self {
            Record::Job(job) => {
                job.title.contains(keyword) || job.description.contains(keyword)
            }
            Record::Batch(batch) => batch
                .transactions()
                .iter()
                .any(|tx| tx.details.contains(keyword)),
        }
    }
}

impl From<Job> for Record {
    fn from(job: Job) -> Self {
        Record::Job(job)
    }
}

impl From<Batch> for Record {
    fn from(batch: Batch) -> Self {
        Record::Batch(batch)
    }
}
