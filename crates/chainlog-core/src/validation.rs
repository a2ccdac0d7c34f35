//! Boundary validation of record fields.
//!
//! The limits come from the fixed-width text buffers of the original
//! data layout, reinterpreted as validated maximum lengths: a field that
//! is too long is rejected outright, never silently truncated.

use crate::error::ValidationError;
use crate::record::{Job, JobUpdate};

/// Maximum length of a job id (e.g. `J0001`).
pub const MAX_JOB_ID_LEN: usize = 5;

/// Maximum length of the title, company, and location fields.
pub const MAX_SHORT_FIELD_LEN: usize = 99;

/// Maximum length of a job description.
pub const MAX_DESCRIPTION_LEN: usize = 499;

/// Maximum length of a transaction's detail text.
pub const MAX_DETAILS_LEN: usize = 255;

fn check_len(field: &'static str, value: &str, limit: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > limit {
        return Err(ValidationError::FieldTooLong {
            field,
            limit,
            actual,
        });
    }
    Ok(())
}

/// Validate every field of a job before it enters the chain.
pub fn validate_job(job: &Job) -> Result<(), ValidationError> {
    if job.id.is_empty() {
        return Err(ValidationError::EmptyJobId);
    }
    check_len("job id", &job.id, MAX_JOB_ID_LEN)?;
    check_len("title", &job.title, MAX_SHORT_FIELD_LEN)?;
    check_len("company", &job.company, MAX_SHORT_FIELD_LEN)?;
    check_len("location", &job.location, MAX_SHORT_FIELD_LEN)?;
    check_len("description", &job.description, MAX_DESCRIPTION_LEN)?;
    Ok(())
}

/// Validate the fields present in a partial update.
pub fn validate_job_update(update: &JobUpdate) -> Result<(), ValidationError> {
    if let Some(title) = &update.title {
        check_len("title", title, MAX_SHORT_FIELD_LEN)?;
    }
    if let Some(company) = &update.company {
        check_len("company", company, MAX_SHORT_FIELD_LEN)?;
    }
    if let Some(location) = &update.location {
        check_len("location", location, MAX_SHORT_FIELD_LEN)?;
    }
    if let Some(description) = &update.description {
        check_len("description", description, MAX_DESCRIPTION_LEN)?;
    }
    Ok(())
}

/// Validate a transaction's detail text before staging.
pub fn validate_transaction_details(details: &str) -> Result<(), ValidationError> {
    check_len("details", details, MAX_DETAILS_LEN)
}
