//! Proptest generators for property-based testing.

use proptest::prelude::*;

use chainlog_core::{
    Chain, Digest, Job, JobUpdate, Record, MAX_DESCRIPTION_LEN, MAX_DETAILS_LEN, MAX_JOB_ID_LEN,
    MAX_SHORT_FIELD_LEN,
};

/// Generate a valid job id (1..=5 chars).
pub fn job_id() -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[A-Z][0-9]{{0,{}}}", MAX_JOB_ID_LEN - 1))
        .expect("valid regex")
}

/// Generate a short text field within the boundary limit.
pub fn short_field() -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[ -~]{{0,{MAX_SHORT_FIELD_LEN}}}"))
        .expect("valid regex")
}

/// Generate a description within the boundary limit.
pub fn description() -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[ -~]{{0,{MAX_DESCRIPTION_LEN}}}"))
        .expect("valid regex")
}

/// Generate transaction detail text within the boundary limit.
pub fn details() -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[ -~]{{0,{MAX_DETAILS_LEN}}}"))
        .expect("valid regex")
}

/// Generate a job whose every field passes boundary validation.
pub fn job() -> impl Strategy<Value = Job> {
    (job_id(), short_field(), short_field(), short_field(), description()).prop_map(
        |(id, title, company, location, description)| Job {
            id,
            title,
            company,
            location,
            description,
        },
    )
}

/// Generate a partial job update within the boundary limits.
pub fn job_update() -> impl Strategy<Value = JobUpdate> {
    (
        proptest::option::of(short_field()),
        proptest::option::of(short_field()),
        proptest::option::of(short_field()),
        proptest::option::of(description()),
    )
        .prop_map(|(title, company, location, description)| JobUpdate {
            title,
            company,
            location,
            description,
        })
}

/// Parameters for generating an append-only chain of jobs.
#[derive(Debug, Clone)]
pub struct ChainParams {
    pub jobs: Vec<Job>,
}

impl Arbitrary for ChainParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec(job(), 0..8)
            .prop_map(|jobs| ChainParams { jobs })
            .boxed()
    }
}

/// Build a chain by appending every job in order.
pub fn chain_from_params(params: &ChainParams) -> Chain {
    let mut chain = Chain::new();
    for job in &params.jobs {
        chain.append(Record::Job(job.clone()));
    }
    chain
}
