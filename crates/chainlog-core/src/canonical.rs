//! Canonical preimage encoding for block digests.
//!
//! The preimage is a separator-free concatenation of the fields a
//! block's digest binds, with integers rendered in decimal. This is the
//! wire policy of the original chains; reproducing it byte-for-byte
//! keeps digests compatible with chains built by the reference
//! implementation.
//!
//! Job blocks bind the four text fields plus the predecessor digest.
//! Batch blocks bind the header fields (index, creation time,
//! transaction count, predecessor digest, nonce) — the transactions
//! themselves carry their own per-entry digests.

use crate::digest::Digest;
use crate::record::Job;

/// Preimage for a job block:
/// `title || company || location || description || previous_hash`.
pub fn job_preimage(job: &Job, previous_hash: &Digest) -> Vec<u8> {
    let mut buf = Vec::with_capacity(
        job.title.len()
            + job.company.len()
            + job.location.len()
            + job.description.len()
            + previous_hash.as_str().len(),
    );
    buf.extend_from_slice(job.title.as_bytes());
    buf.extend_from_slice(job.company.as_bytes());
    buf.extend_from_slice(job.location.as_bytes());
    buf.extend_from_slice(job.description.as_bytes());
    buf.extend_from_slice(previous_hash.as_str().as_bytes());
    buf
}

/// Preimage for a batch block:
/// `index || created_at || transaction_count || previous_hash || nonce`,
/// integers in decimal.
pub fn batch_preimage(
    index: u64,
    created_at: i64,
    transaction_count: usize,
    previous_hash: &Digest,
    nonce: u64,
) -> Vec<u8> {
    format!(
        "{index}{created_at}{transaction_count}{}{nonce}",
        previous_hash.as_str()
    )
    .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_preimage_is_plain_concatenation() {
        let job = Job {
            id: "J0001".to_string(),
            title: "T".to_string(),
            company: "C".to_string(),
            location: "L".to_string(),
            description: "D".to_string(),
        };
        let prev = Digest::genesis();
        assert_eq!(job_preimage(&job, &prev), b"TCLD0".to_vec());
    }

    #[test]
    fn test_batch_preimage_decimal_rendering() {
        let prev = Digest::genesis();
        // "3" || "1700000000" || "2" || "0" || "41"
        assert_eq!(batch_preimage(3, 1_700_000_000, 2, &prev, 41), b"317000000002041".to_vec());
    }

    #[test]
    fn test_preimage_binds_every_field() {
        let base = Job {
            id: "J0001".to_string(),
            title: "title".to_string(),
            company: "co".to_string(),
            location: "loc".to_string(),
            description: "desc".to_string(),
        };
        let prev = Digest::genesis();
        let reference = Digest::compute(&job_preimage(&base, &prev));

        for field in ["title", "company", "location", "description"] {
            let mut altered = base.clone();
            match field {
                "title" => altered.title.push('!'),
                "company" => altered.company.push('!'),
                "location" => altered.location.push('!'),
                _ => altered.description.push('!'),
            }
            assert_ne!(
                Digest::compute(&job_preimage(&altered, &prev)),
                reference,
                "digest must change when {field} changes"
            );
        }

        let other_prev = Digest::compute(b"other");
        assert_ne!(Digest::compute(&job_preimage(&base, &other_prev)), reference);
    }

    #[test]
    fn test_job_id_is_not_bound() {
        // The reference policy hashes the four text fields and the
        // previous digest only; the id is outside the preimage.
        let mut job = Job {
            id: "J0001".to_string(),
            title: "T".to_string(),
            company: "C".to_string(),
            location: "L".to_string(),
            description: "D".to_string(),
        };
        let prev = Digest::genesis();
        let d1 = Digest::compute(&job_preimage(&job, &prev));
        job.id = "J0002".to_string();
        let d2 = Digest::compute(&job_preimage(&job, &prev));
        assert_eq!(d1, d2);
    }
}
