//! SHA-256 digests rendered as fixed-width hexadecimal strings.
//!
//! Every block carries two digests: its own and its predecessor's. The
//! first block in a chain references the genesis sentinel `"0"` instead
//! of a real digest, so the value domain is "64 lowercase hex chars or
//! the sentinel" and the type stores the rendered string directly.

use serde::{Deserialize, Deserializer, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;

/// The `previous_hash` value of the first block in a chain.
pub const GENESIS_SENTINEL: &str = "0";

/// Number of hex characters in a rendered SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// A SHA-256 digest as a 64-character lowercase hex string, or the
/// genesis sentinel.
///
/// The invariant holds on every construction path, deserialization
/// included: a string that is neither the sentinel nor 64 lowercase
/// hex characters is rejected.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Digest(String);

impl Digest {
    /// Compute the SHA-256 digest of the given bytes.
    ///
    /// Deterministic: identical input always yields an identical digest.
    pub fn compute(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hex::encode(hasher.finalize()))
    }

    /// The genesis sentinel, used as `previous_hash` for the first block.
    pub fn genesis() -> Self {
        Self(GENESIS_SENTINEL.to_string())
    }

    /// Whether this digest is the genesis sentinel.
    pub fn is_genesis(&self) -> bool {
        self.0 == GENESIS_SENTINEL
    }

    /// The rendered hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Count of leading `'0'` characters in the rendering.
    pub fn leading_zeros(&self) -> usize {
        self.0.chars().take_while(|&c| c == '0').count()
    }

    /// The proof-of-work predicate: at least `difficulty` leading `'0'`
    /// characters.
    pub fn meets_difficulty(&self, difficulty: usize) -> bool {
        self.leading_zeros() >= difficulty
    }

    fn is_valid_repr(s: &str) -> bool {
        s == GENESIS_SENTINEL
            || (s.len() == DIGEST_HEX_LEN
                && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')))
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if Self::is_valid_repr(&s) {
            Ok(Self(s))
        } else {
            Err(serde::de::Error::custom(
                "digest must be the genesis sentinel or 64 lowercase hex characters",
            ))
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_genesis() {
            write!(f, "Digest(genesis)")
        } else {
            write!(f, "Digest({})", &self.0[..16])
        }
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
