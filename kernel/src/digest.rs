//! Domain-separated content digests.
//!
//! SHA-256 over `domain || data`, rendered as `sha256:<hex>`. Domain prefixes
//! end in a NUL byte so no prefix is a prefix of another.

use std::fmt;

use sha2::{Digest, Sha256};

const ALGORITHM: &str = "sha256";

/// A rendered digest, e.g. `sha256:9f86d0...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Algorithm label, the part before the `:`.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        ALGORITHM
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Digest `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    ContentHash(format!("{ALGORITHM}:{}", hex::encode(hasher.finalize())))
}
