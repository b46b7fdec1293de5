//! Hashing primitives.
//!
//! Both digests are returned as lowercase hex, always exactly 64
//! characters. Keccak-256 here is the legacy (pre-NIST) permutation with
//! the original padding, not NIST SHA3-256 — the ledger service records
//! legacy-Keccak digests.

use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

/// Compute the legacy Keccak-256 hash of a byte slice.
///
/// # Example
///
/// ```rust
/// let digest = notary_core::keccak256(b"");
/// assert_eq!(
///     digest,
///     "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
/// );
/// ```
pub fn keccak256(data: &[u8]) -> String {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    hex::encode(output)
}

/// Compute the legacy Keccak-256 hash of a UTF-8 string.
pub fn keccak256_str(s: &str) -> String {
    keccak256(s.as_bytes())
}

/// Compute the SHA-256 hash of a byte slice.
pub fn sha256(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Compute the SHA-256 hash of a UTF-8 string.
pub fn sha256_str(s: &str) -> String {
    sha256(s.as_bytes())
}
