//! Token stream digests.
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || len_0 || tok_0 || len_1 || tok_1 || ... )
//! ```
//!
//! `len_i` is the token's UTF-8 byte length as a big-endian `u64`, so any byte
//! a token may contain (control characters included) keeps boundaries
//! unambiguous. The version is part of the digest so that two normalization
//! schemes never produce comparable digests.

use sha2::{Digest, Sha256};

/// Digest a normalized token sequence under a given normalization version.
///
/// Two documents with equal digests have identical token streams, so this is
/// the "exact copy after normalization" signal.
///
/// ```rust
/// use canonical::hash_token_stream;
///
/// let a = hash_token_stream(1, &["int", "x", ";"]);
/// assert_eq!(a.len(), 64);
/// assert_eq!(a, hash_token_stream(1, &["int", "x", ";"]));
/// assert_ne!(a, hash_token_stream(1, &["intx", ";"]));
/// assert_ne!(a, hash_token_stream(2, &["int", "x", ";"]));
/// ```
pub fn hash_token_stream<S: AsRef<str>>(version: u32, tokens: &[S]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(version.to_be_bytes());
    hasher.update([0u8]);
    for token in tokens {
        let bytes = token.as_ref().as_bytes();
        hasher.update((bytes.len() as u64).to_be_bytes());
        hasher.update(bytes);
    }
    hex::encode(hasher.finalize())
}
