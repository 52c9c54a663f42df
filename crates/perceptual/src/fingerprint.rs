//! Fingerprint set and metadata types.
//!
//! The fingerprint schema and metadata are part of the public contract: any
//! incompatible change must result in a new `fingerprint_version`.

use serde::{Deserialize, Serialize};

use crate::config::TieBreak;

/// Selected winnowed shingle with its originating position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnowedShingle {
    /// Shingle hash value.
    pub hash: u64,
    /// Index of the first token that contributed to this shingle.
    pub start_idx: usize,
}

/// The fingerprint of one document.
///
/// `hashes` is the set used for scoring; `selected` keeps every winnowing
/// pick with its position so matches can be traced back to source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FingerprintSet {
    /// Winnowing picks in position order.
    pub selected: Vec<WinnowedShingle>,
    /// Distinct selected hashes, sorted ascending.
    pub hashes: Vec<u64>,
    /// Full shingle hash stream; empty unless intermediates were requested.
    pub shingles: Vec<u64>,
    pub meta: FingerprintMeta,
}

impl FingerprintSet {
    /// Number of distinct fingerprints.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn contains(&self, hash: u64) -> bool {
        self.hashes.binary_search(&hash).is_ok()
    }

    pub fn hashes(&self) -> &[u64] {
        &self.hashes
    }

    /// Leftmost selected position carrying `hash`, if any.
    pub fn first_occurrence(&self, hash: u64) -> Option<usize> {
        self.selected
            .iter()
            .find(|s| s.hash == hash)
            .map(|s| s.start_idx)
    }
}

/// Metadata for traceability and determinism.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FingerprintMeta {
    /// Fingerprint algorithm version.
    ///
    /// Bumped whenever shingling or winnowing changes in a way that can
    /// affect fingerprints.
    pub fingerprint_version: u16,
    pub algorithm_name: String,
    /// Shingle length in tokens.
    pub k: usize,
    /// Winnowing window size.
    pub w: usize,
    pub seed: u64,
    pub tie_break: TieBreak,
    /// Tokens in the input stream.
    pub token_count: usize,
    /// Shingles produced before winnowing.
    pub shingle_count: usize,
    /// Configuration schema version supplied for this fingerprint.
    pub config_version: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> FingerprintMeta {
        FingerprintMeta {
            fingerprint_version: 1,
            algorithm_name: "test".to_string(),
            k: 3,
            w: 2,
            seed: 42,
            tie_break: TieBreak::Rightmost,
            token_count: 6,
            shingle_count: 4,
            config_version: 1,
        }
    }

    fn sample() -> FingerprintSet {
        FingerprintSet {
            selected: vec![
                WinnowedShingle { hash: 9, start_idx: 0 },
                WinnowedShingle { hash: 3, start_idx: 1 },
                WinnowedShingle { hash: 9, start_idx: 3 },
            ],
            hashes: vec![3, 9],
            shingles: Vec::new(),
            meta: meta(),
        }
    }

    #[test]
    fn set_accessors() {
        let set = sample();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert!(set.contains(3));
        assert!(!set.contains(4));
        assert_eq!(set.hashes(), &[3, 9]);
    }

    #[test]
    fn first_occurrence_is_leftmost() {
        let set = sample();
        assert_eq!(set.first_occurrence(9), Some(0));
        assert_eq!(set.first_occurrence(3), Some(1));
        assert_eq!(set.first_occurrence(7), None);
    }

    #[test]
    fn fingerprint_set_serde_roundtrip() {
        let set = sample();
        let serialized = serde_json::to_string(&set).unwrap();
        assert!(serialized.contains("\"rightmost\""));
        let deserialized: FingerprintSet = serde_json::from_str(&serialized).unwrap();
        assert_eq!(set, deserialized);
    }
}
