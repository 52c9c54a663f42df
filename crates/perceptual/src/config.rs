//! Configuration and error types for fingerprinting.
//!
//! Free of I/O and environment lookups: the fingerprint is a pure function of
//! `(tokens, config)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which position wins when several shingles in one window share the minimum
/// hash.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Prefer the rightmost minimum (classic winnowing).
    #[default]
    Rightmost,
    /// Prefer the leftmost minimum.
    Leftmost,
}

/// Configuration for the shingling + winnowing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FingerprintConfig {
    /// Configuration schema version.
    ///
    /// Any algorithmic change that can affect fingerprints must bump this
    /// version, so fingerprints from different schemes are never compared
    /// unknowingly.
    pub version: u32,
    /// Number of tokens per shingle (k-gram length).
    ///
    /// Larger values ignore more coincidental short matches; smaller values
    /// catch shorter copied fragments.
    pub k: usize,
    /// Winnowing window size, in shingles.
    ///
    /// `1` keeps every shingle. Larger windows keep fewer fingerprints; any
    /// shared run of at least `w + k - 1` tokens is still guaranteed to
    /// produce a common fingerprint.
    pub w: usize,
    /// Seed for token hashing and the rolling-hash base.
    ///
    /// Documents are only comparable when fingerprinted with the same seed.
    pub seed: u64,
    /// Tie-break rule for equal minimum hashes within a window.
    pub tie_break: TieBreak,
    /// Keep the full shingle hash stream in the output.
    ///
    /// When `false` it is computed and then dropped.
    pub include_intermediates: bool,
}

impl FingerprintConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shingle size (k).
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the winnowing window size (w).
    pub fn with_w(mut self, w: usize) -> Self {
        self.w = w;
        self
    }

    /// Set the hashing seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_intermediates(mut self, include_intermediates: bool) -> Self {
        self.include_intermediates = include_intermediates;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), PerceptualError> {
        if self.version < 1 {
            return Err(PerceptualError::InvalidConfigVersion {
                version: self.version,
            });
        }
        if self.k < 1 {
            return Err(PerceptualError::InvalidConfigK { k: self.k });
        }
        if self.w < 1 {
            return Err(PerceptualError::InvalidConfigW { w: self.w });
        }
        Ok(())
    }
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            version: 1,
            k: 4,
            w: 4,
            seed: 0xF00D_BAAD_F00D_BAAD,
            tie_break: TieBreak::Rightmost,
            include_intermediates: false,
        }
    }
}

/// Errors returned by the fingerprinting pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptualError {
    #[error("invalid config: k must be >= 1 (got {k})")]
    InvalidConfigK { k: usize },

    #[error("invalid config: w must be >= 1 (got {w})")]
    InvalidConfigW { w: usize },

    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = FingerprintConfig::default();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.k, 4);
        assert_eq!(cfg.w, 4);
        assert_eq!(cfg.seed, 0xF00D_BAAD_F00D_BAAD);
        assert_eq!(cfg.tie_break, TieBreak::Rightmost);
        assert!(!cfg.include_intermediates);
    }

    #[test]
    fn config_builder_chain() {
        let cfg = FingerprintConfig::new()
            .with_k(3)
            .with_w(2)
            .with_seed(42)
            .with_tie_break(TieBreak::Leftmost)
            .with_intermediates(true);

        assert_eq!(cfg.k, 3);
        assert_eq!(cfg.w, 2);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.tie_break, TieBreak::Leftmost);
        assert!(cfg.include_intermediates);
    }

    #[test]
    fn config_validate_valid() {
        assert!(FingerprintConfig::default().validate().is_ok());
    }

    #[test]
    fn config_validate_invalid_k_zero() {
        let cfg = FingerprintConfig::new().with_k(0);
        assert_eq!(cfg.validate(), Err(PerceptualError::InvalidConfigK { k: 0 }));
    }

    #[test]
    fn config_validate_invalid_w_zero() {
        let cfg = FingerprintConfig::new().with_w(0);
        assert_eq!(cfg.validate(), Err(PerceptualError::InvalidConfigW { w: 0 }));
    }

    #[test]
    fn config_validate_invalid_version_zero() {
        let cfg = FingerprintConfig {
            version: 0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(PerceptualError::InvalidConfigVersion { version: 0 })
        );
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = FingerprintConfig::new()
            .with_k(5)
            .with_w(3)
            .with_tie_break(TieBreak::Leftmost);

        let serialized = serde_json::to_string(&cfg).unwrap();
        assert!(serialized.contains("\"leftmost\""));
        let deserialized: FingerprintConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(cfg, deserialized);
    }

    #[test]
    fn error_display_mentions_field() {
        let err = PerceptualError::InvalidConfigW { w: 0 };
        assert!(err.to_string().contains("w must be >= 1"));
    }
}
