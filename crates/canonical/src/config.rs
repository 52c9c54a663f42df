//! Configuration types for source normalization.
//!
//! [`NormalizeConfig`] controls how raw source text is turned into a token
//! stream. The `version` field participates in the token stream digest, so
//! any behavioral change must be paired with a version bump.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{Granularity, NormalizeConfig};
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.strip_comments);
//! assert!(config.lowercase);
//! assert_eq!(config.granularity, Granularity::Char);
//!
//! let lexical = NormalizeConfig::new().with_granularity(Granularity::Lexical);
//! assert_eq!(lexical.granularity, Granularity::Lexical);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Unit of the token stream produced by normalization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Every non-whitespace character is a token.
    #[default]
    Char,
    /// Identifier and number runs (`[A-Za-z0-9_]` plus Unicode alphanumerics)
    /// form one token; every other non-whitespace character is its own token.
    Lexical,
}

/// Configuration for [`normalize`](crate::normalize).
///
/// Serialized form:
///
/// ```json
/// {
///   "version": 1,
///   "normalize_unicode": false,
///   "strip_comments": true,
///   "lowercase": true,
///   "granularity": "char"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Normalization scheme version. Must be >= 1.
    pub version: u32,

    /// Apply Unicode NFKC before anything else.
    ///
    /// Off by default: token offsets then point straight into the decoded
    /// input, which is what evidence highlighting wants. When enabled, offsets
    /// refer to the NFKC form kept in [`TokenStream::source`](crate::TokenStream::source).
    pub normalize_unicode: bool,

    /// Mask `//` line comments and `/* */` block comments. String and char
    /// literals are left untouched.
    pub strip_comments: bool,

    /// Lowercase every token (locale-free Unicode lowercasing).
    pub lowercase: bool,

    /// Token granularity.
    pub granularity: Granularity,
}

impl NormalizeConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    pub fn with_comment_stripping(mut self, enabled: bool) -> Self {
        self.strip_comments = enabled;
        self
    }

    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: false,
            strip_comments: true,
            lowercase: true,
            granularity: Granularity::Char,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = NormalizeConfig::default();
        assert_eq!(cfg.version, 1);
        assert!(!cfg.normalize_unicode);
        assert!(cfg.strip_comments);
        assert!(cfg.lowercase);
        assert_eq!(cfg.granularity, Granularity::Char);
    }

    #[test]
    fn builder_chain() {
        let cfg = NormalizeConfig::new()
            .with_unicode_normalization(true)
            .with_comment_stripping(false)
            .with_lowercase(false)
            .with_granularity(Granularity::Lexical);

        assert!(cfg.normalize_unicode);
        assert!(!cfg.strip_comments);
        assert!(!cfg.lowercase);
        assert_eq!(cfg.granularity, Granularity::Lexical);
    }

    #[test]
    fn version_zero_rejected() {
        let cfg = NormalizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: NormalizeConfig =
            serde_json::from_str(r#"{"granularity":"lexical"}"#).expect("parse");
        assert_eq!(cfg.granularity, Granularity::Lexical);
        assert_eq!(cfg.version, 1);
        assert!(cfg.strip_comments);
    }
}
