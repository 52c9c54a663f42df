//! YAML configuration file support.
//!
//! Every engine knob can be set from one YAML file; omitted fields keep
//! their defaults, so an empty document (or just `version: "1"`) is valid.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "course-submissions"
//!
//! normalize:
//!   version: 1
//!   normalize_unicode: false
//!   strip_comments: true
//!   lowercase: true
//!   granularity: "lexical"
//!
//! fingerprint:
//!   version: 1
//!   k: 5
//!   w: 4
//!   seed: 17361641481138401520
//!   tie_break: "rightmost"
//!
//! scoring:
//!   include_evidence: true
//!   max_evidence: 128
//!   edit_similarity: true
//!   edit_max_tokens: 5000
//!
//! engine:
//!   parallel: true
//!   parallel_threshold_bytes: 65536
//! ```

use std::fs;
use std::path::Path;

use canonical::{Granularity, NormalizeConfig};
use matcher::ScoringConfig;
use perceptual::{FingerprintConfig, TieBreak};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineConfig;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CodesimConfig {
    /// Configuration format version
    #[serde(default = "default_format_version")]
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub normalize: NormalizeYamlConfig,

    #[serde(default)]
    pub fingerprint: FingerprintYamlConfig,

    #[serde(default)]
    pub scoring: ScoringYamlConfig,

    #[serde(default)]
    pub engine: EngineYamlConfig,
}

impl CodesimConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: CodesimConfig = if yaml.trim().is_empty() {
            CodesimConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.normalize.validate()?;
        self.fingerprint.validate()?;
        self.engine.validate()?;
        Ok(())
    }

    /// Convert into the engine's runtime configuration.
    pub fn into_engine_config(self) -> EngineConfig {
        EngineConfig {
            normalize: NormalizeConfig {
                version: self.normalize.version,
                normalize_unicode: self.normalize.normalize_unicode,
                strip_comments: self.normalize.strip_comments,
                lowercase: self.normalize.lowercase,
                granularity: self.normalize.granularity,
            },
            fingerprint: FingerprintConfig {
                version: self.fingerprint.version,
                k: self.fingerprint.k,
                w: self.fingerprint.w,
                seed: self.fingerprint.seed,
                tie_break: self.fingerprint.tie_break,
                include_intermediates: false,
            },
            scoring: ScoringConfig::new()
                .with_evidence(self.scoring.include_evidence)
                .with_max_evidence(self.scoring.max_evidence)
                .with_edit_similarity(self.scoring.edit_similarity)
                .with_edit_max_tokens(self.scoring.edit_max_tokens),
            parallel: self.engine.parallel,
            parallel_threshold_bytes: self.engine.parallel_threshold_bytes,
        }
    }
}

impl Default for CodesimConfig {
    fn default() -> Self {
        Self {
            version: default_format_version(),
            name: None,
            normalize: NormalizeYamlConfig::default(),
            fingerprint: FingerprintYamlConfig::default(),
            scoring: ScoringYamlConfig::default(),
            engine: EngineYamlConfig::default(),
        }
    }
}

/// Normalization YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizeYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub normalize_unicode: bool,

    #[serde(default = "true_value")]
    pub strip_comments: bool,

    #[serde(default = "true_value")]
    pub lowercase: bool,

    #[serde(default)]
    pub granularity: Granularity,
}

impl NormalizeYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "normalize.version must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeYamlConfig {
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

/// Fingerprinting YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FingerprintYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_k")]
    pub k: usize,

    /// Used when a request does not carry its own window.
    #[serde(default = "default_w")]
    pub w: usize,

    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default)]
    pub tie_break: TieBreak,
}

impl FingerprintYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "fingerprint.version must be >= 1".to_string(),
            ));
        }
        if self.k == 0 {
            return Err(ConfigLoadError::Validation(
                "fingerprint.k must be >= 1".to_string(),
            ));
        }
        if self.w == 0 {
            return Err(ConfigLoadError::Validation(
                "fingerprint.w must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for FingerprintYamlConfig {
    fn default() -> Self {
        let defaults = FingerprintConfig::default();
        Self {
            version: defaults.version,
            k: defaults.k,
            w: defaults.w,
            seed: defaults.seed,
            tie_break: defaults.tie_break,
        }
    }
}

/// Scoring YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringYamlConfig {
    #[serde(default = "true_value")]
    pub include_evidence: bool,

    #[serde(default = "default_max_evidence")]
    pub max_evidence: usize,

    #[serde(default = "true_value")]
    pub edit_similarity: bool,

    #[serde(default = "default_edit_max_tokens")]
    pub edit_max_tokens: usize,
}

impl Default for ScoringYamlConfig {
    fn default() -> Self {
        Self {
            include_evidence: true,
            max_evidence: default_max_evidence(),
            edit_similarity: true,
            edit_max_tokens: default_edit_max_tokens(),
        }
    }
}

/// Execution YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineYamlConfig {
    #[serde(default = "true_value")]
    pub parallel: bool,

    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold_bytes: usize,
}

impl EngineYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        Ok(())
    }
}

impl Default for EngineYamlConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold_bytes: default_parallel_threshold(),
        }
    }
}

fn default_format_version() -> String {
    "1.0".to_string()
}
fn default_version() -> u32 {
    1
}
fn true_value() -> bool {
    true
}
fn default_k() -> usize {
    FingerprintConfig::default().k
}
fn default_w() -> usize {
    FingerprintConfig::default().w
}
fn default_seed() -> u64 {
    FingerprintConfig::default().seed
}
fn default_max_evidence() -> usize {
    ScoringConfig::default().max_evidence
}
fn default_edit_max_tokens() -> usize {
    ScoringConfig::default().edit_max_tokens
}
fn default_parallel_threshold() -> usize {
    EngineConfig::default().parallel_threshold_bytes
}
