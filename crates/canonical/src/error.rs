use thiserror::Error;

/// Errors that can occur while decoding or normalizing a document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    Decode { valid_up_to: usize },
}
