use std::fmt;

use canonical::CanonicalError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wire::FrameError;

/// Which document of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentSide {
    A,
    B,
    Both,
}

impl fmt::Display for DocumentSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSide::A => f.write_str("document A"),
            DocumentSide::B => f.write_str("document B"),
            DocumentSide::Both => f.write_str("both documents"),
        }
    }
}

/// Errors produced by a comparison.
///
/// Everything except `Internal` is detected before any shingling starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("{side} has no content after normalization")]
    EmptyInput { side: DocumentSide },

    #[error("window must be a positive integer, got {window:?}")]
    InvalidWindow { window: String },

    #[error("{side} is not valid UTF-8: {source}")]
    Decode {
        side: DocumentSide,
        #[source]
        source: CanonicalError,
    },

    #[error("malformed input frame: {0}")]
    MalformedFrame(#[from] FrameError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl CompareError {
    /// Stable machine-readable code for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            CompareError::EmptyInput { .. } => "EMPTY_INPUT",
            CompareError::InvalidWindow { .. } => "INVALID_WINDOW",
            CompareError::Decode { .. } => "DECODE_ERROR",
            CompareError::MalformedFrame(_) => "MALFORMED_FRAME",
            CompareError::InvalidConfig(_) => "INVALID_CONFIG",
            CompareError::Internal(_) => "INTERNAL",
        }
    }

    /// The error document handed to callers, with a displayable zero score.
    pub fn to_response(&self) -> ErrorReport {
        ErrorReport {
            error: self.to_string(),
            kind: self.kind().to_string(),
            jaccard: 0.0,
        }
    }
}

/// Serialized form of a [`CompareError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
    pub kind: String,
    pub jaccard: f64,
}
