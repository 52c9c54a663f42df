//! The normalized form of one document.
//!
//! ```text
//! TokenStream
//! ├── source: String          # decoded text (NFKC'd when enabled)
//! ├── tokens: Vec<Token>      # normalized tokens, offsets into `source`
//! ├── sha256_hex: String      # digest of the token texts
//! ├── version: u32            # normalization version used
//! └── config: NormalizeConfig # config snapshot
//! ```

use serde::{Deserialize, Serialize};

use crate::config::NormalizeConfig;
use crate::token::Token;

/// Output of [`normalize`](crate::normalize).
///
/// Empty input is not an error: it yields a stream with no tokens, and the
/// caller decides what an empty document means for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenStream {
    /// Text the token offsets refer to.
    pub source: String,
    /// Tokens in document order.
    pub tokens: Vec<Token>,
    /// Digest of the token sequence, see [`hash_token_stream`](crate::hash_token_stream).
    pub sha256_hex: String,
    /// Normalization version used.
    pub version: u32,
    /// Configuration snapshot.
    pub config: NormalizeConfig,
}

impl TokenStream {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token texts, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}
