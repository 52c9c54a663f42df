//! codesim normalization layer.
//!
//! Turns raw document bytes into a deterministic token stream that the
//! fingerprinting layer can shingle.
//!
//! ## What we do
//!
//! - Strict UTF-8 decoding (`decode`), BOM tolerant
//! - Optional Unicode NFKC
//! - C-family comment masking that keeps string literals intact
//! - Tokenization at character or lexical granularity, whitespace ignored
//! - Optional lowercasing
//! - A versioned digest of the token sequence for exact-copy detection
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same text and config give
//! the same [`TokenStream`] on any machine.
//!
//! ## Offsets
//!
//! Every [`Token`] carries byte offsets into [`TokenStream::source`]. Comment
//! masking preserves byte length, so with Unicode normalization off (the
//! default) those offsets point straight into the caller's input.

mod comments;
mod config;
mod decode;
mod document;
mod error;
mod hash;
mod pipeline;
mod token;
mod whitespace;

pub use crate::comments::mask_comments;
pub use crate::config::{Granularity, NormalizeConfig};
pub use crate::decode::decode;
pub use crate::document::TokenStream;
pub use crate::error::CanonicalError;
pub use crate::hash::hash_token_stream;
pub use crate::pipeline::normalize;
pub use crate::token::{span_of, tokenize, Token};
pub use crate::whitespace::collapse_whitespace;
