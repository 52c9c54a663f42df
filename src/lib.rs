//! codesim: source-code similarity by winnowed fingerprints.
//!
//! This crate stitches the normalization (`canonical`), fingerprinting
//! (`perceptual`) and scoring (`matcher`) layers into a single comparison
//! entry point, and provides the length-prefixed wire format used by the
//! `codesim` binary.
//!
//! ```
//! use codesim::{compare, EngineConfig};
//!
//! let cfg = EngineConfig::default();
//! let report = compare(
//!     "the quick brown fox jumps",
//!     "the quick brown fox leaps",
//!     4,
//!     &cfg,
//! )
//! .unwrap();
//! assert!(report.jaccard > 0.0 && report.jaccard < 1.0);
//! ```
//!
//! Comparisons hold no shared state; any number may run concurrently.

pub mod config;
mod engine;
mod error;
pub mod wire;

pub use canonical::{
    collapse_whitespace, decode, hash_token_stream, mask_comments, normalize, span_of, tokenize,
    CanonicalError, Granularity, NormalizeConfig, Token, TokenStream,
};
pub use matcher::{
    collect_evidence, edit_similarity, merge_regions, render_excerpts, score, FingerprintMatch,
    MatchRegion, ScoringConfig, SimilarityResult, Span,
};
pub use perceptual::{
    fingerprint, make_shingles_rolling, winnow, FingerprintConfig, FingerprintMeta,
    FingerprintSet, PerceptualError, TieBreak, WinnowedShingle,
};

pub use crate::config::{CodesimConfig, ConfigLoadError};
pub use crate::engine::{
    compare, compare_bytes, fingerprint_document, similarity, EngineConfig, SimilarityReport,
};
pub use crate::error::{CompareError, DocumentSide, ErrorReport};
pub use crate::wire::{encode_frame, parse_frame, window_from_env, Frame, FrameError};
