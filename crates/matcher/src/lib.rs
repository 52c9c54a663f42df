//! # codesim scoring (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the fingerprinting layer (`perceptual`). Given the
//! fingerprint sets of two documents it reports how much they share, and
//! where.
//!
//! ## Core Types
//!
//! - [`SimilarityResult`]: Jaccard index, shared-fingerprint count, set sizes
//!   and per-side containment.
//! - [`FingerprintMatch`]: one shared fingerprint with its byte span in each
//!   document.
//! - [`MatchRegion`]: neighbouring matches merged for display.
//! - [`ScoringConfig`]: evidence and edit-similarity knobs.
//!
//! ## Example Usage
//!
//! ```
//! use canonical::{normalize, NormalizeConfig};
//! use perceptual::{fingerprint, FingerprintConfig};
//! use matcher::score;
//!
//! let cfg = FingerprintConfig::default();
//! let a = normalize("the quick brown fox", &NormalizeConfig::default()).unwrap();
//! let b = normalize("the  quick brown fox", &NormalizeConfig::default()).unwrap();
//!
//! let fa = fingerprint(&a.texts(), &cfg).unwrap();
//! let fb = fingerprint(&b.texts(), &cfg).unwrap();
//!
//! assert_eq!(score(&fa, &fb).jaccard, 1.0);
//! ```
//!
//! All functions are pure; nothing here allocates shared state or fails.

mod edit;
pub mod engine;
pub mod types;

pub use crate::edit::edit_similarity;
pub use crate::engine::{collect_evidence, merge_regions, render_excerpts, score};
pub use crate::types::{FingerprintMatch, MatchRegion, ScoringConfig, SimilarityResult, Span};
