//! # codesim fingerprinting
//!
//! Turns a normalized token stream into a compact set of fingerprints that
//! survives local edits: two documents sharing a long enough run of tokens
//! always share at least one fingerprint.
//!
//! ## Contract
//!
//! - Consumes tokens produced by the normalization layer; it never
//!   normalizes or tokenizes itself.
//! - The API is a pure function of `(tokens, config)` with no I/O and no
//!   reliance on clocks or global process state.
//!
//! ## Pipeline
//!
//! 1.  **Shingling**: every run of `k` consecutive tokens is hashed into a
//!     64-bit value with a rolling hash, so each step costs O(1).
//!
//! 2.  **Winnowing**: a window of `w` consecutive shingle hashes slides over
//!     the stream and the minimum of each window is kept. A monotonic deque
//!     keeps this O(n). Any shared run of at least `w + k - 1` tokens
//!     produces a common fingerprint.
//!
//! ## Example Usage
//!
//! ```
//! use perceptual::{fingerprint, FingerprintConfig};
//!
//! let tokens = vec!["t", "h", "e", "q", "u", "i", "c", "k", "f", "o", "x"];
//! let config = FingerprintConfig::default().with_k(3).with_w(2);
//!
//! let set = fingerprint(&tokens, &config).unwrap();
//!
//! assert!(!set.is_empty());
//! assert_eq!(set.meta.k, 3);
//! ```
pub mod config;
pub mod fingerprint;
mod hash;
mod shingles;

pub use crate::config::{FingerprintConfig, PerceptualError, TieBreak};
pub use crate::fingerprint::{FingerprintMeta, FingerprintSet, WinnowedShingle};
pub use crate::shingles::{make_shingles_rolling, winnow};

/// Current fingerprint algorithm version for this crate.
pub const FINGERPRINT_VERSION: u16 = 1;

/// Human-readable algorithm identifier.
pub const FINGERPRINT_ALGORITHM: &str = "rolling_xxh3+winnow_v1";

/// Compute the fingerprint set of a token sequence (shingle → winnow).
///
/// A sequence shorter than `k` has no shingles and yields an empty set.
pub fn fingerprint<S>(tokens: &[S], cfg: &FingerprintConfig) -> Result<FingerprintSet, PerceptualError>
where
    S: AsRef<str>,
{
    cfg.validate()?;

    let mut shingles = make_shingles_rolling(tokens, cfg.k, cfg.seed);
    let selected = winnow(&shingles, cfg.w, cfg.tie_break);

    let mut hashes: Vec<u64> = Vec::with_capacity(selected.len());
    hashes.extend(selected.iter().map(|s| s.hash));
    hashes.sort_unstable();
    hashes.dedup();

    let shingle_count = shingles.len();
    if !cfg.include_intermediates {
        shingles = Vec::new();
    }

    tracing::trace!(
        tokens = tokens.len(),
        shingles = shingle_count,
        selected = selected.len(),
        distinct = hashes.len(),
        "fingerprinted token stream"
    );

    Ok(FingerprintSet {
        selected,
        hashes,
        shingles,
        meta: FingerprintMeta {
            fingerprint_version: FINGERPRINT_VERSION,
            algorithm_name: FINGERPRINT_ALGORITHM.to_string(),
            k: cfg.k,
            w: cfg.w,
            seed: cfg.seed,
            tie_break: cfg.tie_break,
            token_count: tokens.len(),
            shingle_count,
            config_version: cfg.version,
        },
    })
}

/// Fingerprint a normalized [`canonical::TokenStream`] directly.
#[cfg(feature = "with_canonical")]
pub fn fingerprint_stream(
    stream: &canonical::TokenStream,
    cfg: &FingerprintConfig,
) -> Result<FingerprintSet, PerceptualError> {
    fingerprint(&stream.texts(), cfg)
}
