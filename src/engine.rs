use canonical::{decode, normalize, NormalizeConfig, TokenStream};
use matcher::{
    collect_evidence, edit_similarity, merge_regions, render_excerpts, score, FingerprintMatch,
    MatchRegion, ScoringConfig, SimilarityResult,
};
use perceptual::{fingerprint, FingerprintConfig, FingerprintSet};
use serde::{Deserialize, Serialize};

use crate::error::{CompareError, DocumentSide};

/// Everything a comparison needs besides the two documents and the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub normalize: NormalizeConfig,
    /// `w` is replaced by the per-request window.
    pub fingerprint: FingerprintConfig,
    pub scoring: ScoringConfig,
    /// Process the two documents on separate rayon workers.
    pub parallel: bool,
    /// Combined input size below which the documents are processed inline.
    pub parallel_threshold_bytes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            normalize: NormalizeConfig::default(),
            fingerprint: FingerprintConfig::default(),
            scoring: ScoringConfig::default(),
            parallel: true,
            parallel_threshold_bytes: 64 * 1024,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), CompareError> {
        self.normalize
            .validate()
            .map_err(|e| CompareError::InvalidConfig(e.to_string()))?;
        self.fingerprint
            .validate()
            .map_err(|e| CompareError::InvalidConfig(e.to_string()))?;
        Ok(())
    }

    fn run_parallel(&self, a_len: usize, b_len: usize) -> bool {
        self.parallel && a_len.saturating_add(b_len) >= self.parallel_threshold_bytes
    }
}

/// Outcome of a successful comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityReport {
    pub tokens_a: usize,
    pub tokens_b: usize,
    pub fingerprints_a: usize,
    pub fingerprints_b: usize,
    pub jaccard: f64,
    pub matched_count: usize,
    pub containment_a: f64,
    pub containment_b: f64,
    /// Both documents normalize to the same token sequence.
    pub exact_match: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_similarity: Option<f64>,
    pub window: usize,
    pub k: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<FingerprintMatch>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<MatchRegion>>,
}

impl SimilarityReport {
    pub fn result(&self) -> SimilarityResult {
        SimilarityResult {
            jaccard: self.jaccard,
            matched_count: self.matched_count,
            total_a: self.fingerprints_a,
            total_b: self.fingerprints_b,
            containment_a: self.containment_a,
            containment_b: self.containment_b,
        }
    }
}

fn check_window(window: i64) -> Result<usize, CompareError> {
    usize::try_from(window)
        .ok()
        .filter(|w| *w >= 1)
        .ok_or_else(|| CompareError::InvalidWindow {
            window: window.to_string(),
        })
}

/// Run `fa` and `fb`, on two rayon workers when `parallel` is set.
fn both<A, B, RA, RB>(parallel: bool, fa: A, fb: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if parallel {
        rayon::join(fa, fb)
    } else {
        (fa(), fb())
    }
}

fn fingerprint_tokens(stream: &TokenStream, cfg: &FingerprintConfig) -> Result<FingerprintSet, CompareError> {
    fingerprint(&stream.texts(), cfg).map_err(|e| CompareError::Internal(e.to_string()))
}

fn normalize_side(
    text: &str,
    cfg: &NormalizeConfig,
) -> Result<TokenStream, CompareError> {
    normalize(text, cfg).map_err(|e| CompareError::InvalidConfig(e.to_string()))
}

fn decode_side(bytes: &[u8], side: DocumentSide) -> Result<&str, CompareError> {
    decode(bytes).map_err(|source| CompareError::Decode { side, source })
}

/// Compare two raw documents.
///
/// Checks run in this order: window, configuration, UTF-8 decoding, empty
/// documents. Fingerprinting starts only after all of them pass.
pub fn compare_bytes(
    a: &[u8],
    b: &[u8],
    window: i64,
    cfg: &EngineConfig,
) -> Result<SimilarityReport, CompareError> {
    let w = check_window(window)?;
    cfg.validate()?;
    let text_a = decode_side(a, DocumentSide::A)?;
    let text_b = decode_side(b, DocumentSide::B)?;
    compare_texts(text_a, text_b, w, cfg, true)
}

/// Compare two documents that are already text.
pub fn compare(a: &str, b: &str, window: usize, cfg: &EngineConfig) -> Result<SimilarityReport, CompareError> {
    let w = check_window(i64::try_from(window).unwrap_or(i64::MAX))?;
    cfg.validate()?;
    compare_texts(a, b, w, cfg, true)
}

/// Jaccard similarity that never fails.
///
/// Empty documents score 0.0 instead of being rejected; an invalid window or
/// configuration also yields the zero result.
pub fn similarity(a: &str, b: &str, window: usize, cfg: &EngineConfig) -> SimilarityResult {
    let run = || -> Result<SimilarityResult, CompareError> {
        let w = check_window(i64::try_from(window).unwrap_or(i64::MAX))?;
        cfg.validate()?;
        Ok(compare_texts(a, b, w, cfg, false)?.result())
    };
    run().unwrap_or_else(|err| {
        tracing::debug!(kind = err.kind(), error = %err, "similarity defaulted to zero");
        SimilarityResult::default()
    })
}

/// Normalize and fingerprint a single document.
pub fn fingerprint_document(
    text: &str,
    window: usize,
    cfg: &EngineConfig,
) -> Result<(TokenStream, FingerprintSet), CompareError> {
    let w = check_window(i64::try_from(window).unwrap_or(i64::MAX))?;
    cfg.validate()?;
    let stream = normalize_side(text, &cfg.normalize)?;
    let set = fingerprint_tokens(&stream, &cfg.fingerprint.clone().with_w(w))?;
    Ok((stream, set))
}

fn compare_texts(
    a: &str,
    b: &str,
    window: usize,
    cfg: &EngineConfig,
    reject_empty: bool,
) -> Result<SimilarityReport, CompareError> {
    let span = tracing::debug_span!("compare", bytes_a = a.len(), bytes_b = b.len(), window);
    let _guard = span.enter();

    let parallel = cfg.run_parallel(a.len(), b.len());
    let (stream_a, stream_b) = both(
        parallel,
        || normalize_side(a, &cfg.normalize),
        || normalize_side(b, &cfg.normalize),
    );
    let (stream_a, stream_b) = (stream_a?, stream_b?);

    if reject_empty {
        let side = match (stream_a.is_empty(), stream_b.is_empty()) {
            (true, true) => Some(DocumentSide::Both),
            (true, false) => Some(DocumentSide::A),
            (false, true) => Some(DocumentSide::B),
            (false, false) => None,
        };
        if let Some(side) = side {
            return Err(CompareError::EmptyInput { side });
        }
    }

    let fp_cfg = cfg.fingerprint.clone().with_w(window);
    let (set_a, set_b) = both(
        parallel,
        || fingerprint_tokens(&stream_a, &fp_cfg),
        || fingerprint_tokens(&stream_b, &fp_cfg),
    );
    let (set_a, set_b) = (set_a?, set_b?);

    let result = score(&set_a, &set_b);
    tracing::debug!(
        tokens_a = stream_a.len(),
        tokens_b = stream_b.len(),
        fingerprints_a = result.total_a,
        fingerprints_b = result.total_b,
        matched = result.matched_count,
        jaccard = result.jaccard,
        parallel,
        "comparison scored"
    );

    let scoring = &cfg.scoring;
    let edit = if scoring.edit_similarity {
        edit_similarity(&stream_a.texts(), &stream_b.texts(), scoring.edit_max_tokens)
    } else {
        None
    };

    let (matches, regions) = if scoring.include_evidence {
        let matches = collect_evidence(
            &set_a,
            &stream_a.tokens,
            &set_b,
            &stream_b.tokens,
            scoring.max_evidence,
        );
        let mut regions = merge_regions(&matches);
        render_excerpts(&mut regions, &stream_a.source, &stream_b.source);
        (Some(matches), Some(regions))
    } else {
        (None, None)
    };

    Ok(SimilarityReport {
        tokens_a: stream_a.len(),
        tokens_b: stream_b.len(),
        fingerprints_a: result.total_a,
        fingerprints_b: result.total_b,
        jaccard: result.jaccard,
        matched_count: result.matched_count,
        containment_a: result.containment_a,
        containment_b: result.containment_b,
        exact_match: !stream_a.is_empty() && stream_a.sha256_hex == stream_b.sha256_hex,
        edit_similarity: edit,
        window,
        k: fp_cfg.k,
        matches,
        regions,
    })
}
