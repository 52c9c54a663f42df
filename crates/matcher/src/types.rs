use canonical::collapse_whitespace;
use serde::{Deserialize, Serialize};

/// Result of comparing two fingerprint sets.
///
/// `jaccard` is `|A ∩ B| / |A ∪ B|`; the containment values are the share of
/// each side's fingerprints that also occur in the other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    pub jaccard: f64,
    pub matched_count: usize,
    pub total_a: usize,
    pub total_b: usize,
    pub containment_a: f64,
    pub containment_b: f64,
}

/// Half-open byte range `[start, end)` into a document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when the two ranges overlap or are directly adjacent.
    pub fn touches(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn cover(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Text under this span with whitespace runs collapsed to one space.
    ///
    /// `None` when the span is out of bounds or splits a UTF-8 sequence.
    pub fn excerpt(&self, source: &str) -> Option<String> {
        source.get(self.start..self.end).map(collapse_whitespace)
    }
}

/// One shared fingerprint, located in both documents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FingerprintMatch {
    pub hash: u64,
    /// Index of the shingle's first token in document A.
    pub token_a: usize,
    /// Index of the shingle's first token in document B.
    pub token_b: usize,
    pub span_a: Span,
    pub span_b: Span,
}

/// A run of neighbouring matches merged into one highlighted region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchRegion {
    pub span_a: Span,
    pub span_b: Span,
    /// Number of fingerprints merged into this region.
    pub fingerprints: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt_b: Option<String>,
}

/// Knobs for everything the scorer reports beyond the Jaccard value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Attach per-fingerprint match evidence and merged regions.
    pub include_evidence: bool,
    /// Upper bound on reported matches.
    pub max_evidence: usize,
    /// Compute token-level edit similarity.
    pub edit_similarity: bool,
    /// Skip edit similarity when either document has more tokens than this.
    ///
    /// The computation is quadratic, so this bounds its cost.
    pub edit_max_tokens: usize,
}

impl ScoringConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_evidence(mut self, include: bool) -> Self {
        self.include_evidence = include;
        self
    }

    pub fn with_max_evidence(mut self, max: usize) -> Self {
        self.max_evidence = max;
        self
    }

    pub fn with_edit_similarity(mut self, enabled: bool) -> Self {
        self.edit_similarity = enabled;
        self
    }

    pub fn with_edit_max_tokens(mut self, max: usize) -> Self {
        self.edit_max_tokens = max;
        self
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            include_evidence: true,
            max_evidence: 256,
            edit_similarity: true,
            edit_max_tokens: 5_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scoring_config() {
        let cfg = ScoringConfig::default();
        assert!(cfg.include_evidence);
        assert_eq!(cfg.max_evidence, 256);
        assert!(cfg.edit_similarity);
        assert_eq!(cfg.edit_max_tokens, 5_000);
    }

    #[test]
    fn scoring_config_builders_set_each_field() {
        let cfg = ScoringConfig::new()
            .with_evidence(false)
            .with_max_evidence(3)
            .with_edit_similarity(false)
            .with_edit_max_tokens(10);
        assert!(!cfg.include_evidence);
        assert_eq!(cfg.max_evidence, 3);
        assert!(!cfg.edit_similarity);
        assert_eq!(cfg.edit_max_tokens, 10);
    }

    #[test]
    fn scoring_config_partial_yaml_like_json() {
        let cfg: ScoringConfig = serde_json::from_str(r#"{"max_evidence": 8}"#).unwrap();
        assert_eq!(cfg.max_evidence, 8);
        assert!(cfg.include_evidence);
    }

    #[test]
    fn span_touching_and_cover() {
        let a = Span { start: 0, end: 4 };
        let b = Span { start: 4, end: 9 };
        let c = Span { start: 10, end: 12 };
        assert!(a.touches(&b));
        assert!(!b.touches(&c));
        assert_eq!(a.cover(&b), Span { start: 0, end: 9 });
        assert_eq!(b.len(), 5);
        assert!(Span { start: 3, end: 3 }.is_empty());
    }

    #[test]
    fn span_excerpt_collapses_whitespace() {
        let src = "int  total =\n\t0;";
        assert_eq!(
            Span { start: 0, end: src.len() }.excerpt(src).as_deref(),
            Some("int total = 0;")
        );
        assert_eq!(Span { start: 4, end: 99 }.excerpt(src), None);
        assert_eq!(Span { start: 1, end: 2 }.excerpt("é"), None);
    }

    #[test]
    fn similarity_result_serializes_camel_case() {
        let r = SimilarityResult {
            jaccard: 0.5,
            matched_count: 1,
            total_a: 2,
            total_b: 1,
            containment_a: 0.5,
            containment_b: 1.0,
        };
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["matchedCount"], 1);
        assert_eq!(json["containmentB"], 1.0);
    }
}
