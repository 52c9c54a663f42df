use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use canonical::{span_of, Token};
use perceptual::FingerprintSet;

use crate::types::{FingerprintMatch, MatchRegion, SimilarityResult, Span};

#[cfg(test)]
mod tests;

/// Jaccard similarity of two fingerprint sets.
///
/// Walks both sorted hash lists once, O(|A| + |B|). Two empty sets score 0.0
/// rather than dividing by zero.
pub fn score(a: &FingerprintSet, b: &FingerprintSet) -> SimilarityResult {
    let matched = intersection_count(a.hashes(), b.hashes());
    let total_a = a.len();
    let total_b = b.len();
    let union = total_a + total_b - matched;

    let ratio = |num: usize, den: usize| if den == 0 { 0.0 } else { num as f64 / den as f64 };

    SimilarityResult {
        jaccard: ratio(matched, union),
        matched_count: matched,
        total_a,
        total_b,
        containment_a: ratio(matched, total_a),
        containment_b: ratio(matched, total_b),
    }
}

fn intersection_count(a: &[u64], b: &[u64]) -> usize {
    let (mut i, mut j, mut n) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                n += 1;
                i += 1;
                j += 1;
            }
        }
    }
    n
}

/// Byte span of the shingle starting at token `idx`.
fn shingle_span(tokens: &[Token], idx: usize, k: usize) -> Option<Span> {
    let last = idx.checked_add(k.checked_sub(1)?)?;
    let (start, end) = span_of(tokens, idx, last)?;
    Some(Span { start, end })
}

/// Locate every shared fingerprint in both documents.
///
/// Each shared hash is reported once, at its first selected position in each
/// document, ordered by position in A and capped at `limit`. The token slices
/// must be the ones the sets were computed from; picks that fall outside them
/// are skipped.
pub fn collect_evidence(
    a: &FingerprintSet,
    a_tokens: &[Token],
    b: &FingerprintSet,
    b_tokens: &[Token],
    limit: usize,
) -> Vec<FingerprintMatch> {
    if limit == 0 || a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut first_in_b: HashMap<u64, usize> = HashMap::with_capacity(b.selected.len());
    for pick in &b.selected {
        first_in_b.entry(pick.hash).or_insert(pick.start_idx);
    }

    let mut seen: HashSet<u64> = HashSet::new();
    let mut out = Vec::new();
    for pick in &a.selected {
        if out.len() >= limit {
            tracing::debug!(limit, "match evidence truncated");
            break;
        }
        let Some(&token_b) = first_in_b.get(&pick.hash) else {
            continue;
        };
        if !seen.insert(pick.hash) {
            continue;
        }
        let (Some(span_a), Some(span_b)) = (
            shingle_span(a_tokens, pick.start_idx, a.meta.k),
            shingle_span(b_tokens, token_b, b.meta.k),
        ) else {
            continue;
        };
        out.push(FingerprintMatch {
            hash: pick.hash,
            token_a: pick.start_idx,
            token_b,
            span_a,
            span_b,
        });
    }
    out
}

/// Coalesce consecutive matches whose spans touch in both documents.
pub fn merge_regions(matches: &[FingerprintMatch]) -> Vec<MatchRegion> {
    let mut regions: Vec<MatchRegion> = Vec::new();
    for m in matches {
        if let Some(cur) = regions.last_mut() {
            if cur.span_a.touches(&m.span_a) && cur.span_b.touches(&m.span_b) {
                cur.span_a = cur.span_a.cover(&m.span_a);
                cur.span_b = cur.span_b.cover(&m.span_b);
                cur.fingerprints += 1;
                continue;
            }
        }
        regions.push(MatchRegion {
            span_a: m.span_a,
            span_b: m.span_b,
            fingerprints: 1,
            excerpt_a: None,
            excerpt_b: None,
        });
    }
    regions
}

/// Fill in each region's whitespace-collapsed text from the two sources the
/// spans point into.
pub fn render_excerpts(regions: &mut [MatchRegion], source_a: &str, source_b: &str) {
    for region in regions {
        region.excerpt_a = region.span_a.excerpt(source_a);
        region.excerpt_b = region.span_b.excerpt(source_b);
    }
}
