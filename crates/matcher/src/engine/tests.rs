use super::*;

use canonical::{normalize, NormalizeConfig, TokenStream};
use perceptual::{fingerprint_stream, FingerprintConfig};

fn run(text: &str, w: usize) -> (TokenStream, FingerprintSet) {
    let stream = normalize(text, &NormalizeConfig::default()).expect("normalize");
    let set = fingerprint_stream(&stream, &FingerprintConfig::default().with_w(w)).expect("fingerprint");
    (stream, set)
}

fn jaccard(a: &str, b: &str) -> f64 {
    let (_, fa) = run(a, 4);
    let (_, fb) = run(b, 4);
    score(&fa, &fb).jaccard
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[test]
fn identical_documents_score_one() {
    let (_, fa) = run("the quick brown fox", 4);
    let (_, fb) = run("the quick brown fox", 4);
    let r = score(&fa, &fb);
    assert_eq!(r.jaccard, 1.0);
    assert_eq!(r.matched_count, fa.len());
    assert_eq!(r.containment_a, 1.0);
    assert_eq!(r.containment_b, 1.0);
}

#[test]
fn disjoint_vocabulary_scores_zero() {
    let (_, fa) = run("aaaa", 4);
    let (_, fb) = run("bbbb", 4);
    let r = score(&fa, &fb);
    assert_eq!(r.jaccard, 0.0);
    assert_eq!(r.matched_count, 0);
}

fn spread(alphabet: &[u8], len: usize) -> String {
    // deterministic walk that revisits letters in varying orders
    let mut state = 7usize;
    (0..len)
        .map(|_| {
            state = (state * 31 + 11) % 9973;
            alphabet[state % alphabet.len()] as char
        })
        .collect()
}

#[test]
fn disjoint_vocabulary_over_many_shingles_shares_nothing() {
    let a = spread(b"abcdefghijklm", 200);
    let b = spread(b"nopqrstuvwxyz", 200);
    for w in [1, 2, 4, 8, 16] {
        let (_, fa) = run(&a, w);
        let (_, fb) = run(&b, w);
        assert!(fa.len() > 1 && fb.len() > 1, "w={w}");
        let r = score(&fa, &fb);
        assert_eq!(r.matched_count, 0, "w={w}");
        assert_eq!(r.jaccard, 0.0, "w={w}");
    }
}

#[test]
fn near_copies_score_strictly_between() {
    let s = jaccard(
        "the quick brown fox jumps over the lazy dog",
        "the quick brown fox leaps over the lazy dog",
    );
    assert!(s > 0.0 && s < 1.0, "got {s}");
}

#[test]
fn empty_sets_score_zero() {
    let (_, empty) = run("", 4);
    let (_, short) = run("ab", 4);
    let (_, full) = run("nonempty text", 4);
    assert_eq!(score(&empty, &empty).jaccard, 0.0);
    assert_eq!(score(&empty, &full).jaccard, 0.0);
    assert_eq!(score(&full, &empty).jaccard, 0.0);
    assert_eq!(score(&short, &short).jaccard, 0.0);
    assert_eq!(score(&empty, &full).containment_a, 0.0);
}

#[test]
fn score_is_symmetric_and_bounded() {
    let docs = [
        "fn main() { println!(\"hi\"); }",
        "fn main() { println!(\"hello\"); }",
        "int main(void) { return 0; }",
        "x",
    ];
    for a in docs {
        for b in docs {
            let ab = jaccard(a, b);
            let ba = jaccard(b, a);
            assert_eq!(ab, ba, "{a:?} vs {b:?}");
            assert!((0.0..=1.0).contains(&ab));
        }
    }
}

#[test]
fn containment_tracks_embedded_copy() {
    let small = "for (i = 0; i < n; i++) sum += a[i];";
    let big = format!("int f(int* a, int n) {{ int sum = 0; {small} return sum; }}");
    let (_, fs) = run(small, 4);
    let (_, fb) = run(&big, 4);
    let r = score(&fs, &fb);
    assert!(r.containment_a > r.containment_b);
    assert!(r.containment_a > 0.5, "got {}", r.containment_a);
}

#[test]
fn evidence_spans_cover_identical_text() {
    let a_src = "int total = 0;\nfor (int i = 0; i < n; i++) { total += v[i]; }\n";
    let b_src = "// copied\nint  total=0; for(int i=0;i<n;i++){total+=v[i];} return total;";
    let (ta, fa) = run(a_src, 4);
    let (tb, fb) = run(b_src, 4);

    let matches = collect_evidence(&fa, &ta.tokens, &fb, &tb.tokens, 256);
    assert!(!matches.is_empty());
    for m in &matches {
        assert!(fa.contains(m.hash) && fb.contains(m.hash));
        let text_a = &a_src[m.span_a.start..m.span_a.end];
        let text_b = &b_src[m.span_b.start..m.span_b.end];
        assert_eq!(squash(text_a), squash(text_b), "{m:?}");
    }
    assert!(matches.windows(2).all(|p| p[0].token_a < p[1].token_a));
}

#[test]
fn evidence_reports_each_hash_once_and_respects_limit() {
    let src = "abcdabcdabcdabcdabcd";
    let (ta, fa) = run(src, 1);
    let (tb, fb) = run(src, 1);

    let all = collect_evidence(&fa, &ta.tokens, &fb, &tb.tokens, usize::MAX);
    let mut hashes: Vec<u64> = all.iter().map(|m| m.hash).collect();
    hashes.sort_unstable();
    hashes.dedup();
    assert_eq!(hashes.len(), all.len());
    assert_eq!(all.len(), fa.len());

    let capped = collect_evidence(&fa, &ta.tokens, &fb, &tb.tokens, 2);
    assert_eq!(capped.len(), 2);
    assert!(collect_evidence(&fa, &ta.tokens, &fb, &tb.tokens, 0).is_empty());
}

#[test]
fn evidence_empty_when_nothing_shared() {
    let (ta, fa) = run("aaaa aaaa", 4);
    let (tb, fb) = run("bbbb bbbb", 4);
    assert!(collect_evidence(&fa, &ta.tokens, &fb, &tb.tokens, 10).is_empty());
}

#[test]
fn evidence_skips_positions_outside_token_slice() {
    let (ta, fa) = run("the quick brown fox", 4);
    let (_, fb) = run("the quick brown fox", 4);
    assert!(collect_evidence(&fa, &ta.tokens, &fb, &[], 10).is_empty());
}

fn m(a: (usize, usize), b: (usize, usize)) -> FingerprintMatch {
    FingerprintMatch {
        hash: 0,
        token_a: a.0,
        token_b: b.0,
        span_a: Span { start: a.0, end: a.1 },
        span_b: Span { start: b.0, end: b.1 },
    }
}

#[test]
fn merge_regions_coalesces_touching_runs() {
    let matches = [
        m((0, 4), (10, 14)),
        m((2, 6), (12, 16)),
        m((6, 9), (16, 19)),
        m((20, 24), (40, 44)),
        // touches in A but not in B
        m((24, 28), (0, 4)),
    ];
    let regions = merge_regions(&matches);
    assert_eq!(regions.len(), 3);
    assert_eq!(regions[0].span_a, Span { start: 0, end: 9 });
    assert_eq!(regions[0].span_b, Span { start: 10, end: 19 });
    assert_eq!(regions[0].fingerprints, 3);
    assert_eq!(regions[1].fingerprints, 1);
    assert_eq!(regions[2].span_b, Span { start: 0, end: 4 });
}

#[test]
fn merge_regions_empty() {
    assert!(merge_regions(&[]).is_empty());
}

#[test]
fn rendered_excerpts_match_across_layouts() {
    let a_src = "total += v[i];\nreturn total;";
    let b_src = "total  +=  v[i];   return total;";
    let (ta, fa) = run(a_src, 2);
    let (tb, fb) = run(b_src, 2);

    let matches = collect_evidence(&fa, &ta.tokens, &fb, &tb.tokens, 256);
    let mut regions = merge_regions(&matches);
    assert!(regions.iter().all(|r| r.excerpt_a.is_none()));

    render_excerpts(&mut regions, &ta.source, &tb.source);
    assert!(!regions.is_empty());
    for r in &regions {
        let ea = r.excerpt_a.as_deref().expect("excerpt a");
        let eb = r.excerpt_b.as_deref().expect("excerpt b");
        assert_eq!(squash(ea), squash(eb));
        assert!(!ea.contains("  ") && !ea.contains('\n'));
    }
}
