//! Token-level edit similarity.

/// `1 - levenshtein(a, b) / max(|a|, |b|)` over token texts.
///
/// Two empty sequences score 0.0, consistent with Jaccard on empty sets.
/// Returns `None` when either side is longer than `max_tokens`.
pub fn edit_similarity<A, B>(a: &[A], b: &[B], max_tokens: usize) -> Option<f64>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if a.len() > max_tokens || b.len() > max_tokens {
        return None;
    }
    let longest = a.len().max(b.len());
    if longest == 0 {
        return Some(0.0);
    }
    let distance = levenshtein(a, b);
    Some(1.0 - distance as f64 / longest as f64)
}

/// Two-row dynamic programme, O(n·m) time and O(m) memory.
fn levenshtein<A, B>(a: &[A], b: &[B]) -> usize
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, ta) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, tb) in b.iter().enumerate() {
            let cost = usize::from(ta.as_ref() != tb.as_ref());
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
