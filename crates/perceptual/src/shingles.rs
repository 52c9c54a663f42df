//! Shingling and winnowing.
//!
//! Deterministic k-shingling over a token stream, followed by winnowing to
//! select representative shingles. Both run in O(n).
//!
//! Shingle hashes are 64-bit values in wrapping arithmetic. Distinct k-grams
//! can collide; with 64-bit width the probability is negligible for document
//! sizes this engine sees, but a collision would surface as a spurious shared
//! fingerprint rather than an error.

use std::collections::VecDeque;

use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::config::TieBreak;
use crate::fingerprint::WinnowedShingle;
use crate::hash::splitmix64;

/// Compute rolling-hash shingles deterministically in O(n).
///
/// Returns `max(0, n - k + 1)` hashes; entry `i` covers tokens `i..i + k`.
/// The caller provides normalized tokens in order.
pub fn make_shingles_rolling<S: AsRef<str>>(tokens: &[S], k: usize, seed: u64) -> Vec<u64> {
    let n = tokens.len();
    if k == 0 || n < k {
        return Vec::new();
    }
    // Hash each token individually first.
    let mut th: Vec<u64> = Vec::with_capacity(n);
    th.extend(
        tokens
            .iter()
            .map(|t| xxh3_64_with_seed(t.as_ref().as_bytes(), seed)),
    );

    // The base must stay odd: an even base loses high bits of old tokens
    // once the window is wider than 64.
    const BASE: u64 = 1_000_003;
    let base = (BASE ^ splitmix64(seed)) | 1;

    // base^(k-1), used to remove the oldest token from the window.
    let mut base_km1 = 1u64;
    for _ in 1..k {
        base_km1 = base_km1.wrapping_mul(base);
    }

    let mut out = Vec::with_capacity(n - k + 1);
    let mut h = 0u64;
    for &val in th.iter().take(k) {
        h = h.wrapping_mul(base).wrapping_add(val);
    }
    out.push(h);

    // Slide the window over the rest of the tokens, O(1) per step.
    for (&old, &new) in th.iter().zip(th.iter().skip(k)) {
        h = h.wrapping_sub(old.wrapping_mul(base_km1));
        h = h.wrapping_mul(base).wrapping_add(new);
        out.push(h);
    }
    out
}

/// Winnowing via monotonic deque, O(n).
///
/// Selects the minimum hash of every window of `w` consecutive shingles.
/// Equal minima are resolved by `tie_break`, and a position that was already
/// the previous window's pick is not emitted again. `w == 0` is treated as 1
/// (every shingle is selected). A sequence shorter than the window yields its
/// single minimum; an empty sequence yields nothing.
pub fn winnow(shingles: &[u64], w: usize, tie_break: TieBreak) -> Vec<WinnowedShingle> {
    let n = shingles.len();
    if n == 0 {
        return Vec::new();
    }

    // `replaces(new, old)` is true when shingle `new` beats or ties-and-wins
    // over an earlier shingle `old`.
    let replaces = |new: u64, old: u64| match tie_break {
        TieBreak::Rightmost => new <= old,
        TieBreak::Leftmost => new < old,
    };

    let window = w.max(1);
    if window >= n {
        let mut min_idx = 0;
        for (idx, &val) in shingles.iter().enumerate().skip(1) {
            if replaces(val, shingles[min_idx]) {
                min_idx = idx;
            }
        }
        return vec![WinnowedShingle {
            hash: shingles[min_idx],
            start_idx: min_idx,
        }];
    }

    let mut out = Vec::with_capacity(2 * n / (window + 1) + 1);
    // Indices of the current window, hashes increasing front to back. The
    // front is always the window's pick.
    let mut dq: VecDeque<usize> = VecDeque::with_capacity(window);
    let mut last_picked: Option<usize> = None;

    let push = |dq: &mut VecDeque<usize>, i: usize| {
        while let Some(&j) = dq.back() {
            if replaces(shingles[i], shingles[j]) {
                dq.pop_back();
            } else {
                break;
            }
        }
        dq.push_back(i);
    };

    let emit = |dq: &VecDeque<usize>, out: &mut Vec<WinnowedShingle>, last: &mut Option<usize>| {
        if let Some(&idx) = dq.front() {
            if *last != Some(idx) {
                out.push(WinnowedShingle {
                    hash: shingles[idx],
                    start_idx: idx,
                });
                *last = Some(idx);
            }
        }
    };

    for i in 0..window {
        push(&mut dq, i);
    }
    emit(&dq, &mut out, &mut last_picked);

    for i in window..n {
        let left = i + 1 - window;
        while let Some(&j) = dq.front() {
            if j < left {
                dq.pop_front();
            } else {
                break;
            }
        }
        push(&mut dq, i);
        emit(&dq, &mut out, &mut last_picked);
    }

    out
}
