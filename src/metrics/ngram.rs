use std::collections::HashMap;

pub type NgramCounts<'a> = HashMap<&'a [String], usize>;

/// Multiset of the contiguous `n`-token windows of `tokens`. Empty when the
/// sequence is shorter than `n` or `n` is zero.
pub fn ngram_counts(tokens: &[String], n: usize) -> NgramCounts<'_> {
    let mut counts: NgramCounts<'_> = HashMap::new();
    if n == 0 {
        return counts;
    }
    for window in tokens.windows(n) {
        *counts.entry(window).or_insert(0) += 1;
    }
    counts
}

/// Number of `n`-grams in a sequence of `len` tokens.
pub fn ngram_total(len: usize, n: usize) -> usize {
    if n == 0 || len < n { 0 } else { len - n + 1 }
}

/// Sum over distinct n-grams of min(candidate count, reference count).
pub fn clipped_matches(candidate: &NgramCounts<'_>, reference: &NgramCounts<'_>) -> usize {
    let mut matches = 0usize;
    for (ngram, cand_count) in candidate {
        if let Some(ref_count) = reference.get(ngram) {
            matches += (*cand_count).min(*ref_count);
        }
    }
    matches
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/ngram.rs"]
mod tests;
