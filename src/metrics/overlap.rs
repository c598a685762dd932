use crate::metrics::ngram::{clipped_matches, ngram_counts};
use crate::metrics::round1;

pub const DEFAULT_ORDER: usize = 1;

/// ROUGE-N F1 between `reference` and `candidate`, scaled to 0-100 and
/// rounded to one decimal.
///
/// Precision and recall are taken over token counts, not n-gram counts, so
/// for n > 1 the score only reaches 100 on very long identical inputs.
pub fn compute_overlap(reference: &[String], candidate: &[String], n: usize) -> f64 {
    if reference.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    let ref_counts = ngram_counts(reference, n);
    let cand_counts = ngram_counts(candidate, n);
    let overlap = clipped_matches(&cand_counts, &ref_counts) as f64;

    let precision = overlap / candidate.len() as f64;
    let recall = overlap / reference.len() as f64;

    if precision + recall == 0.0 {
        return 0.0;
    }
    let f1 = 2.0 * (precision * recall) / (precision + recall) * 100.0;
    round1(f1.clamp(0.0, 100.0))
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/overlap.rs"]
mod tests;
