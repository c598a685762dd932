use crate::metrics::ngram::{clipped_matches, ngram_counts, ngram_total};

pub const MAX_NGRAM_ORDER: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BleuStats {
    pub correct: [usize; MAX_NGRAM_ORDER],
    pub total: [usize; MAX_NGRAM_ORDER],
    pub sys_len: usize,
    pub ref_len: usize,
}

pub fn bleu_stats(reference: &[String], candidate: &[String]) -> BleuStats {
    let mut stats = BleuStats {
        sys_len: candidate.len(),
        ref_len: reference.len(),
        ..Default::default()
    };
    for n in 1..=MAX_NGRAM_ORDER {
        let cand_counts = ngram_counts(candidate, n);
        let ref_counts = ngram_counts(reference, n);
        stats.correct[n - 1] = clipped_matches(&cand_counts, &ref_counts);
        stats.total[n - 1] = ngram_total(candidate.len(), n);
    }
    stats
}

/// Sentence-level BLEU on the 0-100 scale against a single reference.
///
/// Uses the usual sentence defaults: exponential smoothing of orders with no
/// matches (each one halves the pseudo-count of the previous) and an
/// effective order capped at the longest n-gram the candidate has. Returns
/// 0.0 when either side is empty or no unigram matches.
pub fn sentence_bleu(reference: &[String], candidate: &[String]) -> f64 {
    if reference.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    score_from_stats(&bleu_stats(reference, candidate))
}

pub fn score_from_stats(stats: &BleuStats) -> f64 {
    if stats.sys_len == 0 || stats.ref_len == 0 {
        return 0.0;
    }
    // No matches at any order: smoothing must not lift this above zero.
    if stats.correct.iter().all(|&c| c == 0) {
        return 0.0;
    }

    let mut precisions = [0.0f64; MAX_NGRAM_ORDER];
    let mut smooth = 1.0f64;
    let mut eff_order = 0usize;

    for n in 1..=MAX_NGRAM_ORDER {
        let total = stats.total[n - 1];
        if total == 0 {
            break;
        }
        eff_order = n;
        let correct = stats.correct[n - 1];
        precisions[n - 1] = if correct == 0 {
            smooth *= 2.0;
            100.0 / (smooth * total as f64)
        } else {
            100.0 * correct as f64 / total as f64
        };
    }

    if eff_order == 0 {
        return 0.0;
    }

    let log_sum: f64 = precisions[..eff_order].iter().map(|p| p.ln()).sum();
    let mean = (log_sum / eff_order as f64).exp();

    (brevity_penalty(stats.sys_len, stats.ref_len) * mean).clamp(0.0, 100.0)
}

pub fn brevity_penalty(sys_len: usize, ref_len: usize) -> f64 {
    if sys_len == 0 {
        0.0
    } else if sys_len < ref_len {
        (1.0 - ref_len as f64 / sys_len as f64).exp()
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/bleu.rs"]
mod tests;
