pub mod bleu;
pub mod ngram;
pub mod overlap;

pub use bleu::sentence_bleu;
pub use overlap::compute_overlap;

/// Rounds to one decimal place, the precision every reported score uses.
///
/// Goes through the formatter so the exact binary value is rounded and exact
/// ties go to even: 6.25 becomes 6.2 and 9.95 (stored just below) becomes 9.9.
pub fn round1(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    format!("{:.1}", v).parse().unwrap_or(v)
}

/// Harmonic mean of the BLEU and overlap scores, rounded to one decimal.
/// A near-zero score on either axis drags the result down with it.
pub fn compute_combined(bleu: f64, overlap: f64) -> f64 {
    if bleu + overlap == 0.0 {
        return 0.0;
    }
    round1(2.0 * (bleu * overlap) / (bleu + overlap))
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/mod.rs"]
mod tests;
