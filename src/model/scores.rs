use serde::Serialize;

use crate::model::bands::QualityBand;
use crate::model::language::TargetLanguage;

/// Outcome of one evaluation. All three scores are on the 0-100 scale,
/// rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub overlap_score: f64,
    pub bleu_score: f64,
    pub combined_score: f64,
    pub category: QualityBand,
    pub label: &'static str,
    pub color_tag: &'static str,
    pub language: TargetLanguage,
    pub reference_text: String,
    pub reference_tokens: usize,
    pub candidate_tokens: usize,
}
