use thiserror::Error;

use crate::metrics::overlap::DEFAULT_ORDER;
use crate::metrics::{compute_combined, compute_overlap, round1, sentence_bleu};
use crate::model::bands::categorize;
use crate::model::language::TargetLanguage;
use crate::model::scores::ScoreResult;
use crate::tokenize::Tokenizer;
use crate::translate::{ReferenceTranslator, TranslateError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Evaluation failed: {0}")]
    EvaluationFailed(String),
}

impl From<TranslateError> for EvalError {
    fn from(err: TranslateError) -> Self {
        EvalError::EvaluationFailed(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub source_text: String,
    pub candidate_text: String,
    pub language: TargetLanguage,
    pub lowercase: bool,
}

pub fn evaluate(
    request: &EvaluationRequest,
    translator: &dyn ReferenceTranslator,
    tokenizer: &dyn Tokenizer,
) -> Result<ScoreResult, EvalError> {
    let source = request.source_text.trim();
    let candidate = request.candidate_text.trim();
    if source.is_empty() {
        return Err(EvalError::EvaluationFailed(
            "source text is empty".to_string(),
        ));
    }

    let reference = translator.translate(source, request.language)?;
    let reference = reference.trim().to_string();
    if reference.is_empty() {
        return Err(TranslateError::Unavailable("empty reference translation".to_string()).into());
    }

    let ref_tokens = tokenize_with(tokenizer, &reference, request.lowercase);
    let cand_tokens = tokenize_with(tokenizer, candidate, request.lowercase);
    tracing::debug!(
        tokenizer = tokenizer.name(),
        reference_tokens = ref_tokens.len(),
        candidate_tokens = cand_tokens.len(),
        "tokenized"
    );

    let bleu = round1(sentence_bleu(&ref_tokens, &cand_tokens));
    let overlap = compute_overlap(&ref_tokens, &cand_tokens, DEFAULT_ORDER);
    let combined = compute_combined(bleu, overlap);
    let band = categorize(combined);
    tracing::info!(bleu, overlap, combined, band = band.label(), "translation scored");

    Ok(ScoreResult {
        overlap_score: overlap,
        bleu_score: bleu,
        combined_score: combined,
        category: band,
        label: band.label(),
        color_tag: band.color_tag(),
        language: request.language,
        reference_text: reference,
        reference_tokens: ref_tokens.len(),
        candidate_tokens: cand_tokens.len(),
    })
}

fn tokenize_with(tokenizer: &dyn Tokenizer, text: &str, lowercase: bool) -> Vec<String> {
    if lowercase {
        tokenizer.tokenize(&text.to_lowercase())
    } else {
        tokenizer.tokenize(text)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/evaluate.rs"]
mod tests;
