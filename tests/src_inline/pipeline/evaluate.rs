use std::cell::RefCell;

use super::*;
use crate::model::bands::QualityBand;
use crate::tokenize::{Tokenizer13a, WhitespaceTokenizer};
use crate::translate::FixedTranslator;

struct RecordingTranslator {
    reference: &'static str,
    calls: RefCell<Vec<(String, TargetLanguage)>>,
}

impl RecordingTranslator {
    fn new(reference: &'static str) -> Self {
        Self {
            reference,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl ReferenceTranslator for RecordingTranslator {
    fn translate(&self, text: &str, lang: TargetLanguage) -> Result<String, TranslateError> {
        self.calls.borrow_mut().push((text.to_string(), lang));
        Ok(self.reference.to_string())
    }
}

struct DownTranslator;

impl ReferenceTranslator for DownTranslator {
    fn translate(&self, _text: &str, _lang: TargetLanguage) -> Result<String, TranslateError> {
        Err(TranslateError::Unavailable("network down".to_string()))
    }
}

fn request(source: &str, candidate: &str) -> EvaluationRequest {
    EvaluationRequest {
        source_text: source.to_string(),
        candidate_text: candidate.to_string(),
        language: TargetLanguage::French,
        lowercase: false,
    }
}

#[test]
fn test_identical_translation_scores_highest() {
    let translator = FixedTranslator::new("Le chat est assis sur le tapis.");
    let result = evaluate(
        &request("The cat sits on the mat.", "Le chat est assis sur le tapis."),
        &translator,
        &Tokenizer13a::new(),
    )
    .unwrap();
    assert_eq!(result.bleu_score, 100.0);
    assert_eq!(result.overlap_score, 100.0);
    assert_eq!(result.combined_score, 100.0);
    assert_eq!(result.category, QualityBand::HighestQuality);
    assert_eq!(result.label, "Highest quality");
    assert_eq!(result.color_tag, "blue");
    assert_eq!(result.reference_tokens, 8);
    assert_eq!(result.candidate_tokens, 8);
}

#[test]
fn test_partial_translation_combines_both_metrics() {
    let translator = FixedTranslator::new("the quick brown fox");
    let result = evaluate(
        &request("source", "the quick brown dog"),
        &translator,
        &WhitespaceTokenizer,
    )
    .unwrap();
    assert_eq!(result.bleu_score, 59.5);
    assert_eq!(result.overlap_score, 75.0);
    assert_eq!(result.combined_score, 66.4);
    assert_eq!(result.category, QualityBand::HighestQuality);
}

#[test]
fn test_disjoint_translation_is_almost_useless() {
    let translator = FixedTranslator::new("the quick brown fox");
    let result = evaluate(
        &request("source", "cats sleep all day"),
        &translator,
        &WhitespaceTokenizer,
    )
    .unwrap();
    assert_eq!(result.bleu_score, 0.0);
    assert_eq!(result.overlap_score, 0.0);
    assert_eq!(result.combined_score, 0.0);
    assert_eq!(result.label, "Almost useless");
}

#[test]
fn test_empty_candidate_scores_zero() {
    let translator = FixedTranslator::new("Bonjour le monde");
    let result = evaluate(&request("Hello world", "   "), &translator, &Tokenizer13a::new()).unwrap();
    assert_eq!(result.bleu_score, 0.0);
    assert_eq!(result.overlap_score, 0.0);
    assert_eq!(result.combined_score, 0.0);
    assert_eq!(result.candidate_tokens, 0);
    assert_eq!(result.reference_text, "Bonjour le monde");
}

#[test]
fn test_translation_failure_becomes_evaluation_failure() {
    let err = evaluate(&request("Hello", "Bonjour"), &DownTranslator, &WhitespaceTokenizer).unwrap_err();
    assert_eq!(
        err,
        EvalError::EvaluationFailed("translation unavailable: network down".to_string())
    );
    assert_eq!(
        err.to_string(),
        "Evaluation failed: translation unavailable: network down"
    );
}

#[test]
fn test_empty_source_is_rejected_before_fetch() {
    let translator = RecordingTranslator::new("x");
    let err = evaluate(&request(" \n ", "Bonjour"), &translator, &WhitespaceTokenizer).unwrap_err();
    assert_eq!(err, EvalError::EvaluationFailed("source text is empty".to_string()));
    assert!(translator.calls.borrow().is_empty());
}

#[test]
fn test_translator_gets_trimmed_source_and_language() {
    let translator = RecordingTranslator::new("Guten Morgen");
    let mut req = request("  Good morning \n", "Guten Morgen");
    req.language = TargetLanguage::German;
    let result = evaluate(&req, &translator, &WhitespaceTokenizer).unwrap();
    assert_eq!(
        translator.calls.borrow().as_slice(),
        &[("Good morning".to_string(), TargetLanguage::German)]
    );
    assert_eq!(result.language, TargetLanguage::German);
}

#[test]
fn test_lowercase_option() {
    let translator = FixedTranslator::new("Le chat");
    let mut req = request("The cat", "le chat");
    assert_eq!(
        evaluate(&req, &translator, &WhitespaceTokenizer).unwrap().overlap_score,
        50.0
    );
    req.lowercase = true;
    assert_eq!(
        evaluate(&req, &translator, &WhitespaceTokenizer).unwrap().overlap_score,
        100.0
    );
}

#[test]
fn test_scores_have_one_decimal() {
    let translator = FixedTranslator::new("el gato negro duerme en la casa grande");
    let result = evaluate(
        &request("The black cat sleeps in the big house", "el gato duerme en una casa"),
        &translator,
        &WhitespaceTokenizer,
    )
    .unwrap();
    for v in [result.bleu_score, result.overlap_score, result.combined_score] {
        assert!((0.0..=100.0).contains(&v));
        assert_eq!(v, (v * 10.0).round() / 10.0);
    }
}

#[test]
fn test_punctuation_differences_under_13a() {
    let translator = FixedTranslator::new("Le chat est assis sur le tapis.");
    let result = evaluate(
        &request("The cat sits on the mat.", "Le chat, est assis sur le tapis !"),
        &translator,
        &Tokenizer13a::new(),
    )
    .unwrap();
    assert_eq!(result.reference_tokens, 8);
    assert_eq!(result.candidate_tokens, 9);
    assert_eq!(result.bleu_score, 51.3);
    assert_eq!(result.overlap_score, 82.4);
    assert_eq!(result.combined_score, 63.2);
    assert_eq!(result.category, QualityBand::HighestQuality);
}
