pub mod google;

use thiserror::Error;

use crate::model::language::TargetLanguage;

pub use google::GoogleTranslator;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("translation unavailable: {0}")]
    Unavailable(String),
}

/// Source of the machine reference a candidate is scored against.
pub trait ReferenceTranslator {
    fn translate(&self, text: &str, lang: TargetLanguage) -> Result<String, TranslateError>;
}

#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Returns a reference supplied up front, for offline scoring.
#[derive(Debug, Clone)]
pub struct FixedTranslator {
    reference: String,
}

impl FixedTranslator {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}

impl ReferenceTranslator for FixedTranslator {
    fn translate(&self, _text: &str, _lang: TargetLanguage) -> Result<String, TranslateError> {
        let reference = self.reference.trim();
        if reference.is_empty() {
            return Err(TranslateError::Unavailable(
                "reference translation is empty".to_string(),
            ));
        }
        Ok(reference.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/translate/mod.rs"]
mod tests;
