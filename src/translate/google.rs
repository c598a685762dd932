//! Reference translations from the public Google Translate endpoint.
//!
//! The `translate_a/single` call answers with nested arrays rather than an
//! object; the translated text is split into segments at `body[0][i][0]`.

use std::time::Duration;

use serde_json::Value;

use crate::model::language::TargetLanguage;
use crate::translate::{ReferenceTranslator, TranslateError, TranslatorConfig};

pub struct GoogleTranslator {
    client: reqwest::blocking::Client,
    config: TranslatorConfig,
}

impl GoogleTranslator {
    pub fn new(config: TranslatorConfig) -> Result<Self, TranslateError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranslateError::Unavailable(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn url(&self) -> String {
        format!(
            "{}/translate_a/single",
            self.config.endpoint.trim_end_matches('/')
        )
    }
}

impl ReferenceTranslator for GoogleTranslator {
    fn translate(&self, text: &str, lang: TargetLanguage) -> Result<String, TranslateError> {
        let url = self.url();
        tracing::debug!(%url, lang = lang.code(), chars = text.chars().count(), "requesting reference translation");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", lang.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .map_err(|e| TranslateError::Unavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TranslateError::Unavailable(format!(
                "service returned {}: {}",
                status,
                body.trim()
            )));
        }

        let body: Value = response
            .json()
            .map_err(|e| TranslateError::Unavailable(format!("malformed response: {}", e)))?;

        let reference = parse_response(&body)?;
        tracing::info!(lang = lang.code(), chars = reference.chars().count(), "reference translation received");
        Ok(reference)
    }
}

pub fn parse_response(body: &Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::Unavailable("response has no translation segments".to_string()))?;

    let mut out = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            out.push_str(part);
        }
    }

    let out = out.trim();
    if out.is_empty() {
        return Err(TranslateError::Unavailable(
            "service returned an empty translation".to_string(),
        ));
    }
    Ok(out.to_string())
}

#[cfg(test)]
#[path = "../../tests/src_inline/translate/google.rs"]
mod tests;
