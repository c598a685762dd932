use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TargetLanguage {
    #[default]
    French,
    German,
    Spanish,
}

impl TargetLanguage {
    pub fn all() -> &'static [TargetLanguage] {
        &[
            TargetLanguage::French,
            TargetLanguage::German,
            TargetLanguage::Spanish,
        ]
    }

    /// ISO 639-1 code sent to the translation service.
    pub fn code(self) -> &'static str {
        match self {
            TargetLanguage::French => "fr",
            TargetLanguage::German => "de",
            TargetLanguage::Spanish => "es",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TargetLanguage::French => "French",
            TargetLanguage::German => "German",
            TargetLanguage::Spanish => "Spanish",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TargetLanguage::all()
            .iter()
            .copied()
            .find(|lang| {
                lang.code().eq_ignore_ascii_case(wanted) || lang.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                format!(
                    "unsupported target language: {} (use {})",
                    wanted,
                    supported_list()
                )
            })
    }
}

fn supported_list() -> String {
    TargetLanguage::all()
        .iter()
        .map(|l| l.code())
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/language.rs"]
mod tests;
