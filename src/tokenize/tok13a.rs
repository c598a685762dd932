use once_cell::sync::Lazy;
use regex::Regex;

use crate::tokenize::Tokenizer;

// mteval-v13a rules, applied in order.
static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        // ASCII punctuation and symbols
        (r"([\{-~\[-` -&\(-\+:-@/])", " ${1} "),
        // period and comma unless preceded by a digit
        (r"([^0-9])([\.,])", "${1} ${2} "),
        // period and comma unless followed by a digit
        (r"([\.,])([^0-9])", " ${1} ${2}"),
        // dash when preceded by a digit
        (r"([0-9])(-)", "${1} ${2} "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("13a rule patterns are constant and valid"),
            replacement,
        )
    })
    .collect()
});

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer13a;

impl Tokenizer13a {
    pub fn new() -> Self {
        Self
    }

    /// Normalized, space-joined form of `text`.
    pub fn normalize(&self, text: &str) -> String {
        let mut line = text
            .replace("<skipped>", "")
            .replace("-\n", "")
            .replace('\n', " ");

        if line.contains('&') {
            line = line
                .replace("&quot;", "\"")
                .replace("&amp;", "&")
                .replace("&lt;", "<")
                .replace("&gt;", ">");
        }

        let mut line = format!(" {} ", line);
        for (re, replacement) in RULES.iter() {
            line = re.replace_all(&line, *replacement).into_owned();
        }
        line.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Tokenizer for Tokenizer13a {
    fn name(&self) -> &'static str {
        "13a"
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/tokenize/tok13a.rs"]
mod tests;
