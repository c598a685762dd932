pub mod tok13a;

pub use tok13a::Tokenizer13a;

/// Turns a sentence into the ordered token sequence every metric works on.
pub trait Tokenizer {
    fn name(&self) -> &'static str;
    fn tokenize(&self, text: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn name(&self) -> &'static str {
        "none"
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|s| s.to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TokenizerKind {
    #[default]
    #[value(name = "13a")]
    Mteval13a,
    #[value(name = "none")]
    Whitespace,
}

impl TokenizerKind {
    pub fn build(self) -> Box<dyn Tokenizer> {
        match self {
            TokenizerKind::Mteval13a => Box::new(Tokenizer13a::new()),
            TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/tokenize/mod.rs"]
mod tests;
