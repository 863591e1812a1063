use crate::traits::{TextNormalizer, Tokenizer};

pub const TOKEN_BOUNDARY_MARKER: char = '\t';

#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseNormalizer;

impl TextNormalizer for LowercaseNormalizer {
    fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

/// Splits on a marker inserted by an upstream word segmenter.
#[derive(Debug, Clone, Copy)]
pub struct DelimiterTokenizer {
    pub delimiter: char,
}

impl DelimiterTokenizer {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn tab() -> Self {
        Self::new(TOKEN_BOUNDARY_MARKER)
    }
}

impl Default for DelimiterTokenizer {
    fn default() -> Self {
        Self::tab()
    }
}

impl Tokenizer for DelimiterTokenizer {
    fn tokenize<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        sentence
            .split(self.delimiter)
            .filter(|token| !token.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        sentence.split_whitespace().collect()
    }
}
