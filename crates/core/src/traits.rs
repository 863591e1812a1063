/// Case folding applied to the whole document before sentence splitting.
pub trait TextNormalizer {
    fn normalize(&self, text: &str) -> String;
}

/// Splits one sentence into word tokens.
///
/// Token quality drives the similarity weights, so callers with a proper
/// word segmenter should plug it in here.
pub trait Tokenizer {
    fn tokenize<'a>(&self, sentence: &'a str) -> Vec<&'a str>;
}

