use crate::error::ExtractionError;
use crate::traits::Tokenizer;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    pub tokens: BTreeSet<String>,
    /// Raw token count, duplicates included.
    pub token_count: usize,
}

impl WordSet {
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = BTreeSet::new();
        let mut token_count = 0;
        for token in tokens {
            token_count += 1;
            set.insert(token.to_string());
        }

        Self {
            tokens: set,
            token_count,
        }
    }

    pub fn distinct_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn common_tokens(&self, other: &WordSet) -> usize {
        self.tokens.intersection(&other.tokens).count()
    }
}

pub fn index_word_sets<S, T>(sentences: &[S], tokenizer: &T) -> Result<Vec<WordSet>, ExtractionError>
where
    S: AsRef<str>,
    T: Tokenizer,
{
    if sentences.is_empty() {
        return Err(ExtractionError::NoSentences);
    }

    Ok(sentences
        .iter()
        .map(|sentence| WordSet::from_tokens(tokenizer.tokenize(sentence.as_ref())))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::{DelimiterTokenizer, WhitespaceTokenizer};

    #[test]
    fn counts_duplicates_but_stores_distinct_tokens() {
        let sets = index_word_sets(&["the cat saw the dog"], &WhitespaceTokenizer).unwrap();
        assert_eq!(sets[0].token_count, 5);
        assert_eq!(sets[0].distinct_count(), 4);
    }

    #[test]
    fn uses_the_injected_tokenizer() {
        let sets = index_word_sets(&["graph\tranking\tgraph"], &DelimiterTokenizer::tab()).unwrap();
        assert_eq!(sets[0].token_count, 3);
        assert!(sets[0].tokens.contains("ranking"));
    }

    #[test]
    fn common_tokens_counts_shared_distinct_words() {
        let a = WordSet::from_tokens(["a", "b", "b", "c"]);
        let b = WordSet::from_tokens(["b", "c", "d"]);
        assert_eq!(a.common_tokens(&b), 2);
        assert_eq!(b.common_tokens(&a), 2);
    }

    #[test]
    fn empty_sentence_list_fails() {
        let sentences: Vec<String> = Vec::new();
        let result = index_word_sets(&sentences, &WhitespaceTokenizer);
        assert!(matches!(result, Err(ExtractionError::NoSentences)));
    }
}
