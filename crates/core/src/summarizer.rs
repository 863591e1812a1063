use crate::error::ExtractionError;
use crate::graph::SimilarityGraph;
use crate::models::{ExtractionOptions, RankedSentence, RankingSummary};
use crate::ranker::Ranker;
use crate::sentences::split_sentences;
use crate::tokenize::{LowercaseNormalizer, WhitespaceTokenizer};
use crate::traits::{TextNormalizer, Tokenizer};
use crate::wordset::index_word_sets;
use std::path::Path;
use tracing::debug;

/// Pairs every index with its score, best first, ties going to the lower
/// index, and keeps at most `k` of them.
pub fn select_top_k(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    let mut ranked = scores.iter().copied().enumerate().collect::<Vec<_>>();
    ranked.sort_by(|left, right| right.1.total_cmp(&left.1).then(left.0.cmp(&right.0)));
    ranked.truncate(k);
    ranked
}

pub fn load_document(path: &Path) -> Result<String, ExtractionError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Extracts key sentences from a document.
///
/// Holds only configuration and the injected text capabilities; every
/// intermediate structure lives for a single call, so one instance can be
/// reused across unrelated documents.
#[derive(Debug, Clone)]
pub struct TextRanker<N = LowercaseNormalizer, T = WhitespaceTokenizer> {
    options: ExtractionOptions,
    normalizer: N,
    tokenizer: T,
}

impl TextRanker {
    pub fn new(options: ExtractionOptions) -> Result<Self, ExtractionError> {
        Self::with_capabilities(options, LowercaseNormalizer, WhitespaceTokenizer)
    }
}

impl<N, T> TextRanker<N, T>
where
    N: TextNormalizer,
    T: Tokenizer,
{
    pub fn with_capabilities(
        options: ExtractionOptions,
        normalizer: N,
        tokenizer: T,
    ) -> Result<Self, ExtractionError> {
        options.validate()?;
        Ok(Self {
            options,
            normalizer,
            tokenizer,
        })
    }

    pub fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    /// Returns the text of the `top_k` best sentences, highest score first.
    pub fn extract_key_sentences(
        &self,
        input: &str,
        top_k: usize,
    ) -> Result<Vec<String>, ExtractionError> {
        let summary = self.rank_sentences(input, top_k)?;
        Ok(summary
            .sentences
            .into_iter()
            .map(|sentence| sentence.text)
            .collect())
    }

    pub fn rank_sentences(
        &self,
        input: &str,
        top_k: usize,
    ) -> Result<RankingSummary, ExtractionError> {
        if top_k < 1 {
            return Err(ExtractionError::InvalidTopK(top_k));
        }
        if input.is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        let sentences = split_sentences(input, &self.normalizer, &self.options)?;
        let word_sets = index_word_sets(&sentences, &self.tokenizer)?;
        let graph = SimilarityGraph::build(&word_sets)?;
        let outcome = Ranker::new(self.options.ranking).rank(&graph)?;

        let selected = select_top_k(&outcome.scores, top_k)
            .into_iter()
            .map(|(index, score)| RankedSentence {
                index,
                text: sentences[index].clone(),
                score,
            })
            .collect::<Vec<_>>();

        debug!(
            candidates = sentences.len(),
            selected = selected.len(),
            top_k,
            "extracted key sentences"
        );

        Ok(RankingSummary {
            sentences: selected,
            candidate_count: sentences.len(),
            iterations: outcome.iterations,
            converged: outcome.converged,
            max_delta: outcome.max_delta,
        })
    }
}
