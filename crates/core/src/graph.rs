//! Dense sentence-similarity graph.
//!
//! Sentence counts are capped, so weights live in a full `N x N` matrix.

use crate::error::ExtractionError;
use crate::models::{MIN_OUT_WEIGHT, MIN_SIMILARITY_DENOMINATOR};
use crate::wordset::WordSet;
use tracing::debug;

/// Shared distinct tokens over the log-sum of both raw token counts.
///
/// Not bounded to `[0, 1]`; the ranker treats it as a raw edge weight.
pub fn similarity(a: &WordSet, b: &WordSet) -> f64 {
    if a.token_count == 0 || b.token_count == 0 {
        return 0.0;
    }

    let denominator = (a.token_count as f64).ln() + (b.token_count as f64).ln();
    if denominator.abs() < MIN_SIMILARITY_DENOMINATOR {
        return 0.0;
    }

    a.common_tokens(b) as f64 / denominator
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityGraph {
    weights: Vec<Vec<f64>>,
    out_weight_sums: Vec<f64>,
}

impl SimilarityGraph {
    pub fn build(word_sets: &[WordSet]) -> Result<Self, ExtractionError> {
        if word_sets.is_empty() {
            return Err(ExtractionError::EmptyGraph);
        }

        let size = word_sets.len();
        let mut weights = vec![vec![0.0; size]; size];

        for i in 0..size {
            for j in (i + 1)..size {
                let weight = similarity(&word_sets[i], &word_sets[j]);
                weights[i][j] = weight;
                weights[j][i] = weight;
            }
        }

        let out_weight_sums = weights
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, weight)| weight)
                    .sum::<f64>()
            })
            .collect::<Vec<_>>();

        let edge_count = weights
            .iter()
            .flatten()
            .filter(|weight| **weight > 0.0)
            .count()
            / 2;
        debug!(nodes = size, edges = edge_count, "built similarity graph");

        Ok(Self {
            weights,
            out_weight_sums,
        })
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty() || self.out_weight_sums.is_empty()
    }

    pub fn weight(&self, from: usize, to: usize) -> f64 {
        self.weights[from][to]
    }

    pub fn out_weight_sum(&self, node: usize) -> f64 {
        self.out_weight_sums[node]
    }

    pub fn out_weight_sums(&self) -> &[f64] {
        &self.out_weight_sums
    }

    /// A node too weakly connected to hand out any of its score.
    pub fn is_dangling(&self, node: usize) -> bool {
        self.out_weight_sums[node] < MIN_OUT_WEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> WordSet {
        WordSet::from_tokens(text.split_whitespace())
    }

    #[test]
    fn similarity_uses_log_sum_denominator() {
        let a = words("red green blue");
        let b = words("red green yellow purple");
        let expected = 2.0 / (3f64.ln() + 4f64.ln());
        assert!((similarity(&a, &b) - expected).abs() < 1e-12);
    }

    #[test]
    fn single_token_sentences_have_zero_similarity() {
        let a = words("alone");
        let b = words("alone");
        assert_eq!(similarity(&a, &b), 0.0);
        assert_eq!(similarity(&a, &WordSet::default()), 0.0);
    }

    #[test]
    fn matrix_is_symmetric_with_empty_diagonal() {
        let sets = vec![
            words("the graph ranks every sentence"),
            words("every sentence gets a graph score"),
            words("unrelated words only here"),
            words("the score of a sentence"),
        ];
        let graph = SimilarityGraph::build(&sets).unwrap();

        assert_eq!(graph.len(), 4);
        for i in 0..graph.len() {
            assert_eq!(graph.weight(i, i), 0.0);
            for j in 0..graph.len() {
                assert_eq!(graph.weight(i, j), graph.weight(j, i));
                assert!(graph.weight(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn out_weight_sums_exclude_self() {
        let sets = vec![
            words("alpha beta gamma"),
            words("alpha beta delta"),
            words("epsilon zeta eta"),
        ];
        let graph = SimilarityGraph::build(&sets).unwrap();

        let shared = 2.0 / (3f64.ln() + 3f64.ln());
        assert!((graph.out_weight_sum(0) - shared).abs() < 1e-12);
        assert!((graph.out_weight_sum(1) - shared).abs() < 1e-12);
        assert_eq!(graph.out_weight_sum(2), 0.0);
        assert!(graph.is_dangling(2));
        assert!(!graph.is_dangling(0));
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(
            SimilarityGraph::build(&[]),
            Err(ExtractionError::EmptyGraph)
        ));
    }
}
