//! Damped power iteration over a [`SimilarityGraph`].
//!
//! Every score starts at `1.0`. Each round a node receives
//! `(1 - d) + d * Σ weight(j, i) / out(j) * score(j)` from its neighbours,
//! computed from the previous round's scores only. Dangling neighbours are
//! skipped instead of being spread over the whole graph, so an isolated
//! node settles at exactly `1 - d`.

use crate::error::ExtractionError;
use crate::graph::SimilarityGraph;
use crate::models::RankingParameters;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct RankOutcome {
    pub scores: Vec<f64>,
    /// Rounds actually run, never more than the configured budget.
    pub iterations: usize,
    /// Largest per-node change observed in the last round.
    pub max_delta: f64,
    pub converged: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    params: RankingParameters,
}

impl Ranker {
    pub fn new(params: RankingParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RankingParameters {
        &self.params
    }

    pub fn rank(&self, graph: &SimilarityGraph) -> Result<RankOutcome, ExtractionError> {
        if graph.is_empty() {
            return Err(ExtractionError::EmptyGraph);
        }

        let size = graph.len();
        let damping = self.params.damping;
        let mut scores = vec![1.0; size];
        let mut next = vec![0.0; size];
        let mut iterations = 0;
        let mut max_delta = 0.0;
        let mut converged = false;

        while iterations < self.params.max_iterations {
            iterations += 1;
            max_delta = 0.0f64;

            for (i, slot) in next.iter_mut().enumerate() {
                let inflow: f64 = (0..size)
                    .filter(|&j| j != i && !graph.is_dangling(j))
                    .map(|j| graph.weight(j, i) / graph.out_weight_sum(j) * scores[j])
                    .sum();

                let score = (1.0 - damping) + damping * inflow;
                max_delta = max_delta.max((score - scores[i]).abs());
                *slot = score;
            }

            std::mem::swap(&mut scores, &mut next);
            trace!(iteration = iterations, max_delta, "ranking round");

            if max_delta < self.params.tolerance {
                converged = true;
                break;
            }
        }

        if converged {
            debug!(iterations, max_delta, "ranking converged");
        } else {
            warn!(
                iterations,
                max_delta,
                tolerance = self.params.tolerance,
                "ranking stopped at the iteration budget without converging"
            );
        }

        Ok(RankOutcome {
            scores,
            iterations,
            max_delta,
            converged,
        })
    }
}
