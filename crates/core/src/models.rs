use crate::error::ExtractionError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Documents longer than this are cut before sentence splitting.
pub const DEFAULT_MAX_DOCUMENT_CHARS: usize = 10_000;
/// Sentences must be strictly longer than this to be ranked.
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 30;
/// Upper bound on ranked sentences; keeps the dense graph small.
pub const DEFAULT_MAX_SENTENCES: usize = 50;
pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_TOLERANCE: f64 = 1e-5;
pub const DEFAULT_TOP_K: usize = 3;

/// Log-sum denominators below this magnitude yield zero similarity.
pub const MIN_SIMILARITY_DENOMINATOR: f64 = 1e-6;
/// Nodes whose total outgoing weight is below this do not vote.
pub const MIN_OUT_WEIGHT: f64 = 1e-6;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RankingParameters {
    pub damping: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for RankingParameters {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl RankingParameters {
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> Result<(), ExtractionError> {
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            return Err(ExtractionError::InvalidConfig(format!(
                "damping must be within [0, 1], got {}",
                self.damping
            )));
        }

        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ExtractionError::InvalidConfig(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }

        if self.max_iterations == 0 {
            return Err(ExtractionError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractionOptions {
    pub max_document_chars: usize,
    pub min_sentence_chars: usize,
    pub max_sentences: usize,
    pub ranking: RankingParameters,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            max_document_chars: DEFAULT_MAX_DOCUMENT_CHARS,
            min_sentence_chars: DEFAULT_MIN_SENTENCE_CHARS,
            max_sentences: DEFAULT_MAX_SENTENCES,
            ranking: RankingParameters::default(),
        }
    }
}

impl ExtractionOptions {
    /// Reads options from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ExtractionError> {
        let raw = std::fs::read_to_string(path)?;
        let options: Self = serde_json::from_str(&raw)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), ExtractionError> {
        if self.max_document_chars == 0 {
            return Err(ExtractionError::InvalidConfig(
                "max_document_chars must be at least 1".to_string(),
            ));
        }

        if self.max_sentences == 0 {
            return Err(ExtractionError::InvalidConfig(
                "max_sentences must be at least 1".to_string(),
            ));
        }

        self.ranking.validate()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedSentence {
    /// Position among the candidate sentences, in document order.
    pub index: usize,
    pub text: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingSummary {
    /// Selected sentences, highest score first.
    pub sentences: Vec<RankedSentence>,
    pub candidate_count: usize,
    pub iterations: usize,
    pub converged: bool,
    pub max_delta: f64,
}

impl RankingSummary {
    pub fn texts(&self) -> Vec<String> {
        self.sentences
            .iter()
            .map(|sentence| sentence.text.clone())
            .collect()
    }
}
