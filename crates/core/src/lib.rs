pub mod error;
pub mod graph;
pub mod models;
pub mod ranker;
pub mod sentences;
pub mod summarizer;
pub mod tokenize;
pub mod traits;
pub mod wordset;

pub use error::{ExtractionError, Result};
pub use graph::{similarity, SimilarityGraph};
pub use models::{
    ExtractionOptions, RankedSentence, RankingParameters, RankingSummary,
    DEFAULT_DAMPING, DEFAULT_MAX_DOCUMENT_CHARS, DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_SENTENCES,
    DEFAULT_MIN_SENTENCE_CHARS, DEFAULT_TOLERANCE, DEFAULT_TOP_K, MIN_OUT_WEIGHT,
    MIN_SIMILARITY_DENOMINATOR,
};
pub use ranker::{RankOutcome, Ranker};
pub use sentences::{split_sentences, truncate_chars};
pub use summarizer::{load_document, select_top_k, TextRanker};
pub use tokenize::{DelimiterTokenizer, LowercaseNormalizer, WhitespaceTokenizer};
pub use traits::{TextNormalizer, Tokenizer};
pub use wordset::{index_word_sets, WordSet};
