use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("input text is empty")]
    EmptyInput,

    #[error("invalid top_k {0}: at least one sentence must be requested")]
    InvalidTopK(usize),

    #[error("no sentence survived length filtering")]
    NoSentences,

    #[error("similarity graph is empty")]
    EmptyGraph,

    #[error("invalid extraction config: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T, E = ExtractionError> = std::result::Result<T, E>;
