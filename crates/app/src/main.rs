use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use textrank_core::{
    load_document, DelimiterTokenizer, ExtractionOptions, LowercaseNormalizer, RankingParameters,
    TextRanker, Tokenizer, WhitespaceTokenizer, DEFAULT_DAMPING, DEFAULT_MAX_DOCUMENT_CHARS,
    DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_SENTENCES, DEFAULT_MIN_SENTENCE_CHARS, DEFAULT_TOLERANCE,
    DEFAULT_TOP_K,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "textrank", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file with extraction options, used instead of the flags below
    #[arg(long, env = "TEXTRANK_CONFIG")]
    config: Option<PathBuf>,

    /// Damping factor of the power iteration
    #[arg(long, env = "TEXTRANK_DAMPING", default_value_t = DEFAULT_DAMPING)]
    damping: f64,

    /// Maximum number of ranking rounds
    #[arg(long, env = "TEXTRANK_MAX_ITERATIONS", default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Convergence tolerance on the largest per-sentence score change
    #[arg(long, env = "TEXTRANK_TOLERANCE", default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Characters read from the document before splitting
    #[arg(long, env = "TEXTRANK_MAX_DOCUMENT_CHARS", default_value_t = DEFAULT_MAX_DOCUMENT_CHARS)]
    max_document_chars: usize,

    /// Sentences must be longer than this many characters
    #[arg(long, env = "TEXTRANK_MIN_SENTENCE_CHARS", default_value_t = DEFAULT_MIN_SENTENCE_CHARS)]
    min_sentence_chars: usize,

    /// Maximum number of candidate sentences
    #[arg(long, env = "TEXTRANK_MAX_SENTENCES", default_value_t = DEFAULT_MAX_SENTENCES)]
    max_sentences: usize,

    /// How sentences are split into words
    #[arg(long, value_enum, env = "TEXTRANK_TOKENIZER", default_value_t = TokenizerKind::Whitespace)]
    tokenizer: TokenizerKind,
}

#[derive(Clone, Copy, ValueEnum)]
enum TokenizerKind {
    /// Split on Unicode whitespace.
    Whitespace,
    /// Split on tab markers left by an upstream word segmenter.
    Tab,
}

#[derive(Subcommand)]
enum Command {
    /// Print the most representative sentences, one per line.
    Extract {
        /// Text file to summarize, or `-` for stdin.
        #[arg(long)]
        input: String,
        /// Number of sentences to print.
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
        /// Print the ranking summary as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print every candidate sentence with its score, best first.
    Scores {
        /// Text file to rank, or `-` for stdin.
        #[arg(long)]
        input: String,
    },
}

impl Cli {
    fn extraction_options(&self) -> anyhow::Result<ExtractionOptions> {
        if let Some(path) = &self.config {
            return ExtractionOptions::from_json_file(path)
                .map_err(|error| anyhow::anyhow!(error.to_string()));
        }

        Ok(ExtractionOptions {
            max_document_chars: self.max_document_chars,
            min_sentence_chars: self.min_sentence_chars,
            max_sentences: self.max_sentences,
            ranking: RankingParameters::default()
                .with_damping(self.damping)
                .with_max_iterations(self.max_iterations)
                .with_tolerance(self.tolerance),
        })
    }
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    load_document(Path::new(input)).map_err(|error| anyhow::anyhow!("{input}: {error}"))
}

fn run<T: Tokenizer>(
    command: Command,
    options: ExtractionOptions,
    tokenizer: T,
) -> anyhow::Result<()> {
    let ranker = TextRanker::with_capabilities(options, LowercaseNormalizer, tokenizer)
        .map_err(|error| anyhow::anyhow!(error.to_string()))?;

    match command {
        Command::Extract { input, top_k, json } => {
            let text = read_input(&input)?;
            let summary = ranker
                .rank_sentences(&text, top_k)
                .map_err(|error| anyhow::anyhow!(error.to_string()))?;

            info!(
                input = %input,
                candidates = summary.candidate_count,
                iterations = summary.iterations,
                "ranked document"
            );
            if !summary.converged {
                warn!(max_delta = summary.max_delta, "scores did not converge");
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                for sentence in summary.texts() {
                    println!("{sentence}");
                }
            }
        }
        Command::Scores { input } => {
            let text = read_input(&input)?;
            let max_sentences = ranker.options().max_sentences;
            let summary = ranker
                .rank_sentences(&text, max_sentences)
                .map_err(|error| anyhow::anyhow!(error.to_string()))?;

            for (rank, sentence) in summary.sentences.iter().enumerate() {
                println!(
                    "{:>3}. score={:.6} index={} {}",
                    rank + 1,
                    sentence.score,
                    sentence.index,
                    sentence.text
                );
            }
            println!(
                "candidates={} iterations={} converged={} max_delta={:.3e}",
                summary.candidate_count, summary.iterations, summary.converged, summary.max_delta
            );
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let options = cli.extraction_options()?;

    info!(
        version = app_version,
        started_at = %Utc::now().to_rfc3339(),
        "textrank boot"
    );

    match cli.tokenizer {
        TokenizerKind::Whitespace => run(cli.command, options, WhitespaceTokenizer),
        TokenizerKind::Tab => run(cli.command, options, DelimiterTokenizer::tab()),
    }
}
