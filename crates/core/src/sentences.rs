use crate::error::ExtractionError;
use crate::models::ExtractionOptions;
use crate::traits::TextNormalizer;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

pub const SENTENCE_TERMINATOR: &str = ".";

// Two-character ellipsis first so it collapses into a single terminator.
const TERMINATOR_PATTERN: &str = r"……|…|[?!.;？！。；\n]";

/// Cuts `text` to at most `max_chars` characters, never inside a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

pub fn normalize_terminators(text: &str) -> Result<String, ExtractionError> {
    let terminator_re = Regex::new(TERMINATOR_PATTERN)?;
    Ok(terminator_re
        .replace_all(text, SENTENCE_TERMINATOR)
        .into_owned())
}

/// Drops repeated sentences, keeping the first occurrence in document order.
pub fn dedup_preserving_order(sentences: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(sentences.len());
    sentences
        .into_iter()
        .filter(|sentence| seen.insert(sentence.clone()))
        .collect()
}

pub fn split_sentences<N: TextNormalizer>(
    document: &str,
    normalizer: &N,
    options: &ExtractionOptions,
) -> Result<Vec<String>, ExtractionError> {
    if document.trim().is_empty() {
        return Err(ExtractionError::EmptyInput);
    }

    let truncated = truncate_chars(document, options.max_document_chars);
    let lowered = normalizer.normalize(truncated);
    let normalized = normalize_terminators(&lowered)?;

    let candidates = normalized
        .split(SENTENCE_TERMINATOR)
        .map(str::trim)
        .filter(|segment| segment.chars().count() > options.min_sentence_chars)
        .map(str::to_string)
        .collect::<Vec<_>>();
    let candidate_count = candidates.len();

    let mut sentences = dedup_preserving_order(candidates);
    let unique_count = sentences.len();
    sentences.truncate(options.max_sentences);

    debug!(
        document_chars = truncated.chars().count(),
        candidate_count,
        unique_count,
        kept = sentences.len(),
        "split document into sentences"
    );

    if sentences.is_empty() {
        return Err(ExtractionError::NoSentences);
    }

    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::LowercaseNormalizer;

    fn options() -> ExtractionOptions {
        ExtractionOptions::default()
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
    }

    #[test]
    fn every_terminator_becomes_a_period() {
        let normalized = normalize_terminators("a?b!c;d？e！f。g；h……i…j\nk").unwrap();
        assert_eq!(normalized, "a.b.c.d.e.f.g.h.i.j.k");
    }

    #[test]
    fn empty_input_fails() {
        let result = split_sentences("", &LowercaseNormalizer, &options());
        assert!(matches!(result, Err(ExtractionError::EmptyInput)));

        let result = split_sentences(" \n\t ", &LowercaseNormalizer, &options());
        assert!(matches!(result, Err(ExtractionError::EmptyInput)));
    }

    #[test]
    fn text_shorter_than_minimum_yields_no_sentences() {
        let result = split_sentences("Too short to rank.", &LowercaseNormalizer, &options());
        assert!(matches!(result, Err(ExtractionError::NoSentences)));
    }

    #[test]
    fn short_fragments_are_dropped_and_text_is_lowercased() {
        let text = "Tiny bit. The Quick Brown Fox Jumps Over The Lazy Dog!\nok";
        let sentences = split_sentences(text, &LowercaseNormalizer, &options()).unwrap();
        assert_eq!(
            sentences,
            vec!["the quick brown fox jumps over the lazy dog".to_string()]
        );
    }

    #[test]
    fn length_threshold_is_strict() {
        let exactly_min = "a".repeat(30);
        let one_more = "b".repeat(31);
        let text = format!("{exactly_min}. {one_more}.");
        let sentences = split_sentences(&text, &LowercaseNormalizer, &options()).unwrap();
        assert_eq!(sentences, vec![one_more]);
    }

    #[test]
    fn duplicates_are_removed_in_document_order() {
        let text = "second sentence that is long enough here. \
                    first sentence that is also long enough. \
                    second sentence that is long enough here.";
        let sentences = split_sentences(text, &LowercaseNormalizer, &options()).unwrap();
        assert_eq!(
            sentences,
            vec![
                "second sentence that is long enough here".to_string(),
                "first sentence that is also long enough".to_string(),
            ]
        );
    }

    #[test]
    fn sentence_count_is_capped() {
        let text = (0..80)
            .map(|index| format!("this is candidate sentence number {index:03} in the text"))
            .collect::<Vec<_>>()
            .join(". ");
        let sentences = split_sentences(&text, &LowercaseNormalizer, &options()).unwrap();
        assert_eq!(sentences.len(), 50);
        assert!(sentences[0].ends_with("000 in the text"));
    }

    #[test]
    fn document_is_truncated_before_splitting() {
        let options = ExtractionOptions {
            max_document_chars: 60,
            ..ExtractionOptions::default()
        };
        let text = "the first sentence is comfortably long enough. \
                    the second sentence would also qualify but is cut off.";
        let sentences = split_sentences(text, &LowercaseNormalizer, &options).unwrap();
        assert_eq!(
            sentences,
            vec!["the first sentence is comfortably long enough".to_string()]
        );
    }

    #[test]
    fn full_width_punctuation_splits_sentences() {
        let options = ExtractionOptions {
            min_sentence_chars: 3,
            ..ExtractionOptions::default()
        };
        let sentences =
            split_sentences("今天天气很好。我们去公园散步！", &LowercaseNormalizer, &options)
                .unwrap();
        assert_eq!(sentences, vec!["今天天气很好", "我们去公园散步"]);
    }
}
