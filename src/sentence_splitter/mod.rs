// WHY: splitter interface kept separate from the scanner so quote partitioning
// and sentence extraction stay independently testable

use tracing::debug;

use crate::formatter::join_with_blank_lines;

pub mod normalization;
pub mod scanner;

pub use normalization::{normalize_quotes, normalize_quotes_into};
pub use scanner::{partition_quotes, Segment};

/// Characters that can terminate a sentence.
pub const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Configuration for sentence splitting.
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    /// Rewrite each output sentence the way the legacy pipeline did:
    /// double quotes become single quotes, periods and commas are removed,
    /// `!` and `?` are kept. Off by default.
    pub strip_punctuation: bool,
}

/// Quote-aware sentence splitter.
///
/// Splits normalized text at terminal punctuation, treating quoted spans as
/// nested scopes: their interior boundaries still split, and the opening and
/// closing quote characters are reattached to the first and last sentence of
/// the span.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    options: SplitOptions,
}

impl SentenceSplitter {
    /// Create a splitter with custom options.
    pub fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    /// Create a splitter with default options.
    pub fn with_default_options() -> Self {
        Self::new(SplitOptions::default())
    }

    /// Split text into sentences, in source order.
    ///
    /// Total over any input: empty or blank text yields an empty Vec, and
    /// text without terminal punctuation yields one trimmed sentence.
    pub fn split(&self, text: &str) -> Vec<String> {
        let normalized = normalize_quotes(text);
        let mut sentences = Vec::new();

        for segment in partition_quotes(&normalized) {
            match segment {
                Segment::Unquoted(span) => extract_sentences(span, &mut sentences),
                Segment::Quoted { quote, inner } => {
                    let first = sentences.len();
                    extract_sentences(inner, &mut sentences);
                    if sentences.len() == first {
                        // Blank interior: keep the delimiters so no quote is lost
                        sentences.push(format!("{quote}{quote}"));
                    } else {
                        sentences[first].insert(0, quote);
                        let last = sentences.len() - 1;
                        sentences[last].push(quote);
                    }
                }
            }
        }

        if self.options.strip_punctuation {
            sentences = sentences
                .iter()
                .map(|s| strip_sentence_punctuation(s))
                .filter(|s| !s.is_empty())
                .collect();
        }

        debug!(sentences = sentences.len(), "split text into sentences");
        sentences
    }

    /// Split and format: sentences joined by one blank line.
    pub fn split_to_text(&self, text: &str) -> String {
        join_with_blank_lines(&self.split(text))
    }
}

/// Convenience pipeline with default options: normalize quotes, split into
/// sentences, join with blank lines.
pub fn split_paragraph_to_sentences(text: &str) -> String {
    SentenceSplitter::with_default_options().split_to_text(text)
}

/// Extract sentences from one segment's interior: repeatedly take the
/// shortest prefix ending at terminal punctuation; a non-blank remainder
/// becomes a final sentence. Chunks are trimmed, empties dropped.
fn extract_sentences(text: &str, out: &mut Vec<String>) {
    let mut start = 0;
    for (i, ch) in text.char_indices() {
        if TERMINAL_PUNCTUATION.contains(&ch) {
            let end = i + ch.len_utf8();
            let chunk = text[start..end].trim();
            if !chunk.is_empty() {
                out.push(chunk.to_string());
            }
            start = end;
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        out.push(tail.to_string());
    }
}

fn strip_sentence_punctuation(sentence: &str) -> String {
    sentence
        .chars()
        .filter_map(|ch| match ch {
            '.' | ',' => None,
            '"' => Some('\''),
            other => Some(other),
        })
        .collect()
}
