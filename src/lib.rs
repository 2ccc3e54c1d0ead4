pub mod formatter;
pub mod merger;
pub mod sentence_splitter;

// Re-export main types for convenient access
pub use formatter::{join_with_blank_lines, SENTENCE_SEPARATOR};
pub use merger::{merge_lines_to_paragraph, merge_lines_to_paragraph_into};
pub use sentence_splitter::{
    split_paragraph_to_sentences, SentenceSplitter, SplitOptions,
    TERMINAL_PUNCTUATION,
};
