// file: src/summarizer/patterns.rs
// description: compiled regex patterns for segmentation and tokenization
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).expect("WHITESPACE_RUN regex is valid");

    pub static ref SENTENCE_TERMINATOR: Regex = Regex::new(
        r"[.!?]+"
    ).expect("SENTENCE_TERMINATOR regex is valid");

    pub static ref WORD: Regex = Regex::new(
        r"\b\w+\b"
    ).expect("WORD regex is valid");
}

/// Lowercases `text` and yields every word token in order of appearance.
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
