// file: src/summarizer/segmenter.rs
// description: whitespace normalization and sentence segmentation
// reference: sentence splitting on terminal punctuation runs

use super::patterns::{SENTENCE_TERMINATOR, WHITESPACE_RUN};
use crate::models::Sentence;

/// Collapses every whitespace run to a single space and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub struct SentenceSegmenter {
    min_sentence_chars: usize,
}

impl SentenceSegmenter {
    pub fn new(min_sentence_chars: usize) -> Self {
        Self { min_sentence_chars }
    }

    /// Splits normalized text into sentences, dropping short fragments.
    ///
    /// Indices are assigned after filtering, so a dropped fragment never
    /// consumes a position.
    pub fn segment(&self, normalized: &str) -> Vec<Sentence> {
        SENTENCE_TERMINATOR
            .split(normalized)
            .map(str::trim)
            .filter(|piece| piece.chars().count() > self.min_sentence_chars)
            .enumerate()
            .map(|(index, piece)| Sentence::new(index, piece))
            .collect()
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  Hello\n\n  world\tagain  "),
            "Hello world again"
        );
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_whitespace(" a\r\n b \u{a0} c ");
        assert_eq!(normalize_whitespace(&once), once);
    }

    #[test]
    fn test_segment_splits_on_terminator_runs() {
        let segmenter = SentenceSegmenter::default();
        let sentences =
            segmenter.segment("The first sentence is here!!! Is this the second one?? Yes it is.");

        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        // "Yes it is" is too short to keep
        assert_eq!(texts, vec!["The first sentence is here", "Is this the second one"]);
    }

    #[test]
    fn test_segment_drops_short_fragments_without_consuming_index() {
        let segmenter = SentenceSegmenter::default();
        let sentences = segmenter.segment(
            "Okay. The weather today is remarkably sunny. Hi. Birds are singing in every tree. Ten chars!",
        );

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].index, 0);
        assert_eq!(sentences[0].text, "The weather today is remarkably sunny");
        assert_eq!(sentences[1].index, 1);
        assert_eq!(sentences[1].text, "Birds are singing in every tree");
    }

    #[test]
    fn test_segment_length_boundary() {
        let segmenter = SentenceSegmenter::default();
        // exactly ten characters is discarded, eleven is kept
        let sentences = segmenter.segment("abcdefghij. abcdefghijk.");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "abcdefghijk");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("a  b\nc\t d"), 4);
        assert_eq!(count_words(""), 0);
    }
}
