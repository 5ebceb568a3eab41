// file: src/models/sentence.rs
// description: sentence model produced by segmentation and scored during ranking
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Position among the sentences kept after short-fragment filtering.
    pub index: usize,
    pub text: String,
    pub score: Option<u64>,
}

impl Sentence {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            score: None,
        }
    }

    pub fn with_score(mut self, score: u64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn score_or_zero(&self) -> u64 {
        self.score.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_creation() {
        let sentence = Sentence::new(3, "Rust programs are fast");
        assert_eq!(sentence.index, 3);
        assert_eq!(sentence.text, "Rust programs are fast");
        assert_eq!(sentence.score, None);
        assert_eq!(sentence.score_or_zero(), 0);
    }

    #[test]
    fn test_with_score() {
        let sentence = Sentence::new(0, "Scored sentence here").with_score(7);
        assert_eq!(sentence.score, Some(7));
        assert_eq!(sentence.score_or_zero(), 7);
    }
}
