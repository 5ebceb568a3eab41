// file: src/summarizer/frequency.rs
// description: stop-word filtered word frequency table over a whole document
// reference: term frequency scoring

use super::patterns::words;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    counts: HashMap<String, u64>,
}

impl WordFrequencyTable {
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of the frequencies of every word in `text`; unknown words add nothing.
    pub fn score(&self, text: &str) -> u64 {
        words(text).iter().map(|word| self.get(word)).sum()
    }
}

pub struct FrequencyScorer {
    stop_words: HashSet<String>,
    min_word_chars: usize,
}

impl FrequencyScorer {
    pub fn new<I, S>(stop_words: I, min_word_chars: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            min_word_chars,
        }
    }

    pub fn is_counted(&self, word: &str) -> bool {
        !self.stop_words.contains(word) && word.chars().count() > self.min_word_chars
    }

    pub fn build(&self, text: &str) -> WordFrequencyTable {
        let mut counts = HashMap::new();

        for word in words(text) {
            if self.is_counted(&word) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }

        WordFrequencyTable { counts }
    }
}
