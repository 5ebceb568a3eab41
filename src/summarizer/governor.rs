// file: src/summarizer/governor.rs
// description: word budget to sentence count mapping and summary truncation

use crate::config::LengthBuckets;

pub struct LengthGovernor {
    buckets: LengthBuckets,
}

impl LengthGovernor {
    pub fn new(buckets: LengthBuckets) -> Self {
        Self { buckets }
    }

    pub fn sentence_count(&self, max_length: usize) -> usize {
        if max_length <= self.buckets.short_limit {
            self.buckets.short_sentences
        } else if max_length <= self.buckets.medium_limit {
            self.buckets.medium_sentences
        } else {
            self.buckets.long_sentences
        }
    }

    /// Cuts `text` to its first `max_length` words and appends `...` when it
    /// is over budget. Returns the text and whether it was cut.
    pub fn truncate(&self, text: String, max_length: usize) -> (String, bool) {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() <= max_length {
            return (text, false);
        }

        let mut truncated = words[..max_length].join(" ");
        truncated.push_str("...");
        (truncated, true)
    }
}

impl Default for LengthGovernor {
    fn default() -> Self {
        Self::new(LengthBuckets::default())
    }
}
