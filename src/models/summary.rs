// file: src/models/summary.rs
// description: summary result and word count statistics
// reference: internal data structures

use crate::models::Sentence;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub original_length: usize,
    pub summary_length: usize,
    pub compression_ratio: f64,
}

impl SummaryStats {
    pub fn compute(original: &str, summary: &str) -> Self {
        let original_length = original.split_whitespace().count();
        let summary_length = summary.split_whitespace().count();

        Self {
            original_length,
            summary_length,
            compression_ratio: compression_ratio(original_length, summary_length),
        }
    }
}

/// Percentage of words removed, rounded to one decimal place.
///
/// Rounding works on the exact binary value with ties to even, so `81.25`
/// becomes `81.2` while `98.75000000000001` becomes `98.8`.
pub fn compression_ratio(original_words: usize, summary_words: usize) -> f64 {
    if original_words == 0 {
        return 0.0;
    }

    let ratio = (1.0 - summary_words as f64 / original_words as f64) * 100.0;
    round_one_decimal(ratio)
}

fn round_one_decimal(value: f64) -> f64 {
    // float formatting rounds the exact value half-to-even
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
    /// Selected sentences in reading order; empty when the whole document was returned.
    pub sentences: Vec<Sentence>,
    pub passthrough: bool,
    pub truncated: bool,
    pub stats: SummaryStats,
}

impl Summary {
    pub fn new(
        original: &str,
        text: String,
        sentences: Vec<Sentence>,
        passthrough: bool,
        truncated: bool,
    ) -> Self {
        let stats = SummaryStats::compute(original, &text);
        Self {
            text,
            sentences,
            passthrough,
            truncated,
            stats,
        }
    }

    /// Summary whose text reports a failure, used when errors are surfaced as content.
    pub fn degraded(original: &str, message: &str) -> Self {
        Self::new(
            original,
            format!("Error generating summary: {}", message),
            Vec::new(),
            false,
            false,
        )
    }
}
