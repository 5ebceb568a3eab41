// file: src/summarizer/mod.rs
// description: extractive summarization pipeline and its building blocks
// reference: word frequency sentence extraction

pub mod assembler;
pub mod frequency;
pub mod governor;
pub mod patterns;
pub mod ranker;
pub mod segmenter;

pub use assembler::assemble;
pub use frequency::{FrequencyScorer, WordFrequencyTable};
pub use governor::LengthGovernor;
pub use ranker::SentenceRanker;
pub use segmenter::{SentenceSegmenter, count_words, normalize_whitespace};

use crate::config::SummarizerConfig;
use crate::error::{Result, SummarizeError};
use crate::models::Summary;
use crate::utils::OperationTimer;
use std::time::Duration;
use tracing::debug;

const SLOW_SUMMARY_THRESHOLD: Duration = Duration::from_millis(250);

/// Stateless summarizer; safe to share between concurrent requests.
pub struct Summarizer {
    segmenter: SentenceSegmenter,
    scorer: FrequencyScorer,
    ranker: SentenceRanker,
    governor: LengthGovernor,
}

impl Summarizer {
    pub fn new(config: &SummarizerConfig) -> Self {
        Self {
            segmenter: SentenceSegmenter::new(config.min_sentence_chars),
            scorer: FrequencyScorer::new(&config.stop_words, config.min_word_chars),
            ranker: SentenceRanker::new(),
            governor: LengthGovernor::new(config.length_buckets),
        }
    }

    pub fn sentence_count(&self, max_length: usize) -> usize {
        self.governor.sentence_count(max_length)
    }

    pub fn summarize(&self, text: &str, max_length: usize) -> Result<Summary> {
        let timer = OperationTimer::new("summarize");

        let normalized = normalize_whitespace(text);
        if normalized.is_empty() {
            return Err(SummarizeError::EmptyDocument);
        }

        let k = self.governor.sentence_count(max_length);
        let sentences = self.segmenter.segment(&normalized);
        debug!(
            "Segmented {} sentences, selecting up to {}",
            sentences.len(),
            k
        );

        let (body, selected, passthrough) = if sentences.len() <= k {
            (normalized, Vec::new(), true)
        } else {
            let table = self.scorer.build(&normalized);
            debug!("Frequency table holds {} distinct words", table.len());

            let selected = self.ranker.select(sentences, &table, k);
            (assemble(&selected), selected, false)
        };

        let (summary_text, truncated) = self.governor.truncate(body, max_length);
        if truncated {
            debug!("Summary truncated to {} words", max_length);
        }

        let summary = Summary::new(text, summary_text, selected, passthrough, truncated);

        timer.warn_if_slow(SLOW_SUMMARY_THRESHOLD, "summary generation");
        timer.finish();

        Ok(summary)
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(&SummarizerConfig::default())
    }
}
