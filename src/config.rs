// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SummarizeError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "this", "that", "these", "those", "i", "you", "he", "she", "it", "we",
    "they",
];

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub summarizer: SummarizerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// Report summarizer failures as a 200 whose summary is the error text.
    pub legacy_error_summaries: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Sentences at or below this many characters are discarded.
    pub min_sentence_chars: usize,
    /// Words at or below this many characters are not counted.
    pub min_word_chars: usize,
    pub min_input_words: usize,
    pub default_max_length: usize,
    pub stop_words: Vec<String>,
    pub length_buckets: LengthBuckets,
}

/// Maps a word budget onto the number of sentences to extract.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LengthBuckets {
    pub short_limit: usize,
    pub short_sentences: usize,
    pub medium_limit: usize,
    pub medium_sentences: usize,
    pub long_sentences: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_allowed_origins: vec!["*".to_string()],
            legacy_error_summaries: false,
        }
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            min_sentence_chars: 10,
            min_word_chars: 2,
            min_input_words: 10,
            default_max_length: 100,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            length_buckets: LengthBuckets::default(),
        }
    }
}

impl Default for LengthBuckets {
    fn default() -> Self {
        Self {
            short_limit: 50,
            short_sentences: 2,
            medium_limit: 100,
            medium_sentences: 3,
            long_sentences: 4,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("EXTRACTIVE_SUMMARIZE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SummarizeError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SummarizeError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(SummarizeError::Config(
                "port must be greater than 0".to_string(),
            ));
        }

        if self.server.cors_allowed_origins.is_empty() {
            return Err(SummarizeError::Config(
                "cors_allowed_origins must list at least one origin".to_string(),
            ));
        }

        if self.summarizer.default_max_length == 0 {
            return Err(SummarizeError::Config(
                "default_max_length must be greater than 0".to_string(),
            ));
        }

        let buckets = &self.summarizer.length_buckets;
        if buckets.short_sentences == 0 || buckets.medium_sentences == 0 || buckets.long_sentences == 0
        {
            return Err(SummarizeError::Config(
                "length buckets must select at least one sentence".to_string(),
            ));
        }

        if buckets.short_limit >= buckets.medium_limit {
            return Err(SummarizeError::Config(format!(
                "short_limit ({}) must be below medium_limit ({})",
                buckets.short_limit, buckets.medium_limit
            )));
        }

        Ok(())
    }
}
