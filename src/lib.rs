// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod summarizer;
pub mod utils;

pub use config::{Config, LengthBuckets, ServerConfig, SummarizerConfig};
pub use error::{Result, SummarizeError};
pub use models::{Sentence, Summary, SummaryStats};
pub use server::{AppState, SummarizeResponse, build_router, serve};
pub use summarizer::{
    FrequencyScorer, LengthGovernor, SentenceRanker, SentenceSegmenter, Summarizer,
    WordFrequencyTable,
};
pub use utils::{OperationTimer, Validator};
