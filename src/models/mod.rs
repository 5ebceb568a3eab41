// file: src/models/mod.rs
// description: summarization data models
// reference: internal module structure

pub mod sentence;
pub mod summary;

pub use sentence::Sentence;
pub use summary::{Summary, SummaryStats};
