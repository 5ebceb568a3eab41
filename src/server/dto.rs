// file: src/server/dto.rs
// description: json request and response bodies for the http api

use crate::models::Summary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub text: Option<String>,
    pub max_length: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizeResponse {
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
    pub compression_ratio: f64,
    pub status: String,
}

impl From<Summary> for SummarizeResponse {
    fn from(summary: Summary) -> Self {
        Self {
            original_length: summary.stats.original_length,
            summary_length: summary.stats.summary_length,
            compression_ratio: summary.stats.compression_ratio,
            summary: summary.text,
            status: "success".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub model_type: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            model_type: "extractive_summarizer".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
