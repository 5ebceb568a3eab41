// file: src/server/handlers.rs
// description: http route handlers for summarization, health and the landing page

use super::AppState;
use super::dto::{HealthResponse, SummarizeRequest, SummarizeResponse};
use super::error::ApiError;
use crate::models::Summary;
use crate::utils::Validator;
use crate::utils::validation::NO_TEXT_MESSAGE;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use serde_json::Value;
use tracing::{info, info_span, warn};
use uuid::Uuid;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../static/script.js");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

pub async fn summarize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("summarize", %request_id);

    span.in_scope(|| summarize_body(&state, &body)).map(Json)
}

fn parse_request(body: &[u8]) -> Result<SummarizeRequest, ApiError> {
    let no_text = || ApiError::BadRequest(NO_TEXT_MESSAGE.to_string());

    let value: Value = serde_json::from_slice(body).map_err(|_| no_text())?;
    if matches!(value.get("text"), None | Some(Value::Null)) {
        return Err(no_text());
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::BadRequest(format!("Invalid request: {}", e)))
}

fn summarize_body(state: &AppState, body: &[u8]) -> Result<SummarizeResponse, ApiError> {
    let request = parse_request(body)?;
    let text = Validator::validate_text_present(request.text.as_deref())?;
    Validator::validate_word_count(text, state.min_input_words)?;

    let max_length = match request.max_length {
        Some(value) => Validator::validate_max_length(value)?,
        None => state.default_max_length,
    };

    let summary = match state.summarizer.summarize(text, max_length) {
        Ok(summary) => summary,
        Err(e) if state.legacy_error_summaries => {
            warn!("Summarization failed, reporting as content: {}", e);
            Summary::degraded(text, &e.to_string())
        }
        Err(e) => return Err(e.into()),
    };

    info!(
        "Summarized {} words into {} ({}% reduction)",
        summary.stats.original_length, summary.stats.summary_length, summary.stats.compression_ratio
    );

    Ok(SummarizeResponse::from(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_missing_body() {
        let err = parse_request(b"").unwrap_err();
        assert_eq!(err.message(), NO_TEXT_MESSAGE);
    }

    #[test]
    fn test_parse_request_null_text() {
        let err = parse_request(br#"{"text": null}"#).unwrap_err();
        assert_eq!(err.message(), NO_TEXT_MESSAGE);
    }

    #[test]
    fn test_parse_request_non_object() {
        let err = parse_request(br#"["text"]"#).unwrap_err();
        assert_eq!(err.message(), NO_TEXT_MESSAGE);
    }

    #[test]
    fn test_parse_request_wrong_type() {
        let err = parse_request(br#"{"text": 42}"#).unwrap_err();
        assert!(err.message().starts_with("Invalid request:"));
    }

    #[test]
    fn test_parse_request_defaults_max_length() {
        let request = parse_request(br#"{"text": "hello"}"#).unwrap();
        assert_eq!(request.text.as_deref(), Some("hello"));
        assert_eq!(request.max_length, None);
    }
}
