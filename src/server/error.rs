// file: src/server/error.rs
// description: maps summarizer failures onto http status codes and json bodies

use super::dto::ErrorResponse;
use crate::error::SummarizeError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg.as_str(),
        }
    }
}

impl From<SummarizeError> for ApiError {
    fn from(err: SummarizeError) -> Self {
        match err {
            SummarizeError::Validation(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::BadRequest(msg) => warn!("Rejected request: {}", msg),
            ApiError::Internal(msg) => error!("Request failed: {}", msg),
        }

        let body = ErrorResponse {
            error: self.message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = SummarizeError::Validation("No text provided".to_string()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "No text provided");
    }

    #[test]
    fn test_other_errors_map_to_internal() {
        let err: ApiError = SummarizeError::EmptyDocument.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Document contains no text to summarize");
    }
}
