// file: src/server/mod.rs
// description: http server wiring, shared state and cors policy
// reference: https://docs.rs/axum

pub mod dto;
pub mod error;
pub mod handlers;

pub use dto::{ErrorResponse, HealthResponse, SummarizeRequest, SummarizeResponse};
pub use error::ApiError;

use crate::config::{Config, ServerConfig};
use crate::error::{Result, SummarizeError};
use crate::summarizer::Summarizer;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<Summarizer>,
    pub min_input_words: usize,
    pub default_max_length: usize,
    pub legacy_error_summaries: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            summarizer: Arc::new(Summarizer::new(&config.summarizer)),
            min_input_words: config.summarizer.min_input_words,
            default_max_length: config.summarizer.default_max_length,
            legacy_error_summaries: config.server.legacy_error_summaries,
        }
    }
}

pub fn build_router(config: &Config) -> Result<Router> {
    let cors = cors_layer(&config.server)?;

    let router = Router::new()
        .route("/", get(handlers::index))
        .route("/static/script.js", get(handlers::script))
        .route("/summarize", post(handlers::summarize))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(config));

    Ok(router)
}

fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_allowed_origins.iter().any(|origin| origin == "*") {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|e| {
                SummarizeError::Config(format!("Invalid CORS origin {}: {}", origin, e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

pub async fn serve(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let router = build_router(&config)?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| SummarizeError::Server(format!("Failed to bind {}: {}", addr, e)))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SummarizeError::Server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_wildcard() {
        let config = ServerConfig::default();
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn test_cors_explicit_origins() {
        let config = ServerConfig {
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            ..ServerConfig::default()
        };
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn test_cors_invalid_origin() {
        let config = ServerConfig {
            cors_allowed_origins: vec!["bad\norigin".to_string()],
            ..ServerConfig::default()
        };
        assert!(matches!(
            cors_layer(&config),
            Err(SummarizeError::Config(_))
        ));
    }

    #[test]
    fn test_app_state_from_config() {
        let mut config = Config::default_config();
        config.server.legacy_error_summaries = true;
        config.summarizer.default_max_length = 60;

        let state = AppState::new(&config);
        assert!(state.legacy_error_summaries);
        assert_eq!(state.default_max_length, 60);
        assert_eq!(state.min_input_words, 10);
    }
}
