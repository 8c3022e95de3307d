// ============================================================
// Layer 1 — HTTP API
// ============================================================
// axum router over the two use cases:
//
//   POST /api/summarize        → SummarizeUseCase
//   POST /api/check-fake-news  → FakeNewsPredictor
//   GET  /health
//
// Both services are built once in `newscheck serve` and shared
// with every request through AppState.

pub mod error;
pub mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::domain::traits::{TextClassifier, TextSummarizer};
use crate::infra::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn TextClassifier>,
    pub summarizer: Arc<dyn TextSummarizer>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/summarize", post(routes::summarize_handler))
        .route("/api/check-fake-news", post(routes::check_fake_news_handler))
        .route("/health", get(routes::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until the process exits.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = config.addr()?;
    let app  = build_router(state);

    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
