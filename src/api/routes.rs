// ============================================================
// Layer 1 — HTTP Handlers
// ============================================================
// Bodies are read as raw bytes and parsed into a JSON Value by
// hand, so a malformed body or a missing field reports the
// fixed 400 message clients expect rather than axum's default
// extractor rejection.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::api::{error::ApiError, AppState};
use crate::application::summarize_use_case::SummarizeUseCase;
use crate::domain::article::{Article, SummarizeError, DEFAULT_SUMMARY_SENTENCES};

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    /// Echoed back exactly as received
    pub original_article: Value,
    pub summary:          String,
    /// Echoed back exactly as received
    pub num_sentences:    Value,
}

#[derive(Debug, Serialize)]
pub struct CheckFakeNewsResponse {
    pub headline:         String,
    /// "Real News" or "Fake News"
    pub prediction:       String,
    pub confidence:       f32,
    pub fake_probability: f32,
    pub real_probability: f32,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Parse a request body as a JSON object, or None.
fn json_object(body: &[u8]) -> Option<Map<String, Value>> {
    match serde_json::from_slice(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

// ─── POST /api/summarize ──────────────────────────────────────────────────────
pub async fn summarize_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let mut data = json_object(&body).ok_or(ApiError::MissingArticle)?;

    let original_article = data.remove("article").ok_or(ApiError::MissingArticle)?;
    let num_sentences = data
        .remove("num_sentences")
        .unwrap_or_else(|| json!(DEFAULT_SUMMARY_SENTENCES));

    // Every summarizer failure keeps the 200 + "Error: ..." contract
    let summary = summarize_value(&state, &original_article, &num_sentences)
        .unwrap_or_else(|e| {
            tracing::warn!("Summarize failed: {}", e);
            format!("Error: {e}")
        });

    Ok(Json(SummarizeResponse {
        original_article,
        summary,
        num_sentences,
    }))
}

/// Summarize the raw JSON article with the raw JSON sentence count.
/// A count below 1 selects nothing, so the summary is empty.
fn summarize_value(
    state:         &AppState,
    article:       &Value,
    num_sentences: &Value,
) -> Result<String, SummarizeError> {
    let article = match article {
        Value::String(text) => Article::new(text.as_str()),
        other => return Err(SummarizeError::ArticleNotText(other.to_string())),
    };

    let requested = num_sentences
        .as_i64()
        .ok_or_else(|| SummarizeError::NotAnInteger(num_sentences.to_string()))?;
    if requested < 1 {
        return Ok(String::new());
    }

    let count = SummarizeUseCase::sentence_count(requested)?;
    Ok(state.summarizer.summarize(&article, count)?.text())
}

// ─── POST /api/check-fake-news ────────────────────────────────────────────────
pub async fn check_fake_news_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CheckFakeNewsResponse>, ApiError> {
    let mut data = json_object(&body).ok_or(ApiError::MissingHeadline)?;

    let headline = match data.remove("headline") {
        Some(Value::String(text)) => text,
        Some(other) => {
            return Err(ApiError::Internal(format!("headline must be a string, got {other}")))
        }
        None => return Err(ApiError::MissingHeadline),
    };

    // Inference is CPU-bound; keep it off the async workers
    let classifier = state.classifier.clone();
    let text       = headline.clone();
    let prediction = tokio::task::spawn_blocking(move || classifier.classify(&text))
        .await
        .map_err(|e| ApiError::Internal(format!("Classifier task failed: {e}")))??;

    tracing::info!(
        "Checked headline → {} ({:.4})",
        prediction.label, prediction.confidence
    );

    Ok(Json(CheckFakeNewsResponse {
        headline,
        prediction:       prediction.label.display_name().to_string(),
        confidence:       prediction.confidence,
        fake_probability: prediction.fake_probability,
        real_probability: prediction.real_probability,
    }))
}

// ─── GET /health ──────────────────────────────────────────────────────────────
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok".to_string() })
}
