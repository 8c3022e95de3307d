// ============================================================
// Layer 1 — HTTP Error Mapping
// ============================================================
// Every failure a handler can report, and the status code and
// JSON body it turns into:
//
//   MissingArticle   → 400 {"error":"No article provided"}
//   MissingHeadline  → 400 {"error":"No headline provided"}
//   Internal         → 500 {"error":"<details>"}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No article provided")]
    MissingArticle,

    #[error("No headline provided")]
    MissingHeadline,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingArticle | ApiError::MissingHeadline => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(format!("{err:#}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
