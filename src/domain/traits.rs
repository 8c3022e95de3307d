// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The HTTP handlers and the interactive CLI only ever see
// `dyn TextClassifier` and `dyn TextSummarizer`. The burn-backed FakeNewsPredictor is
// one implementation; tests plug in a fixed-output stub so the
// presentation layer can be exercised without model weights.

use anyhow::Result;
use crate::domain::article::{Article, SummarizeError, Summary};
use crate::domain::prediction::Prediction;

// ─── TextClassifier ───────────────────────────────────────────────────────────
/// Anything that can label a piece of text as real or fake news.
///
/// Implementations must be shareable across request handlers:
/// the service object is built once at startup and handed to
/// every request behind an `Arc`.
pub trait TextClassifier: Send + Sync {
    /// Classify one text. Errors are terminal for the request.
    fn classify(&self, text: &str) -> Result<Prediction>;
}

// ─── TextSummarizer ───────────────────────────────────────────────────────────
/// Anything that can pick the most representative sentences of an article.
pub trait TextSummarizer: Send + Sync {
    /// Return at most `num_sentences` sentences, verbatim from the article.
    fn summarize(&self, article: &Article, num_sentences: usize) -> Result<Summary, SummarizeError>;
}
