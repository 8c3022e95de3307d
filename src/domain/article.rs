// ============================================================
// Layer 3 — Article Domain Types
// ============================================================
// An Article is the raw text a client wants summarized.
// A Summary is what the extractive summarizer hands back:
// the chosen sentences plus the joined text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of sentences returned when the caller does not ask for a count.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Raw article text, exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub text: String,
}

impl Article {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Order in which selected sentences are joined into the summary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceOrder {
    /// Highest score first; equal scores keep first-appearance order.
    #[default]
    Score,
    /// The order the sentences appear in the article.
    Document,
}

impl std::str::FromStr for SentenceOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "score"    => Ok(Self::Score),
            "document" => Ok(Self::Document),
            other      => Err(format!("unknown sentence order '{other}' (expected score|document)")),
        }
    }
}

/// One sentence picked for the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    /// Sentence text, verbatim from the article
    pub text:     String,
    /// Position of the sentence's first appearance in the article
    pub position: usize,
    /// Sum of word frequencies over the sentence's tokens
    pub score:    u64,
}

/// The result of summarizing an Article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub sentences: Vec<ScoredSentence>,
}

impl Summary {
    /// Join the selected sentences with a single space.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Why a summary could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    #[error("num_sentences must be at least 1, got {0}")]
    InvalidSentenceCount(i64),

    #[error("num_sentences must be an integer, got {0}")]
    NotAnInteger(String),

    #[error("article must be a string, got {0}")]
    ArticleNotText(String),
}
