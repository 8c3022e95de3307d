// ============================================================
// Layer 2 — Summarize Use Case
// ============================================================
// Extractive summarization by word frequency:
//
//   Step 1: Segment the article into sentences       (Layer 4)
//   Step 2: Tokenize every sentence into lowercase words
//   Step 3: Count each non-excluded word across the article
//   Step 4: Score each distinct sentence = Σ count(word)
//   Step 5: Keep the top-N sentences by score
//   Step 6: Join them with a single space
//
// Identical sentences share one entry, keyed by first
// appearance. Ties keep first-appearance order, so the same
// input always yields the same summary.

use std::collections::{HashMap, HashSet};

use crate::data::{
    sentences::SentenceSegmenter,
    stopwords::ExclusionSet,
    words::WordTokenizer,
};
use crate::domain::article::{Article, ScoredSentence, SentenceOrder, SummarizeError, Summary};
use crate::domain::traits::TextSummarizer;

pub struct SummarizeUseCase {
    segmenter:  SentenceSegmenter,
    tokenizer:  WordTokenizer,
    exclusions: ExclusionSet,
    order:      SentenceOrder,
}

impl SummarizeUseCase {
    pub fn new(order: SentenceOrder) -> Self {
        let exclusions = ExclusionSet::english();
        tracing::debug!("Summarizer: {} excluded tokens, {:?} order", exclusions.len(), order);
        Self {
            segmenter:  SentenceSegmenter::new(),
            tokenizer:  WordTokenizer::new(),
            exclusions,
            order,
        }
    }

    pub fn order(&self) -> SentenceOrder {
        self.order
    }

    /// Validate a caller-supplied sentence count.
    pub fn sentence_count(requested: i64) -> Result<usize, SummarizeError> {
        if requested < 1 {
            return Err(SummarizeError::InvalidSentenceCount(requested));
        }
        usize::try_from(requested).map_err(|_| SummarizeError::InvalidSentenceCount(requested))
    }

    /// Pick the `num_sentences` highest-scoring sentences of `article`.
    pub fn summarize(&self, article: &Article, num_sentences: usize) -> Result<Summary, SummarizeError> {
        if num_sentences == 0 {
            return Err(SummarizeError::InvalidSentenceCount(0));
        }

        if article.is_empty() {
            return Ok(Summary { sentences: Vec::new() });
        }

        // ── Step 1: Sentences ─────────────────────────────────────────────────
        let sentences = self.segmenter.split(&article.text);

        // ── Step 2: Tokens per sentence ───────────────────────────────────────
        let tokenized: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.tokenizer.tokenize(s))
            .collect();

        // ── Step 3: Word frequency table ──────────────────────────────────────
        let mut word_freq: HashMap<&str, u64> = HashMap::new();
        for tokens in &tokenized {
            for token in tokens {
                if !self.exclusions.contains(token) {
                    *word_freq.entry(token.as_str()).or_insert(0) += 1;
                }
            }
        }

        // ── Step 4: Score each distinct sentence ──────────────────────────────
        let mut seen: HashSet<&str> = HashSet::new();
        let mut scored: Vec<ScoredSentence> = Vec::new();

        for (position, (sentence, tokens)) in sentences.iter().zip(&tokenized).enumerate() {
            if !seen.insert(*sentence) {
                continue;
            }
            // Excluded tokens are absent from the table and score 0
            let score: u64 = tokens
                .iter()
                .filter_map(|t| word_freq.get(t.as_str()))
                .sum();
            scored.push(ScoredSentence { text: sentence.to_string(), position, score });
        }

        // ── Step 5: Top-N, stable so ties keep first appearance ──────────────
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(num_sentences);

        if self.order == SentenceOrder::Document {
            scored.sort_by_key(|s| s.position);
        }

        tracing::debug!(
            "Summarized {} sentences ({} distinct words) into {}",
            sentences.len(),
            word_freq.len(),
            scored.len()
        );

        Ok(Summary { sentences: scored })
    }
}

impl TextSummarizer for SummarizeUseCase {
    fn summarize(&self, article: &Article, num_sentences: usize) -> Result<Summary, SummarizeError> {
        SummarizeUseCase::summarize(self, article, num_sentences)
    }
}

impl Default for SummarizeUseCase {
    fn default() -> Self {
        Self::new(SentenceOrder::default())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const AI_ARTICLE: &str = "Artificial intelligence (AI) has transformed numerous industries in recent years, from healthcare to transportation. \
In healthcare, AI systems are being used to diagnose diseases more accurately and develop personalized treatment plans. \
The transportation sector has seen the emergence of self-driving cars and smart traffic management systems. \
However, these advances also raise important ethical concerns about privacy, job displacement, and decision-making accountability. \
Many experts argue that we need robust regulations and guidelines to ensure AI is developed and deployed responsibly. \
Some companies are already implementing AI ethics committees and transparency measures to address these concerns. \
The future of AI holds both exciting possibilities and significant challenges that society must carefully navigate.";

    fn summarize(text: &str, n: usize) -> Summary {
        SummarizeUseCase::default()
            .summarize(&Article::new(text), n)
            .expect("summarize")
    }

    #[test]
    fn test_repeated_sentence_wins() {
        let summary = summarize("AI helps doctors. AI helps doctors. Cats are animals.", 1);
        assert_eq!(summary.text(), "AI helps doctors.");
        // ai:2 + helps:2 + doctors:2
        assert_eq!(summary.sentences[0].score, 6);
    }

    #[test]
    fn test_duplicates_collapse_to_one_entry() {
        let summary = summarize("AI helps doctors. AI helps doctors. Cats are animals.", 5);
        assert_eq!(summary.text(), "AI helps doctors. Cats are animals.");
        // "are" is a stopword: cats:1 + animals:1
        assert_eq!(summary.sentences[1].score, 2);
    }

    #[test]
    fn test_empty_article_gives_empty_summary() {
        let summary = summarize("", 3);
        assert!(summary.is_empty());
        assert_eq!(summary.text(), "");
    }

    #[test]
    fn test_returns_at_most_n_verbatim_sentences() {
        let summary = summarize(AI_ARTICLE, 3);
        assert_eq!(summary.len(), 3);
        for s in &summary.sentences {
            assert!(AI_ARTICLE.contains(&s.text));
        }
    }

    #[test]
    fn test_all_sentences_once_when_n_is_large() {
        let summary = summarize(AI_ARTICLE, 50);
        assert_eq!(summary.len(), 7);
        let mut positions: Vec<usize> = summary.sentences.iter().map(|s| s.position).collect();
        positions.sort();
        assert_eq!(positions, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_scores_descend_in_score_order() {
        let summary = summarize(AI_ARTICLE, 7);
        for pair in summary.sentences.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_document_order_resorts_selection() {
        let use_case = SummarizeUseCase::new(SentenceOrder::Document);
        let summary  = use_case.summarize(&Article::new(AI_ARTICLE), 3).unwrap();
        for pair in summary.sentences.windows(2) {
            assert!(pair[0].position < pair[1].position);
        }
    }

    #[test]
    fn test_stopword_only_article_still_returns_sentences() {
        let summary = summarize("It is what it is. They were there. Was it?", 2);
        assert_eq!(summary.len(), 2);
        assert!(summary.sentences.iter().all(|s| s.score == 0));
        // Score-0 ties keep document order
        assert_eq!(summary.text(), "It is what it is. They were there.");
    }

    #[test]
    fn test_is_deterministic() {
        let a = summarize(AI_ARTICLE, 3);
        let b = summarize(AI_ARTICLE, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_sentences_is_an_error() {
        let err = SummarizeUseCase::default()
            .summarize(&Article::new("Some text."), 0)
            .unwrap_err();
        assert_eq!(err, SummarizeError::InvalidSentenceCount(0));
    }

    #[test]
    fn test_usable_through_trait_object() {
        let summarizer: Box<dyn TextSummarizer> = Box::new(SummarizeUseCase::default());
        let summary = summarizer.summarize(&Article::new("One line. Two lines."), 1).unwrap();
        assert_eq!(summary.len(), 1);
    }

    #[test]
    fn test_sentence_count_validation() {
        assert_eq!(SummarizeUseCase::sentence_count(5), Ok(5));
        assert_eq!(
            SummarizeUseCase::sentence_count(-2),
            Err(SummarizeError::InvalidSentenceCount(-2))
        );
        assert_eq!(
            SummarizeError::InvalidSentenceCount(-2).to_string(),
            "num_sentences must be at least 1, got -2"
        );
    }
}
