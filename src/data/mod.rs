// ============================================================
// Layer 4 — Text Pipeline
// ============================================================
// Everything that turns raw text into the units the rest of
// the service works with.
//
// Two independent flows pass through here:
//
//   Headline (classifier)
//       │
//       ▼
//   Preprocessor      → collapses whitespace
//       │
//       ▼
//   infra::TokenizerStore's subword tokenizer (Layer 6)
//
//
//   Article (summarizer)
//       │
//       ▼
//   SentenceSegmenter → ordered sentences
//       │
//       ▼
//   WordTokenizer     → lowercase word tokens per sentence
//       │
//       ▼
//   ExclusionSet      → drops stopwords and punctuation
//
// Each module does exactly one step and is tested on its own.

/// Whitespace normalisation for classifier input
pub mod preprocessor;

/// Sentence boundary detection
pub mod sentences;

/// Lowercase word tokenization with clitic splitting
pub mod words;

/// English stopwords plus punctuation
pub mod stopwords;
