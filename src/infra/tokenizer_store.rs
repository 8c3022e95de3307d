// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads the HuggingFace tokenizer that matches the classifier
// weights (bert-base-uncased's WordPiece vocabulary for the
// shipped model) and pins its truncation length.
//
// Padding is switched off: requests are classified one at a
// time, so there is never a batch to pad to.
//
// Reference: HuggingFace tokenizers crate documentation

use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tokenizers::{Tokenizer, TruncationParams};

const TOKENIZER_FILE: &str = "tokenizer.json";

/// Longest input, in tokens, the classifier ever sees.
pub const MAX_TOKENS: usize = 512;

pub struct TokenizerStore {
    dir: PathBuf,
}

impl TokenizerStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load {dir}/tokenizer.json and truncate at `max_length` tokens.
    pub fn load(&self, max_length: usize) -> Result<Tokenizer> {
        let path = self.dir.join(TOKENIZER_FILE);
        let tokenizer = Tokenizer::from_file(&path)
            .map_err(|e| anyhow!(
                "Cannot load tokenizer from '{}': {}", path.display(), e
            ))?;

        tracing::info!("Tokenizer loaded from '{}'", path.display());
        configure(tokenizer, max_length)
    }
}

/// Apply the classifier's truncation and padding settings.
pub fn configure(mut tokenizer: Tokenizer, max_length: usize) -> Result<Tokenizer> {
    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length,
            ..Default::default()
        }))
        .map_err(|e| anyhow!("Cannot set truncation to {max_length}: {e}"))?;
    tokenizer.with_padding(None);
    Ok(tokenizer)
}

/// A small word-level tokenizer in HuggingFace JSON form, for tests.
/// Special tokens use the BERT ids; words are numbered from 104.
#[cfg(test)]
pub fn word_level_tokenizer(words: &[&str]) -> Tokenizer {
    let mut vocab = serde_json::json!({
        "[PAD]":  0,
        "[UNK]":  1,
        "[CLS]":  101,
        "[SEP]":  102,
        "[MASK]": 103,
    });
    for (i, word) in words.iter().enumerate() {
        vocab[*word] = serde_json::json!(104 + i);
    }

    let tokenizer_json = serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": 0,   "content": "[PAD]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 1,   "content": "[UNK]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 101, "content": "[CLS]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 102, "content": "[SEP]",  "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 103, "content": "[MASK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": {
            "type": "BertNormalizer",
            "clean_text": true,
            "handle_chinese_chars": true,
            "strip_accents": null,
            "lowercase": true
        },
        "pre_tokenizer": {
            "type": "Whitespace"
        },
        "post_processor": {
            "type": "BertProcessing",
            "sep": ["[SEP]", 102],
            "cls": ["[CLS]", 101]
        },
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": vocab,
            "unk_token": "[UNK]"
        }
    });

    tokenizer_json
        .to_string()
        .parse::<Tokenizer>()
        .expect("test tokenizer JSON is valid")
}
