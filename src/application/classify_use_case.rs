// ============================================================
// Layer 2 — Classify Use Case
// ============================================================
// FakeNewsPredictor is the process-wide classifier service.
// It is built once at startup and then only read:
//
//   Step 1: Collapse whitespace in the headline   (Layer 4)
//   Step 2: Tokenize with truncation               (Layer 6)
//   Step 3: Softmax over the two class logits      (Layer 5)
//   Step 4: Build a Prediction (label, confidence) (Layer 3)
//
// burn modules are Send but not guaranteed Sync, so the
// inferencer sits behind a Mutex. The weights are never
// written after loading, so a lock poisoned by a panicking
// request is taken over rather than failing every later one.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use anyhow::{anyhow, bail, Result};
use burn::tensor::backend::Backend;
use tokenizers::Tokenizer;

use crate::data::preprocessor::Preprocessor;
use crate::domain::{prediction::Prediction, traits::TextClassifier};
use crate::infra::{
    checkpoint::CheckpointManager,
    tokenizer_store::{TokenizerStore, MAX_TOKENS},
};
use crate::ml::inferencer::{InferBackend, Inferencer};

pub struct FakeNewsPredictor<B: Backend = InferBackend> {
    preprocessor: Preprocessor,
    tokenizer:    Tokenizer,
    inferencer:   Mutex<Inferencer<B>>,
}

impl FakeNewsPredictor<InferBackend> {
    /// Load tokenizer, manifest and weights from a model directory.
    pub fn load(model_dir: impl AsRef<Path>) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        tracing::info!("Loading classifier from '{}'", model_dir.display());

        let device     = Default::default();
        let ckpt       = CheckpointManager::new(model_dir);
        let inferencer = Inferencer::<InferBackend>::from_checkpoint(&ckpt, device)?;
        let max_tokens = MAX_TOKENS.min(inferencer.max_seq_len());
        let tokenizer  = TokenizerStore::new(model_dir).load(max_tokens)?;

        // Ids, not entry counts: vocabularies may have gaps
        let id_range = tokenizer
            .get_vocab(true)
            .into_values()
            .max()
            .map_or(0, |id| id as usize + 1);
        if id_range > inferencer.vocab_size() {
            bail!(
                "Tokenizer in '{}' emits ids up to {} but the model embeds only {}. \
                 Do tokenizer.json and classifier_config.json belong together?",
                model_dir.display(), id_range - 1, inferencer.vocab_size()
            );
        }

        Ok(Self::new(tokenizer, inferencer))
    }
}

impl<B: Backend> FakeNewsPredictor<B> {
    /// Wrap an already configured tokenizer and inferencer.
    pub fn new(tokenizer: Tokenizer, inferencer: Inferencer<B>) -> Self {
        Self {
            preprocessor: Preprocessor::new(),
            tokenizer,
            inferencer:   Mutex::new(inferencer),
        }
    }

    /// Predict whether `text` is fake news.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let text = self.preprocessor.collapse_whitespace(text);

        let encoding = self.tokenizer
            .encode(text.as_str(), true)
            .map_err(|e| anyhow!("Tokenise: {e}"))?;

        let probs = self.inferencer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .class_probabilities(encoding.get_ids())?;

        let [real_probability, fake_probability] = probs[..] else {
            return Err(anyhow!("Expected 2 class probabilities, got {}", probs.len()));
        };

        let prediction = Prediction::from_probabilities(real_probability, fake_probability);
        tracing::debug!(
            "'{}' → {} (fake={:.4}, real={:.4})",
            text, prediction.label, fake_probability, real_probability
        );

        Ok(prediction)
    }
}

impl<B: Backend> TextClassifier for FakeNewsPredictor<B>
where
    Inferencer<B>: Send,
{
    fn classify(&self, text: &str) -> Result<Prediction> {
        self.predict(text)
    }
}
