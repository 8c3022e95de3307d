// ============================================================
// Layer 5 — Inferencer
// ============================================================
use anyhow::{anyhow, Result};
use burn::prelude::*;

use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::SequenceClassifier;

#[cfg(not(feature = "wgpu"))]
pub type InferBackend = burn::backend::NdArray;
#[cfg(feature = "wgpu")]
pub type InferBackend = burn::backend::Wgpu;

pub struct Inferencer<B: Backend> {
    model:       SequenceClassifier<B>,
    vocab_size:  usize,
    max_seq_len: usize,
    device:      B::Device,
}

impl<B: Backend> Inferencer<B> {
    pub fn new(model: SequenceClassifier<B>, device: B::Device) -> Self {
        let vocab_size  = model.vocab_size;
        let max_seq_len = model.max_position_embeddings;
        Self { model, vocab_size, max_seq_len, device }
    }

    pub fn from_checkpoint(ckpt_manager: &CheckpointManager, device: B::Device) -> Result<Self> {
        let manifest  = ckpt_manager.load_manifest()?;
        let model_cfg = manifest.model_config();
        let model: SequenceClassifier<B> = model_cfg.init(&device);
        let model = ckpt_manager.load_model(model, &device)?;

        match manifest.best_val_acc {
            Some(acc) => tracing::info!("Model loaded from checkpoint (best validation accuracy: {:.4})", acc),
            None      => tracing::info!("Model loaded from checkpoint"),
        }

        Ok(Self::new(model, device))
    }

    /// Number of token ids the embedding table covers.
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// Longest token sequence the position embeddings can address.
    pub fn max_seq_len(&self) -> usize {
        self.max_seq_len
    }

    /// Run one token sequence through the model and return the
    /// softmax probability of every class, in class-index order.
    pub fn class_probabilities(&self, token_ids: &[u32]) -> Result<Vec<f32>> {
        if token_ids.is_empty() {
            return Err(anyhow!("Cannot classify an empty token sequence"));
        }

        // Tokenizer truncation should already have applied; this guards
        // against a tokenizer.json configured for a longer model
        let seq_len = token_ids.len().min(self.max_seq_len);

        // An id past the embedding table would panic inside the backend
        if let Some(&id) = token_ids[..seq_len].iter().find(|&&id| id as usize >= self.vocab_size) {
            return Err(anyhow!(
                "Token id {} is outside the model vocabulary of {}", id, self.vocab_size
            ));
        }
        let input_flat: Vec<i32> = token_ids[..seq_len].iter().map(|&x| x as i32).collect();

        let input_tensor = Tensor::<B, 1, Int>::from_ints(input_flat.as_slice(), &self.device)
            .reshape([1, seq_len]);

        let logits = self.model.forward(input_tensor);
        let probs: Vec<f32> = burn::tensor::activation::softmax(logits, 1)
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow!("Cannot read class probabilities: {e:?}"))?;

        tracing::debug!("seq_len={} probs={:?}", seq_len, probs);

        Ok(probs)
    }
}
