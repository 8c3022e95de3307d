// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Saves and restores classifier weights using burn's
// CompactRecorder.
//
// Model directory layout:
//   model/
//     classifier_config.json  ← architecture + training summary
//     model.mpk               ← weights (MessagePack, half precision)
//     tokenizer.json          ← see tokenizer_store.rs
//
// Why save the architecture separately?
//   The weights file only holds parameters. To load it, the
//   inferencer must first rebuild a model with exactly the
//   same shape (hidden size, layer count, ...), which it reads
//   from classifier_config.json.
//
// Reference: Burn Book §5 (Records and Checkpointing)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};
use serde::{Deserialize, Serialize};

use crate::ml::model::{SequenceClassifier, SequenceClassifierConfig};

const MANIFEST_FILE: &str = "classifier_config.json";
const WEIGHTS_STEM:  &str = "model";

/// Architecture of a saved classifier plus how well it trained.
/// Defaults describe bert-base-uncased with a two-class head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelManifest {
    pub vocab_size:              usize,
    pub max_position_embeddings: usize,
    pub hidden_size:             usize,
    pub num_heads:               usize,
    pub num_layers:              usize,
    pub intermediate_size:       usize,
    #[serde(default = "default_type_vocab_size")]
    pub type_vocab_size:         usize,
    #[serde(default = "default_num_labels")]
    pub num_labels:              usize,
    /// Best validation accuracy reached while fine-tuning, if recorded
    #[serde(default)]
    pub best_val_acc:            Option<f64>,
}

fn default_type_vocab_size() -> usize { 2 }
fn default_num_labels() -> usize { 2 }

impl Default for ModelManifest {
    fn default() -> Self {
        Self {
            vocab_size:              30522,
            max_position_embeddings: 512,
            hidden_size:             768,
            num_heads:               12,
            num_layers:              12,
            intermediate_size:       3072,
            type_vocab_size:         2,
            num_labels:              2,
            best_val_acc:            None,
        }
    }
}

impl ModelManifest {
    /// Inference-time model config (dropout disabled).
    pub fn model_config(&self) -> SequenceClassifierConfig {
        SequenceClassifierConfig::new(
            self.vocab_size, self.max_position_embeddings, self.hidden_size,
            self.num_heads, self.num_layers, self.intermediate_size,
        )
        .with_type_vocab_size(self.type_vocab_size)
        .with_num_labels(self.num_labels)
        .with_dropout(0.0)
    }
}

/// Manages the files of one model directory.
pub struct CheckpointManager {
    dir: PathBuf,
}

impl CheckpointManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Write model weights to {dir}/model.mpk.
    pub fn save_model<B: Backend>(&self, model: &SequenceClassifier<B>) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create model directory '{}'", self.dir.display()))?;

        // Path without extension — the recorder adds it
        let path = self.dir.join(WEIGHTS_STEM);
        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| format!("Failed to save weights to '{}'", path.display()))?;

        tracing::debug!("Saved weights to '{}'", path.display());
        Ok(())
    }

    /// Load weights into a model that already has the right architecture.
    pub fn load_model<B: Backend>(
        &self,
        model:  SequenceClassifier<B>,
        device: &B::Device,
    ) -> Result<SequenceClassifier<B>> {
        let path = self.dir.join(WEIGHTS_STEM);
        tracing::info!("Loading weights from '{}'", path.display());

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!("Cannot load weights '{}.mpk'. Is the model directory complete?",
                    path.display())
            })?;

        Ok(model.load_record(record))
    }

    pub fn save_manifest(&self, manifest: &ModelManifest) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create model directory '{}'", self.dir.display()))?;

        let path = self.dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(manifest)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write manifest to '{}'", path.display()))?;

        tracing::debug!("Saved manifest to '{}'", path.display());
        Ok(())
    }

    pub fn load_manifest(&self) -> Result<ModelManifest> {
        let path = self.dir.join(MANIFEST_FILE);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read manifest from '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Malformed manifest '{}'", path.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    fn tiny_manifest() -> ModelManifest {
        ModelManifest {
            vocab_size:              32,
            max_position_embeddings: 8,
            hidden_size:             8,
            num_heads:               2,
            num_layers:              1,
            intermediate_size:       16,
            best_val_acc:            Some(0.9312),
            ..ModelManifest::default()
        }
    }

    #[test]
    fn test_manifest_round_trips_through_disk() {
        let dir  = tempfile::tempdir().unwrap();
        let ckpt = CheckpointManager::new(dir.path());
        ckpt.save_manifest(&tiny_manifest()).unwrap();
        assert_eq!(ckpt.load_manifest().unwrap(), tiny_manifest());
    }

    #[test]
    fn test_manifest_optional_fields_default() {
        let json = r#"{"vocab_size":30522,"max_position_embeddings":512,"hidden_size":768,
                       "num_heads":12,"num_layers":12,"intermediate_size":3072}"#;
        let manifest: ModelManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest, ModelManifest::default());
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let ckpt = CheckpointManager::new(dir.path());
        let err  = ckpt.load_manifest().unwrap_err();
        assert!(format!("{err:#}").contains(MANIFEST_FILE));
    }

    #[test]
    fn test_weights_reload_gives_same_outputs() {
        let device = Default::default();
        let dir    = tempfile::tempdir().unwrap();
        let ckpt   = CheckpointManager::new(dir.path());
        let cfg    = tiny_manifest().model_config();

        let original: SequenceClassifier<NdArray> = cfg.init(&device);
        ckpt.save_model(&original).unwrap();

        // A fresh random model, then overwritten by the saved weights
        let reloaded = ckpt.load_model(cfg.init::<NdArray>(&device), &device).unwrap();

        let ids = || Tensor::<NdArray, 1, Int>::from_ints([1, 4, 9].as_slice(), &device).reshape([1, 3]);
        let a: Vec<f32> = original.forward(ids()).into_data().to_vec().unwrap();
        let b: Vec<f32> = reloaded.forward(ids()).into_data().to_vec().unwrap();

        // CompactRecorder stores half precision
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).abs() < 1e-2, "{x} vs {y}");
        }
    }
}
