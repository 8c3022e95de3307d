// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL burn framework specific code.
// No other layer builds tensors; the application layer hands
// in token ids and gets plain `Vec<f32>` probabilities back.
//
// What's in this layer:
//
//   model.rs      — BERT-style sequence classifier
//                   • Token, position and segment embeddings
//                   • Post-norm encoder blocks (self-attention,
//                     GELU feed-forward, residuals)
//                   • tanh pooler over the [CLS] position
//                   • Linear head, one logit per class
//
//   inferencer.rs — Loads a checkpoint, runs one token sequence
//                   through the model, returns softmax
//                   probabilities
//
// The backend is NdArray (CPU) by default; building with the
// `wgpu` feature switches inference to the GPU.
//
// Reference: Devlin et al. (2019) BERT
//            Vaswani et al. (2017) Attention Is All You Need

/// Sequence classification model architecture
pub mod model;

/// Inference engine — checkpoint loading and class probabilities
pub mod inferencer;
