// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that name the core
// concepts of the service.
//
// Rules for this layer:
//   - NO burn or tokenizers types
//   - NO HTTP types (axum lives in Layer 1)
//   - NO file I/O
//
// Everything here is cheap to construct in tests, which is
// why the HTTP and CLI layers are tested against stub
// implementations of TextClassifier.

// An article to summarize and the summary built from it
pub mod article;

// Classifier output: REAL / FAKE label and class probabilities
pub mod prediction;

// Seam between the presentation layer and the inference code
pub mod traits;
