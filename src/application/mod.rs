// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for each capability the
// service offers.
//
// Rules for this layer:
//   - No tensor code here (that's Layer 5)
//   - No HTTP or terminal I/O here (that's Layer 1)
//   - No file access beyond asking Layer 6 to load things
//
// Both use cases are plain structs: the HTTP handlers and the
// CLI commands construct them once and call into them.

// Extractive word-frequency summarization
pub mod summarize_use_case;

// Fake-news classification service (FakeNewsPredictor)
pub mod classify_use_case;
