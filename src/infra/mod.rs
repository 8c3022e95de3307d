// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that do not belong to any single
// business layer:
//
//   checkpoint.rs      — Model directory I/O
//                        Reads/writes the architecture manifest
//                        (JSON) and the burn CompactRecorder
//                        weights file.
//
//   tokenizer_store.rs — Loads tokenizer.json from the model
//                        directory and pins truncation to the
//                        512-token limit.
//
//   config.rs          — Server settings (listen address, model
//                        directory, summary sentence order).
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Burn Book §5 (Checkpointing)

/// Model manifest and weight loading/saving
pub mod checkpoint;

/// Tokenizer loading and truncation settings
pub mod tokenizer_store;

/// HTTP server settings
pub mod config;
