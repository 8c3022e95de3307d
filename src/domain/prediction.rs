// ============================================================
// Layer 3 — Prediction Domain Type
// ============================================================
// What the fake-news classifier returns for one piece of text.
//
// Class index convention (matches the fine-tuned checkpoint):
//   0 → REAL
//   1 → FAKE

use serde::{Deserialize, Serialize};

/// Binary news label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    /// Map a class index from the model head to a label.
    pub fn from_class_index(index: usize) -> Self {
        if index == 1 { Label::Fake } else { Label::Real }
    }

    /// Short form used by the interactive CLI ("REAL" / "FAKE").
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Real => "REAL",
            Label::Fake => "FAKE",
        }
    }

    /// Long form sent to HTTP clients ("Real News" / "Fake News").
    pub fn display_name(&self) -> &'static str {
        match self {
            Label::Real => "Real News",
            Label::Fake => "Fake News",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier output for a single text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label:            Label,
    /// Probability of the predicted label
    pub confidence:       f32,
    pub fake_probability: f32,
    pub real_probability: f32,
}

impl Prediction {
    /// Build a prediction from the two softmax probabilities.
    /// Ties go to REAL, mirroring argmax returning the first maximum.
    pub fn from_probabilities(real_probability: f32, fake_probability: f32) -> Self {
        let argmax = if fake_probability > real_probability { 1 } else { 0 };
        let label  = Label::from_class_index(argmax);
        let confidence = real_probability.max(fake_probability);
        Self { label, confidence, fake_probability, real_probability }
    }
}
