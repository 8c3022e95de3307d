// ============================================================
// Layer 1 — Interactive Headline Tester
// ============================================================
// A small read-classify-print loop for trying the classifier
// by hand. Input and output are generic so tests can drive it
// with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::domain::{prediction::Prediction, traits::TextClassifier};

fn rule() -> String {
    "-".repeat(50)
}

/// Print one prediction the way the tester shows it.
pub fn write_results<W: Write>(output: &mut W, prediction: &Prediction) -> Result<()> {
    writeln!(output, "\nResults:")?;
    writeln!(output, "Prediction: {}", prediction.label)?;
    writeln!(output, "Confidence: {:.2}%", prediction.confidence * 100.0)?;
    writeln!(output, "Fake Probability: {:.2}%", prediction.fake_probability * 100.0)?;
    writeln!(output, "Real Probability: {:.2}%", prediction.real_probability * 100.0)?;
    writeln!(output, "{}", rule())?;
    Ok(())
}

/// Prompt for headlines until `quit` or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    classifier: &dyn TextClassifier,
    mut input:  R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "\n=== Interactive Testing Mode ===")?;
    writeln!(output, "Enter news headlines to test (type 'quit' to exit)")?;
    writeln!(output, "{}", rule())?;

    let mut line = String::new();
    loop {
        write!(output, "\nEnter a news headline: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let text = line.trim();
        if text.eq_ignore_ascii_case("quit") {
            break;
        }
        if text.is_empty() {
            continue;
        }

        match classifier.classify(text) {
            Ok(prediction) => write_results(&mut output, &prediction)?,
            Err(e) => {
                tracing::warn!("Classification failed: {:#}", e);
                writeln!(output, "\nError: {e:#}")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every text it is asked about.
    struct RecordingClassifier {
        seen: Mutex<Vec<String>>,
    }

    impl RecordingClassifier {
        fn new() -> Self {
            Self { seen: Mutex::new(Vec::new()) }
        }
    }

    impl TextClassifier for RecordingClassifier {
        fn classify(&self, text: &str) -> Result<Prediction> {
            self.seen.lock().unwrap().push(text.to_string());
            Ok(Prediction::from_probabilities(0.25, 0.75))
        }
    }

    fn run(input: &str) -> (String, Vec<String>) {
        let classifier = RecordingClassifier::new();
        let mut output = Vec::new();
        run_interactive(&classifier, input.as_bytes(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        (text, classifier.seen.into_inner().unwrap())
    }

    #[test]
    fn test_prints_percentages() {
        let (out, seen) = run("Aliens built the pyramids\nquit\n");
        assert_eq!(seen, vec!["Aliens built the pyramids"]);
        assert!(out.contains("Prediction: FAKE"));
        assert!(out.contains("Confidence: 75.00%"));
        assert!(out.contains("Fake Probability: 75.00%"));
        assert!(out.contains("Real Probability: 25.00%"));
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let (_, seen) = run("QUIT\nnever classified\n");
        assert!(seen.is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (_, seen) = run("\n   \nfirst\n\nsecond\n");
        assert_eq!(seen, vec!["first", "second"]);
    }

    #[test]
    fn test_stops_at_end_of_input() {
        let (out, seen) = run("only one");
        assert_eq!(seen, vec!["only one"]);
        assert!(out.starts_with("\n=== Interactive Testing Mode ==="));
    }
}
