// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Normalises headline text before it reaches the tokenizer.
//
// Headlines scraped from news pages arrive with:
//   - Newlines and tabs from the page layout
//   - Runs of spaces left behind by removed markup
//   - Non-breaking spaces (U+00A0) from HTML entities
//
// The classifier was fine-tuned on single-spaced text, so
// every run of whitespace collapses to one ASCII space and
// the ends are trimmed. Nothing else is altered: case,
// punctuation and symbols are left for the tokenizer.

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Collapse every run of Unicode whitespace into a single space
    /// and trim both ends.
    pub fn collapse_whitespace(&self, text: &str) -> String {
        let mut out     = String::with_capacity(text.len());
        let mut pending = false;

        for c in text.chars() {
            if c.is_whitespace() {
                // Only emit the separator once a word follows it,
                // which also drops leading and trailing whitespace
                pending = !out.is_empty();
            } else {
                if pending {
                    out.push(' ');
                    pending = false;
                }
                out.push(c);
            }
        }

        out
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_multiple_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.collapse_whitespace("breaking   news"), "breaking news");
    }

    #[test]
    fn test_trims_edges() {
        let p = Preprocessor::new();
        assert_eq!(p.collapse_whitespace("  breaking news  "), "breaking news");
    }

    #[test]
    fn test_newlines_and_tabs_become_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.collapse_whitespace("Senate\n\tpasses\r\nbill"), "Senate passes bill");
    }

    #[test]
    fn test_non_breaking_space_collapses() {
        let p = Preprocessor::new();
        assert_eq!(p.collapse_whitespace("Mars\u{00A0}\u{00A0}landing"), "Mars landing");
    }

    #[test]
    fn test_empty_and_blank() {
        let p = Preprocessor::new();
        assert_eq!(p.collapse_whitespace(""), "");
        assert_eq!(p.collapse_whitespace(" \n "), "");
    }
}
