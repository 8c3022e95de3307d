// ============================================================
// Layer 4 — Word Tokenizer
// ============================================================
// Turns one sentence into lowercase word tokens for frequency
// counting. This is unrelated to the subword tokenizer the
// classifier uses (see infra::tokenizer_store).
//
// Rules, applied in order:
//   1. Lowercase the sentence
//   2. Split on Unicode word boundaries (UAX #29), dropping
//      pure-whitespace pieces. Punctuation marks come out as
//      their own tokens, so they can be excluded later.
//   3. Re-join what UAX #29 pulls apart but Treebank-style
//      tokenization keeps whole:
//        "self" + "-" + "driving" → "self-driving"
//        "u.s"  + "."             → "u.s."  (not at sentence end)
//   4. Split English clitics off the word they attach to:
//        "don't"  → "do"  + "n't"
//        "it's"   → "it"  + "'s"
//        "they'll"→ "they"+ "'ll"

use unicode_segmentation::UnicodeSegmentation;

/// Clitic suffixes split off after a leading apostrophe.
const CLITICS: [&str; 6] = ["'s", "'re", "'ve", "'ll", "'d", "'m"];

pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize one sentence into lowercase tokens.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        let lowered = sentence.to_lowercase();

        // Offsets tell "u.s." apart from "u.s ." once whitespace is gone
        let pieces: Vec<(usize, &str)> = lowered
            .split_word_bound_indices()
            .filter(|(_, p)| !p.chars().all(char::is_whitespace))
            .collect();
        let text     = |k: usize| pieces[k].1;
        let touching = |a: usize, b: usize| pieces[a].0 + pieces[a].1.len() == pieces[b].0;

        let mut tokens = Vec::new();
        let mut i = 0;
        while i < pieces.len() {
            let mut word = text(i).to_string();

            if is_word(text(i)) {
                // ── word-hyphen-word runs ──
                while i + 2 < pieces.len()
                    && text(i + 1) == "-"
                    && is_word(text(i + 2))
                    && touching(i, i + 1)
                    && touching(i + 1, i + 2)
                {
                    word.push('-');
                    word.push_str(text(i + 2));
                    i += 2;
                }

                // ── attached period, unless it closes the sentence ──
                if i + 1 < pieces.len()
                    && text(i + 1) == "."
                    && touching(i, i + 1)
                    && pieces[i + 2..].iter().any(|&(_, p)| is_word(p))
                {
                    word.push('.');
                    i += 1;
                }
            }

            push_with_clitics(&word, &mut tokens);
            i += 1;
        }

        tokens
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_word(piece: &str) -> bool {
    piece.chars().any(char::is_alphanumeric)
}

/// Push `word`, splitting a trailing negation or clitic into its own token.
fn push_with_clitics(word: &str, tokens: &mut Vec<String>) {
    if word.len() > 3 && word.ends_with("n't") {
        let stem = &word[..word.len() - 3];
        tokens.push(stem.to_string());
        tokens.push("n't".to_string());
        return;
    }

    for clitic in CLITICS {
        if word.len() > clitic.len() && word.ends_with(clitic) {
            let stem = &word[..word.len() - clitic.len()];
            tokens.push(stem.to_string());
            tokens.push(clitic.to_string());
            return;
        }
    }

    tokens.push(word.to_string());
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn tok(s: &str) -> Vec<String> {
        WordTokenizer::new().tokenize(s)
    }

    #[test]
    fn test_lowercases_and_splits_punctuation() {
        assert_eq!(tok("AI helps doctors."), vec!["ai", "helps", "doctors", "."]);
    }

    #[test]
    fn test_commas_and_parentheses_are_tokens() {
        assert_eq!(
            tok("Artificial intelligence (AI), today"),
            vec!["artificial", "intelligence", "(", "ai", ")", ",", "today"]
        );
    }

    #[test]
    fn test_negation_split() {
        assert_eq!(tok("They don't know"), vec!["they", "do", "n't", "know"]);
        assert_eq!(tok("won't"), vec!["wo", "n't"]);
    }

    #[test]
    fn test_clitic_split() {
        assert_eq!(tok("It's here"), vec!["it", "'s", "here"]);
        assert_eq!(tok("we'll see"), vec!["we", "'ll", "see"]);
    }

    #[test]
    fn test_hyphenated_words_stay_whole() {
        assert_eq!(
            tok("The self-driving cars and decision-making e-mail"),
            vec!["the", "self-driving", "cars", "and", "decision-making", "e-mail"]
        );
        // A spaced dash is punctuation, not a compound
        assert_eq!(tok("rain - then sun"), vec!["rain", "-", "then", "sun"]);
    }

    #[test]
    fn test_dotted_acronym_keeps_its_period() {
        assert_eq!(tok("The U.S. Senate voted"), vec!["the", "u.s.", "senate", "voted"]);
        // The sentence-final period is still its own token
        assert_eq!(tok("Moved to the U.S."), vec!["moved", "to", "the", "u.s", "."]);
        assert_eq!(tok("He said \"stop.\""), vec!["he", "said", "\"", "stop", ".", "\""]);
    }

    #[test]
    fn test_numbers_stay_whole() {
        assert_eq!(tok("Up 3.5 percent"), vec!["up", "3.5", "percent"]);
    }

    #[test]
    fn test_empty_sentence() {
        assert!(tok("").is_empty());
        assert!(tok("   ").is_empty());
    }
}
