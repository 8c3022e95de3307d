// ============================================================
// Layer 4 — Sentence Segmenter
// ============================================================
// Splits an article into an ordered list of sentences.
//
// Two passes:
//   1. Unicode sentence boundaries (UAX #29) via the
//      unicode-segmentation crate. This already keeps decimals
//      ("3.14"), lowercase continuations ("e.g. the") and
//      tight abbreviations ("U.S.A") together.
//   2. A repair pass that glues a boundary back together when
//      the piece before it cannot end a sentence:
//        - it does not end in . ! ? (UAX breaks after every
//          newline; a sentence wrapped across lines must be
//          reassembled)
//        - its last word is a known abbreviation ("Dr.", "Mr.")
//        - its last word is a dotted acronym ("U.S.", "p.m.")
//        - its last word is an initial inside a run of
//          initials ("J. K. Rowling"). A lone capital before a
//          period ("Plan B.", "So was I.") still ends a sentence.
//
// Every returned sentence is a trimmed, verbatim substring of
// the input, so callers can match it back to the article.

use unicode_segmentation::UnicodeSegmentation;

/// Lowercased abbreviations that never end a sentence on their own.
/// Ambiguous ones ("etc.", "no.", "co.") are left out because they
/// close sentences at least as often as they open a name.
const ABBREVIATIONS: [&str; 42] = [
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "inc", "ltd", "corp",
    "dept", "univ", "gen", "gov", "sen", "rep", "col", "lt", "sgt", "capt", "cmdr",
    "adm", "maj", "mt", "ave", "blvd", "fig", "approx", "jan", "feb", "mar", "apr",
    "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Characters that may trail a sentence terminator: closing quotes and brackets.
const CLOSERS: [char; 8] = ['"', '\'', ')', ']', '}', '\u{201D}', '\u{2019}', '\u{00BB}'];

pub struct SentenceSegmenter;

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into sentences in document order.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();

        // Byte offset where the sentence currently being assembled starts
        let mut start = 0usize;
        let mut end   = 0usize;

        let mut pieces = text.split_sentence_bound_indices().peekable();
        while let Some((offset, piece)) = pieces.next() {
            end = offset + piece.len();
            let candidate = text[start..end].trim();

            if candidate.is_empty() {
                start = end;
                continue;
            }

            let next = pieces.peek().map(|&(_, p)| p);
            if ends_sentence(candidate, next) {
                sentences.push(candidate);
                start = end;
            }
        }

        // Whatever is left (no terminal punctuation) is the last sentence
        let rest = text[start..end].trim();
        if !rest.is_empty() {
            sentences.push(rest);
        }

        sentences
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a trimmed candidate can stand as a complete sentence.
/// `next` is the raw piece UAX #29 would start next, if any.
fn ends_sentence(candidate: &str, next: Option<&str>) -> bool {
    let body = candidate.trim_end_matches(CLOSERS);

    match body.chars().last() {
        Some('!') | Some('?') | Some('\u{2026}') => true,
        Some('.') => !ends_with_abbreviation(body, next),
        _ => false,
    }
}

/// Strip leading punctuation and trailing periods from a word.
fn bare_word(word: &str) -> &str {
    word.trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end_matches('.')
}

/// A single letter followed by a period: "J.", "K."
fn is_initial(word: &str) -> bool {
    let bare = bare_word(word);
    word.ends_with('.') && bare.chars().count() == 1 && bare.chars().all(char::is_alphabetic)
}

/// True when the word holding the final '.' is an abbreviation, a
/// dotted acronym, or one initial in a run of initials.
fn ends_with_abbreviation(body: &str, next: Option<&str>) -> bool {
    let mut words = body.rsplit(char::is_whitespace).filter(|w| !w.is_empty());
    let last_word = words.next().unwrap_or("");
    let bare      = bare_word(last_word);

    if bare.is_empty() {
        return false;
    }

    let lower = bare.to_lowercase();
    if ABBREVIATIONS.contains(&lower.as_str()) {
        return true;
    }

    let parts: Vec<&str> = lower.split('.').collect();
    let all_letters = parts
        .iter()
        .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic));
    if !all_letters {
        return false;
    }

    // "u.s" in "U.S.", "p.m" in "5 p.m."
    if parts.len() > 1 {
        return true;
    }

    // "J." glues only next to another initial: "J. K. Rowling"
    let after_initial  = words.next().is_some_and(is_initial);
    let before_initial = next
        .and_then(|p| p.split_whitespace().next())
        .is_some_and(is_initial);
    after_initial || before_initial
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        SentenceSegmenter::new().split(text)
    }

    #[test]
    fn test_simple_sentences() {
        assert_eq!(
            split("AI helps doctors. Cats are animals! Is it true?"),
            vec!["AI helps doctors.", "Cats are animals!", "Is it true?"]
        );
    }

    #[test]
    fn test_titles_and_decimals_do_not_split() {
        assert_eq!(
            split("Dr. Smith went to Washington. He arrived at 3.14 p.m."),
            vec!["Dr. Smith went to Washington.", "He arrived at 3.14 p.m."]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        assert_eq!(
            split("J. K. Rowling wrote another book. Fans queued overnight."),
            vec!["J. K. Rowling wrote another book.", "Fans queued overnight."]
        );
    }

    #[test]
    fn test_lone_capital_letter_ends_sentence() {
        assert_eq!(
            split("We chose Plan B. Then it rained."),
            vec!["We chose Plan B.", "Then it rained."]
        );
        assert_eq!(split("So was I. He left."), vec!["So was I.", "He left."]);
    }

    #[test]
    fn test_acronym_before_capital_does_not_split() {
        assert_eq!(
            split("Officials in the U.S. Senate voted. The bill passed."),
            vec!["Officials in the U.S. Senate voted.", "The bill passed."]
        );
    }

    #[test]
    fn test_line_wrapped_sentence_is_rejoined() {
        assert_eq!(
            split("The storm moved\nnorth overnight. Roads reopened."),
            vec!["The storm moved\nnorth overnight.", "Roads reopened."]
        );
    }

    #[test]
    fn test_newline_after_period_splits() {
        assert_eq!(
            split("First sentence here.\nSecond sentence here."),
            vec!["First sentence here.", "Second sentence here."]
        );
    }

    #[test]
    fn test_quoted_ending() {
        assert_eq!(
            split("He said \"stop.\" Then he left."),
            vec!["He said \"stop.\"", "Then he left."]
        );
    }

    #[test]
    fn test_trailing_fragment_kept() {
        assert_eq!(split("One. Two without end"), vec!["One.", "Two without end"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(split("").is_empty());
        assert!(split("   \n  ").is_empty());
    }

    #[test]
    fn test_sentences_are_verbatim_substrings() {
        let text = "  Markets fell sharply.   Investors, however, stayed calm.  ";
        for s in split(text) {
            assert!(text.contains(s));
            assert_eq!(s, s.trim());
        }
    }
}
