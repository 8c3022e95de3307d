// ============================================================
// Layer 4 — Stopword / Punctuation Exclusion Set
// ============================================================
// Tokens in this set never count towards word frequencies.
//
// Two sources are merged:
//   1. The English stopword list (179 entries, the list shipped
//      with the NLTK corpus, including contraction fragments
//      such as "don", "t" and "shouldn't")
//   2. Every ASCII punctuation character as a one-char token
//
// Lookups are exact: the summarizer lowercases tokens before
// asking, so the set itself only holds lowercase entries.

use std::collections::HashSet;

/// English stopwords.
pub const ENGLISH_STOPWORDS: [&str; 179] = [
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "that'll", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below",
    "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t",
    "can", "will", "just", "don", "don't", "should", "should've", "now", "d", "ll",
    "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn",
    "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// ASCII punctuation, one character per excluded token.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Set of tokens that carry no weight when scoring sentences.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    words: HashSet<String>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::english()
    }
}

impl ExclusionSet {
    /// English stopwords plus ASCII punctuation.
    pub fn english() -> Self {
        let mut set = Self::from_list(&ENGLISH_STOPWORDS);
        set.words.extend(PUNCTUATION.chars().map(|c| c.to_string()));
        set
    }

    /// Build a set from a custom word list (punctuation not included).
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// True when `token` must be skipped.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_set_size() {
        // 179 stopwords + 32 punctuation characters, no overlap
        let set = ExclusionSet::english();
        assert_eq!(PUNCTUATION.chars().count(), 32);
        assert_eq!(set.len(), 179 + 32);
    }

    #[test]
    fn test_common_words_excluded() {
        let set = ExclusionSet::english();
        for w in ["the", "are", "is", "don't", "t", "s"] {
            assert!(set.contains(w), "{w} should be excluded");
        }
    }

    #[test]
    fn test_punctuation_excluded() {
        let set = ExclusionSet::english();
        for p in [".", ",", "!", "?", "'", "\"", "(", ")", "-"] {
            assert!(set.contains(p), "{p} should be excluded");
        }
    }

    #[test]
    fn test_content_words_and_multichar_punctuation_kept() {
        let set = ExclusionSet::english();
        assert!(!set.contains("doctors"));
        assert!(!set.contains("ai"));
        // The contraction fragment is not on the list
        assert!(!set.contains("n't"));
        assert!(!set.contains("..."));
    }

    #[test]
    fn test_custom_list_is_lowercased() {
        let set = ExclusionSet::from_list(&["Foo", "BAR"]);
        assert!(set.contains("foo"));
        assert!(set.contains("bar"));
        assert!(!set.contains("."));
    }
}
