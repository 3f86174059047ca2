//! Article-wide word frequency counting.

use crate::text::{StopwordSet, Tokenizer};
use rustc_hash::FxHashMap;

/// Occurrence counts of the non-stopword tokens of a text.
///
/// Words that never occurred read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: FxHashMap<String, usize>,
}

impl WordFrequencies {
    /// Counts the tokens of `text`, skipping anything in `stopwords`.
    pub fn from_text(text: &str, stopwords: &StopwordSet) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for word in Tokenizer::new().tokenize_to_strings(text) {
            if stopwords.is_stopword(&word) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for `word`, zero if absent.
    #[inline]
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no word was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Builds word frequencies for `text` using the summary stopword set.
pub fn build_word_freq(text: &str) -> WordFrequencies {
    WordFrequencies::from_text(text, StopwordSet::summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::SUMMARY_STOPWORDS;

    #[test]
    fn test_counts() {
        let freq = build_word_freq("The storm hit. The storm moved north. Storm damage was light.");

        assert_eq!(freq.get("storm"), 3);
        assert_eq!(freq.get("north"), 1);
        assert_eq!(freq.get("damage"), 1);
        assert_eq!(freq.get("hurricane"), 0);
    }

    #[test]
    fn test_case_folded() {
        let freq = build_word_freq("Apple apple APPLE");
        assert_eq!(freq.get("apple"), 3);
        assert_eq!(freq.len(), 1);
    }

    #[test]
    fn test_stopwords_excluded() {
        let text = SUMMARY_STOPWORDS.join(" ") + " budget budget";
        let freq = build_word_freq(&text);

        for stopword in SUMMARY_STOPWORDS {
            assert_eq!(freq.get(stopword), 0, "stopword {} was counted", stopword);
        }
        assert_eq!(freq.get("budget"), 2);
        assert_eq!(freq.len(), 1);
    }

    #[test]
    fn test_question_words_are_counted() {
        // Only the summary stopwords apply here.
        let freq = build_word_freq("What happened and why?");
        assert_eq!(freq.get("what"), 1);
        assert_eq!(freq.get("why"), 1);
        assert_eq!(freq.get("and"), 0);
    }

    #[test]
    fn test_custom_stopwords() {
        let stopwords = StopwordSet::from_list(&["storm"]);
        let freq = WordFrequencies::from_text("The storm hit.", &stopwords);
        assert_eq!(freq.get("storm"), 0);
        assert_eq!(freq.get("the"), 1);
    }

    #[test]
    fn test_empty_text() {
        let freq = build_word_freq("");
        assert!(freq.is_empty());
        assert_eq!(freq.len(), 0);
    }
}
