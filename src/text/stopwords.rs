//! Stopword filtering
//!
//! Two fixed word lists are used: one tuned for scoring summary sentences
//! and a smaller one for pulling keywords out of questions. Both are
//! immutable and shared; callers pass the set they want explicitly.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Words ignored when counting word frequencies for summaries.
pub const SUMMARY_STOPWORDS: &[&str] = &[
    "the", "is", "and", "a", "an", "to", "of", "in", "on", "for", "this", "that", "it", "as",
    "at", "by", "from", "with", "be", "are", "was", "were", "or", "has", "have", "had", "will",
    "would", "can", "could",
];

/// Filler words stripped from questions before keyword matching.
pub const QUESTION_STOPWORDS: &[&str] = &[
    "what", "when", "where", "who", "why", "how", "is", "was", "the", "a", "an", "in", "of",
    "for", "to", "do", "does", "it",
];

static SUMMARY: Lazy<StopwordSet> = Lazy::new(|| StopwordSet::from_list(SUMMARY_STOPWORDS));
static QUESTION: Lazy<StopwordSet> = Lazy::new(|| StopwordSet::from_list(QUESTION_STOPWORDS));

/// An immutable set of lowercase stopwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// The shared summary stopword set.
    pub fn summary() -> &'static StopwordSet {
        &SUMMARY
    }

    /// The shared question stopword set.
    pub fn question() -> &'static StopwordSet {
        &QUESTION
    }

    /// Create a set from a custom list. Words are lowercased.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Check if a word is a stopword.
    ///
    /// Tokens reaching this point are already lowercase, so the lookup is
    /// case-sensitive.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stopwords in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_stopwords() {
        let set = StopwordSet::summary();

        assert_eq!(set.len(), 30);
        assert!(set.is_stopword("the"));
        assert!(set.is_stopword("could"));
        assert!(!set.is_stopword("what"));
        assert!(!set.is_stopword("economy"));
    }

    #[test]
    fn test_question_stopwords() {
        let set = StopwordSet::question();

        assert_eq!(set.len(), 18);
        assert!(set.is_stopword("what"));
        assert!(set.is_stopword("does"));
        assert!(!set.is_stopword("are"));
        assert!(!set.is_stopword("dogs"));
    }

    #[test]
    fn test_sets_are_independent() {
        assert!(StopwordSet::summary().is_stopword("and"));
        assert!(!StopwordSet::question().is_stopword("and"));
        assert!(StopwordSet::question().is_stopword("why"));
        assert!(!StopwordSet::summary().is_stopword("why"));
    }

    #[test]
    fn test_custom_list_lowercased() {
        let set = StopwordSet::from_list(&["Breaking", "NEWS"]);
        assert!(set.is_stopword("breaking"));
        assert!(set.is_stopword("news"));
        assert!(!set.is_stopword("NEWS"));
    }

    #[test]
    fn test_default_set_is_empty() {
        let set = StopwordSet::default();
        assert!(set.is_empty());
        assert!(!set.is_stopword("the"));
    }
}
