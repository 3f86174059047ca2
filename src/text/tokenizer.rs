//! Tokenization for text processing.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

/// Maximal runs of word characters (letters, digits, marks, underscore).
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Tokenizer that splits text into lowercase word tokens.
///
/// Punctuation and whitespace separate tokens and are never part of one, so
/// `"U.S."` yields `["u", "s"]` and `"don't"` yields `["don", "t"]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    pub fn new() -> Self {
        Self
    }

    /// Tokenizes text into lowercase word strings, in order.
    pub fn tokenize_to_strings(&self, text: &str) -> Vec<String> {
        WORD.find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }

    /// Returns the distinct tokens of `text`.
    pub fn unique_words(&self, text: &str) -> FxHashSet<String> {
        WORD.find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}
