//! Fast regex-based sentence segmentation.
//!
//! A sentence ends wherever `.`, `!` or `?` is directly followed by one or
//! more spaces. Nothing else is special-cased: abbreviations such as
//! "Dr. Smith", decimals followed by a space and quoted endings can split a
//! sentence in the wrong place. That is accepted behavior for this splitter.

use once_cell::sync::Lazy;
use regex::Regex;

/// A terminator followed by the run of spaces that separates it from the
/// next sentence.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?] +").unwrap());

/// Splits text into sentences using punctuation boundaries.
///
/// The terminator stays with the sentence it closes. Fragments are trimmed
/// and empty ones dropped. Text without any boundary comes back as a single
/// sentence; empty text gives no sentences.
///
/// # Example
/// ```
/// use newsbrief::segmentation::sentence::split_sentences;
///
/// let sentences = split_sentences("Markets rose. Did bonds follow? Not yet!");
/// assert_eq!(sentences, vec!["Markets rose.", "Did bonds follow?", "Not yet!"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // Terminators are single-byte ASCII.
        let end = boundary.start() + 1;
        push_fragment(&mut sentences, &text[start..end]);
        start = boundary.end();
    }
    push_fragment(&mut sentences, &text[start..]);

    sentences
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
