//! Sentence scoring.

use super::frequency::WordFrequencies;
use crate::config::ScoringStrategy;
use crate::text::Tokenizer;

/// Scores every sentence with the given strategy, in sentence order.
///
/// `frequencies` is only consulted by [`ScoringStrategy::Frequency`].
pub fn score_sentences(
    sentences: &[String],
    frequencies: &WordFrequencies,
    strategy: ScoringStrategy,
) -> Vec<usize> {
    match strategy {
        ScoringStrategy::Frequency => {
            let tokenizer = Tokenizer::new();
            sentences
                .iter()
                .map(|s| frequency_score(&tokenizer, s, frequencies))
                .collect()
        }
        ScoringStrategy::Length => sentences.iter().map(|s| length_score(s)).collect(),
    }
}

/// Sum of article frequencies over the sentence's tokens.
///
/// A word appearing twice in the sentence contributes twice.
pub fn frequency_score(tokenizer: &Tokenizer, sentence: &str, frequencies: &WordFrequencies) -> usize {
    tokenizer
        .tokenize_to_strings(sentence)
        .iter()
        .map(|w| frequencies.get(w))
        .sum()
}

/// Number of characters in the sentence.
pub fn length_score(sentence: &str) -> usize {
    sentence.chars().count()
}
