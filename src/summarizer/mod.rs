//! Extractive summarization.
//!
//! A summary is a subset of the article's own sentences, kept verbatim and
//! in their original order. Sentences are ranked by a [`ScoringStrategy`]
//! and the best `max_sentences` are kept.

pub mod frequency;
pub mod scorer;
pub mod selector;

pub use frequency::{build_word_freq, WordFrequencies};

use crate::config::{ScoringStrategy, SummaryConfig};
use crate::segmentation::split_sentences;
use crate::text::{clean_text, StopwordSet};
use log::{debug, trace};
use serde::Serialize;

/// A sentence kept in a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedSentence {
    /// Position of the sentence in the article (0-based).
    pub index: usize,
    /// Sentence text.
    pub text: String,
    /// Score the sentence was ranked by. `None` when the article was short
    /// enough to be returned whole and nothing was scored.
    pub score: Option<usize>,
}

/// Summary together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    /// Strategy used to rank sentences.
    pub strategy: ScoringStrategy,
    /// Requested sentence budget.
    pub max_sentences: usize,
    /// Number of sentences found in the article.
    pub sentence_count: usize,
    /// True if sentences were ranked and dropped; false if the whole article
    /// (or nothing) was returned.
    pub extracted: bool,
    /// Summary text.
    pub summary: String,
    /// Sentences making up the summary, in article order.
    pub sentences: Vec<SelectedSentence>,
}

/// Extractive summarizer.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummaryConfig,
}

impl Summarizer {
    /// Create a new summarizer with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SummaryConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to keep
    pub fn with_max_sentences(mut self, n: usize) -> Self {
        self.config.max_sentences = n;
        self
    }

    /// Set the scoring strategy
    pub fn with_strategy(mut self, strategy: ScoringStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Summarizes `text`.
    ///
    /// Returns an empty string for text without sentences, the whole
    /// normalized text when it has no more than `max_sentences` sentences,
    /// and otherwise the top sentences joined by single spaces.
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_report(text).summary
    }

    /// Summarizes `text` and reports which sentences were kept and why.
    pub fn summarize_report(&self, text: &str) -> SummaryReport {
        let max_sentences = self.config.max_sentences;
        let strategy = self.config.strategy;

        let cleaned = clean_text(text);
        let sentences = split_sentences(&cleaned);
        debug!(
            "Summarizing {} chars, {} sentences (max {}, {})",
            cleaned.len(),
            sentences.len(),
            max_sentences,
            strategy
        );

        let mut report = SummaryReport {
            strategy,
            max_sentences,
            sentence_count: sentences.len(),
            extracted: false,
            summary: String::new(),
            sentences: Vec::new(),
        };

        if sentences.is_empty() {
            return report;
        }

        if sentences.len() <= max_sentences {
            debug!("Article fits the budget, returning it unchanged");
            report.sentences = sentences
                .into_iter()
                .enumerate()
                .map(|(index, text)| SelectedSentence { index, text, score: None })
                .collect();
            report.summary = cleaned;
            return report;
        }

        let frequencies = match strategy {
            ScoringStrategy::Frequency => WordFrequencies::from_text(&cleaned, StopwordSet::summary()),
            ScoringStrategy::Length => WordFrequencies::default(),
        };
        debug!("Counted {} distinct words", frequencies.len());
        let scores = scorer::score_sentences(&sentences, &frequencies, strategy);
        for (i, score) in scores.iter().enumerate() {
            trace!("sentence {} scored {}", i, score);
        }

        let selected = selector::select_top(&scores, max_sentences);
        debug!("Selected sentences {:?}", selected);

        report.extracted = true;
        report.sentences = selected
            .into_iter()
            .map(|index| SelectedSentence {
                index,
                text: sentences[index].clone(),
                score: Some(scores[index]),
            })
            .collect();
        report.summary = report
            .sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        report
    }
}

/// Summarizes `text` into at most `max_sentences` sentences using word
/// frequency scoring.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    summarize_with(text, max_sentences, ScoringStrategy::Frequency)
}

/// Summarizes `text` with an explicit scoring strategy.
pub fn summarize_with(text: &str, max_sentences: usize, strategy: ScoringStrategy) -> String {
    Summarizer::new()
        .with_max_sentences(max_sentences)
        .with_strategy(strategy)
        .summarize(text)
}
