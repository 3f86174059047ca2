//! Configuration for summarization and question answering.

use crate::error::{BriefError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Main configuration for a newsbrief session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Summary configuration.
    pub summary: SummaryConfig,

    /// Question answering configuration.
    pub question: QuestionConfig,
}

impl Config {
    /// Checks that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        if self.summary.max_sentences == 0 {
            return Err(BriefError::Config(
                "max_sentences must be at least 1".to_string(),
            ));
        }
        if self.question.not_understood.trim().is_empty() {
            return Err(BriefError::Config(
                "not_understood message must not be empty".to_string(),
            ));
        }
        if self.question.not_found.trim().is_empty() {
            return Err(BriefError::Config(
                "not_found message must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// How sentences are scored before the top ones are picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringStrategy {
    /// Sum of article-wide word frequencies of the sentence's words.
    #[default]
    Frequency,
    /// Character length of the sentence. Cheaper and noticeably cruder.
    Length,
}

impl ScoringStrategy {
    /// Lowercase name used on the command line and in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringStrategy::Frequency => "frequency",
            ScoringStrategy::Length => "length",
        }
    }
}

impl fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Maximum number of sentences in the summary.
    /// Default: 3.
    pub max_sentences: usize,

    /// Sentence scoring strategy.
    /// Default: frequency.
    pub strategy: ScoringStrategy,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_sentences: crate::DEFAULT_MAX_SENTENCES,
            strategy: ScoringStrategy::default(),
        }
    }
}

/// Question answering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionConfig {
    /// Reply used when a question has no keywords left after stopword removal.
    pub not_understood: String,

    /// Reply used when no sentence shares a keyword with the question.
    pub not_found: String,
}

/// Reply when a question contains only filler words.
pub const NOT_UNDERSTOOD_MESSAGE: &str =
    "I'm not sure how to answer that. Try asking more specifically.";

/// Reply when nothing in the article matches the question.
pub const NOT_FOUND_MESSAGE: &str =
    "I couldn't find anything related to that question in the article.";

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            not_understood: NOT_UNDERSTOOD_MESSAGE.to_string(),
            not_found: NOT_FOUND_MESSAGE.to_string(),
        }
    }
}
