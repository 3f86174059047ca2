//! # Newsbrief - Extractive News Summarizer
//!
//! Newsbrief condenses a pasted news article into its most informative
//! sentences and answers simple keyword questions about it.
//!
//! ## Overview
//!
//! Everything here is a heuristic over plain text. Sentences are scored by
//! how often their words occur in the whole article (or, in the simpler
//! mode, by their length), and the best ones are returned in the order they
//! were written. Questions are answered by returning the sentence sharing
//! the most keywords with the question.
//!
//! ## Quick Start
//!
//! ```rust
//! use newsbrief::{answer_question, clean_text, split_sentences, summarize};
//!
//! let article = "Rain fell on Monday. The rain flooded roads. \
//!                Officials closed roads near the river. Schools stayed open.";
//!
//! let summary = summarize(article, 2);
//! assert_eq!(summary, "The rain flooded roads. Officials closed roads near the river.");
//!
//! let sentences = split_sentences(&clean_text(article));
//! let answer = answer_question("Which schools stayed open?", &sentences);
//! assert_eq!(answer, "Schools stayed open.");
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Whitespace normalization, tokenization and stopword sets
//! - [`segmentation`] - Punctuation-based sentence splitting
//! - [`summarizer`] - Word frequencies, sentence scoring and selection
//! - [`qa`] - Keyword question answering
//! - [`shell`] - Interactive read-eval loop used by the CLI
//!
//! All core functions are total: they never fail and degrade to an empty
//! string or a canned message instead.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod qa;
pub mod segmentation;
pub mod shell;
pub mod summarizer;
pub mod text;

// Re-export commonly used types
pub use config::{Config, QuestionConfig, ScoringStrategy, SummaryConfig};
pub use error::{BriefError, Result};
pub use qa::{answer_question, Answer, QuestionAnswerer};
pub use segmentation::split_sentences;
pub use summarizer::{
    build_word_freq, summarize, summarize_with, SelectedSentence, SummaryReport, Summarizer,
    WordFrequencies,
};
pub use text::{clean_text, Normalizer, StopwordSet, Tokenizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of sentences kept in a summary.
pub const DEFAULT_MAX_SENTENCES: usize = 3;
