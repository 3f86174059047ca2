//! Keyword overlap answerer.

use crate::config::QuestionConfig;
use crate::text::{StopwordSet, Tokenizer};
use log::debug;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Outcome of answering a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    /// The best matching sentence.
    Sentence {
        /// Position of the sentence in the article.
        index: usize,
        /// Sentence text, verbatim.
        text: String,
        /// Number of distinct question keywords found in the sentence.
        score: usize,
    },
    /// The question had no keywords left after removing filler words.
    NoKeywords,
    /// No sentence contains any of the question's keywords.
    NoMatch,
}

impl Answer {
    /// Text shown to the user, with canned replies taken from `config`.
    pub fn message<'a>(&'a self, config: &'a QuestionConfig) -> &'a str {
        match self {
            Answer::Sentence { text, .. } => text.as_str(),
            Answer::NoKeywords => config.not_understood.as_str(),
            Answer::NoMatch => config.not_found.as_str(),
        }
    }

    /// Returns true if a sentence was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Answer::Sentence { .. })
    }
}

/// Returns the distinct keywords of a question, in first-seen order.
pub fn extract_keywords(question: &str, stopwords: &StopwordSet) -> Vec<String> {
    let mut seen = FxHashSet::default();
    Tokenizer::new()
        .tokenize_to_strings(question)
        .into_iter()
        .filter(|w| !stopwords.is_stopword(w))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Answers questions by keyword overlap.
#[derive(Debug, Clone, Default)]
pub struct QuestionAnswerer {
    config: QuestionConfig,
}

impl QuestionAnswerer {
    /// Creates an answerer with the default replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an answerer with custom replies.
    pub fn with_config(config: QuestionConfig) -> Self {
        Self { config }
    }

    /// Finds the sentence sharing the most distinct keywords with `question`.
    ///
    /// Sentences are scanned in order and a later sentence only wins with a
    /// strictly higher score, so the first of several equally good sentences
    /// is returned.
    pub fn answer<S: AsRef<str>>(&self, question: &str, sentences: &[S]) -> Answer {
        let keywords = extract_keywords(question, StopwordSet::question());
        if keywords.is_empty() {
            debug!("Question {:?} has no keywords", question);
            return Answer::NoKeywords;
        }
        debug!("Question keywords: {:?}", keywords);

        let tokenizer = Tokenizer::new();
        let mut best: Option<(usize, usize)> = None;
        let mut best_score = 0;

        for (index, sentence) in sentences.iter().enumerate() {
            let words = tokenizer.unique_words(sentence.as_ref());
            let score = keywords.iter().filter(|k| words.contains(k.as_str())).count();
            if score > best_score {
                best_score = score;
                best = Some((index, score));
            }
        }

        match best {
            Some((index, score)) => Answer::Sentence {
                index,
                text: sentences[index].as_ref().to_string(),
                score,
            },
            None => Answer::NoMatch,
        }
    }

    /// Answers `question` and returns the text to show the user.
    pub fn reply<S: AsRef<str>>(&self, question: &str, sentences: &[S]) -> String {
        self.answer(question, sentences)
            .message(&self.config)
            .to_string()
    }
}

/// Answers `question` from `sentences` with the default replies.
pub fn answer_question<S: AsRef<str>>(question: &str, sentences: &[S]) -> String {
    QuestionAnswerer::new().reply(question, sentences)
}
