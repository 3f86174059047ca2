//! Keyword question answering over article sentences.
//!
//! This is not real question answering: the question is reduced to its
//! keywords and the sentence containing the most of them is returned.

mod answerer;

pub use answerer::{answer_question, extract_keywords, Answer, QuestionAnswerer};
