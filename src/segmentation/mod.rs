//! Sentence segmentation.
//!
//! Sentences are found with a plain punctuation heuristic; see
//! [`sentence::split_sentences`].

pub mod sentence;

pub use sentence::split_sentences;
