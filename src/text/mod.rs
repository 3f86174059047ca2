//! Text processing module for whitespace normalization, tokenization and stopwords.

mod normalizer;
mod stopwords;
mod tokenizer;

pub use normalizer::{clean_text, Normalizer};
pub use stopwords::{StopwordSet, QUESTION_STOPWORDS, SUMMARY_STOPWORDS};
pub use tokenizer::Tokenizer;
