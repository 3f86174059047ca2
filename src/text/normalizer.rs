//! Whitespace normalization for pasted article text.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapses line breaks and irregular spacing into a single clean line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Creates a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalizes text.
    ///
    /// Carriage returns and newlines become spaces, every run of whitespace
    /// becomes a single space and the result is trimmed. Empty input gives
    /// an empty string.
    pub fn normalize(&self, text: &str) -> String {
        let flattened = text.replace(['\r', '\n'], " ");
        WHITESPACE_RUN.replace_all(&flattened, " ").trim().to_string()
    }
}

/// Normalizes whitespace in `text`. See [`Normalizer::normalize`].
pub fn clean_text(text: &str) -> String {
    Normalizer::new().normalize(text)
}
