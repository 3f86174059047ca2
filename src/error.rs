//! Error types for the newsbrief command-line layer.
//!
//! The summarization and question answering core never fails; these errors
//! only arise while reading input, validating settings or printing output.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for newsbrief operations.
#[derive(Error, Debug)]
pub enum BriefError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while rendering structured output.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Empty input.
    #[error("Empty input: {0}")]
    EmptyInput(String),
}

/// Result type alias for newsbrief operations.
pub type Result<T> = std::result::Result<T, BriefError>;

impl From<serde_json::Error> for BriefError {
    fn from(err: serde_json::Error) -> Self {
        BriefError::Serialization(err.to_string())
    }
}
