//! Custom error types for spinquiz
//!
//! User-friendly error messages for all failure scenarios.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the spinquiz application
#[derive(Error, Debug)]
pub enum QuizError {
    /// Question file could not be read
    #[error("Cannot read question file '{0}'.\n\n  → Check that the path exists and is readable.\n  → Run without --data to use the bundled question set.")]
    DataFileNotFound(PathBuf),

    /// A question record violates the data invariants
    #[error("Invalid question in category '{category}': {reason}\n\n  → Fix the record in your question file and run 'sq validate' again.")]
    InvalidRecord {
        /// Category label of the offending record
        category: String,
        /// What the record got wrong
        reason: String,
    },

    /// The question collection is empty
    #[error("The question set is empty.\n\n  → A quiz needs at least one question to spin for.")]
    EmptyQuestionSet,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Failed to parse question file: {0}\n\n  → Expected a JSON array of question objects with a 'correctIndex' field.")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for QuizError {
    fn from(err: toml::de::Error) -> Self {
        QuizError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for QuizError {
    fn from(err: toml::ser::Error) -> Self {
        QuizError::Toml(err.to_string())
    }
}

/// Result type alias using QuizError
pub type Result<T> = std::result::Result<T, QuizError>;
