//! Error types for the folding engine.

use thiserror::Error;

/// Result type for folding operations
pub type Result<T> = std::result::Result<T, FoldingError>;

/// Errors that can occur while configuring or running the engine
///
/// Malformed markup is never an error; it only yields fewer ranges.
#[derive(Debug, Error)]
pub enum FoldingError {
    /// The caller abandoned the computation
    #[error("Folding computation cancelled")]
    Cancelled,

    /// An embedded-language provider failed on its region
    #[error("Folding provider for '{language}' failed: {message}")]
    Provider { language: String, message: String },

    /// A region marker pattern does not compile
    #[error("Invalid region marker: {0}")]
    InvalidMarker(#[from] regex::Error),

    /// Settings could not be parsed
    #[error("Invalid settings: {0}")]
    Config(#[from] toml::de::Error),
}

impl FoldingError {
    /// Build a provider failure for the given language
    pub fn provider(language: impl Into<String>, message: impl Into<String>) -> Self {
        FoldingError::Provider {
            language: language.into(),
            message: message.into(),
        }
    }
}
