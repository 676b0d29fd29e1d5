//! Error types for Oppsum.

use thiserror::Error;

/// Library-level error type for Oppsum operations.
#[derive(Error, Debug)]
pub enum OppsumError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Video search failed: {0}")]
    Search(String),

    #[error("Caption fetch failed: {0}")]
    Captions(String),

    #[error("Summary generation failed: {0}")]
    Summarize(String),

    #[error("Summary response was not valid JSON: {0}")]
    SummaryParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Oppsum operations.
pub type Result<T> = std::result::Result<T, OppsumError>;
