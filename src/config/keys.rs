//! Environment-provided API credentials.
//!
//! Keys are read once when an integration starts up. A missing key is a
//! startup error for that integration, never a per-request one.

use crate::error::{OppsumError, Result};

/// Environment variable holding the YouTube Data API key.
pub const YOUTUBE_API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// API keys for the external collaborators.
#[derive(Debug, Clone)]
pub struct ApiKeys {
    pub youtube: String,
    pub openai: String,
}

impl ApiKeys {
    /// Read both keys from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            youtube: require_env(YOUTUBE_API_KEY_VAR)?,
            openai: require_env(OPENAI_API_KEY_VAR)?,
        })
    }
}

/// Read a required environment variable, rejecting empty values.
pub fn require_env(var: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(OppsumError::Config(format!(
            "{} is not set in the environment",
            var
        ))),
    }
}
