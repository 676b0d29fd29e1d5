//! Configuration module for Oppsum.
//!
//! Handles loading application settings and environment-provided API keys.

mod keys;
mod settings;

pub use keys::{require_env, ApiKeys, OPENAI_API_KEY_VAR, YOUTUBE_API_KEY_VAR};
pub use settings::{
    CaptionSettings, GeneralSettings, SearchSettings, ServerSettings, Settings, SummarySettings,
};
