//! Configuration settings for Oppsum.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub search: SearchSettings,
    pub captions: CaptionSettings,
    pub summary: SummarySettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory for session data.
    pub data_dir: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: "~/.oppsum".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// HTTP API server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Video search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Result count used when a request does not specify one (1-50).
    pub max_results: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { max_results: 10 }
    }
}

/// Caption fetching settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionSettings {
    /// Language requested when none is given.
    pub default_language: String,
    /// Language tried once when the default language has no transcript.
    pub fallback_language: String,
}

impl Default for CaptionSettings {
    fn default() -> Self {
        Self {
            default_language: "ko".to_string(),
            fallback_language: "en".to_string(),
        }
    }
}

/// AI summarization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarySettings {
    /// Chat model used for summary generation.
    pub model: String,
    /// Caption text is cut to this many characters before prompting.
    pub max_caption_chars: usize,
    /// Sampling temperature for the summary call.
    pub temperature: f32,
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_caption_chars: 15000,
            temperature: 0.3,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("oppsum")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded data directory path.
    pub fn data_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.captions.default_language, "ko");
        assert_eq!(settings.captions.fallback_language, "en");
        assert_eq!(settings.search.max_results, 10);
        assert_eq!(settings.summary.max_caption_chars, 15000);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let toml = r#"
            [captions]
            default_language = "en"
        "#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.captions.default_language, "en");
        assert_eq!(settings.captions.fallback_language, "en");
        assert_eq!(settings.server.port, 3000);
    }
}
