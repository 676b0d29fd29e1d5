//! Doctor command - verify API keys and configuration.

use crate::cli::Output;
use crate::config::{Settings, OPENAI_API_KEY_VAR, YOUTUBE_API_KEY_VAR};

pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Oppsum Doctor");
    println!();

    println!("API keys:");
    for (var, used_by) in [
        (YOUTUBE_API_KEY_VAR, "search"),
        (OPENAI_API_KEY_VAR, "summarize"),
    ] {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => {
                Output::kv(var, &format!("set ({})", used_by));
            }
            _ => {
                Output::warning(&format!("{} is not set; `{}` will fail", var, used_by));
            }
        }
    }
    Output::kv("Caption fetching", "no key required (InnerTube)");

    println!();
    println!("Configuration:");
    let config_path = Settings::default_config_path();
    if config_path.exists() {
        Output::kv("Config file", &config_path.display().to_string());
    } else {
        Output::kv(
            "Config file",
            &format!("{} (not present, using defaults)", config_path.display()),
        );
    }
    Output::kv("Data dir", &settings.data_dir().display().to_string());
    Output::kv(
        "Languages",
        &format!(
            "{} (fallback {})",
            settings.captions.default_language, settings.captions.fallback_language
        ),
    );
    Output::kv("Summary model", &settings.summary.model);

    Ok(())
}
