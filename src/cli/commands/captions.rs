//! Fetch and print a video's captions.

use crate::captions::{format_timestamp, CaptionFetcher, InnerTubeProvider};
use crate::cli::Output;
use crate::config::Settings;
use crate::youtube::extract_video_id;
use anyhow::bail;
use std::sync::Arc;

pub async fn run_captions(
    video: &str,
    lang: Option<String>,
    json: bool,
    settings: Settings,
) -> anyhow::Result<()> {
    let Some(video_id) = extract_video_id(video) else {
        bail!("not a YouTube URL or video ID: {}", video);
    };
    let lang = lang.unwrap_or_else(|| settings.captions.default_language.clone());

    let fetcher = CaptionFetcher::new(
        Arc::new(InnerTubeProvider::new()),
        &settings.captions.default_language,
        &settings.captions.fallback_language,
    );

    let spinner = Output::spinner("Fetching captions...");
    let result = fetcher.fetch(&video_id, &lang).await?;
    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if !result.available {
        Output::warning(&format!("No captions available for {}", video_id));
        return Ok(());
    }

    if result.language != lang {
        Output::info(&format!(
            "No '{}' captions; showing '{}' instead",
            lang, result.language
        ));
    }

    for caption in &result.captions {
        Output::caption_line(&format_timestamp(caption.start), &caption.text);
    }

    Ok(())
}
