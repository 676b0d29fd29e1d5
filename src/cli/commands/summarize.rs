//! Summarize a video's captions with the AI model.

use crate::captions::{combine_caption_text, CaptionFetcher, InnerTubeProvider};
use crate::cli::Output;
use crate::config::{require_env, Settings, OPENAI_API_KEY_VAR};
use crate::session::SessionCache;
use crate::summary::Summarizer;
use crate::youtube::extract_video_id;
use anyhow::bail;
use std::sync::Arc;

pub async fn run_summarize(
    video: &str,
    lang: Option<String>,
    title: Option<String>,
    settings: Settings,
) -> anyhow::Result<()> {
    let api_key = require_env(OPENAI_API_KEY_VAR)?;

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

    if !result.available {
        bail!("no captions available for {}, nothing to summarize", video_id);
    }

    // Prefer an explicit title, then the last search's cached one.
    let title = title
        .or_else(|| {
            SessionCache::new(&settings.data_dir())
                .find_video(&video_id)
                .map(|v| v.title)
        })
        .unwrap_or_else(|| video_id.clone());

    let captions_text = combine_caption_text(&result.captions);
    let summarizer = Summarizer::new(&api_key, &settings.summary);

    let spinner = Output::spinner("Generating summary...");
    let summary = summarizer.summarize(&captions_text, &title).await?;
    spinner.finish_and_clear();

    Output::header(&title);
    println!();
    println!("{}", summary.overview);

    if !summary.key_points.is_empty() {
        Output::header("Key points");
        for point in &summary.key_points {
            Output::list_item(point);
        }
    }

    if !summary.timestamps.is_empty() {
        Output::header("Timestamps");
        for entry in &summary.timestamps {
            Output::caption_line(&entry.time, &entry.description);
        }
    }

    Ok(())
}
