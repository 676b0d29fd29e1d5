//! Replay captions against a real-time sampling loop.

use crate::captions::{format_timestamp, CaptionFetcher, InnerTubeProvider};
use crate::cli::Output;
use crate::config::Settings;
use crate::player::CaptionTicker;
use crate::youtube::extract_video_id;
use anyhow::bail;
use std::sync::Arc;
use std::time::Duration;

pub async fn run_watch(
    video: &str,
    lang: Option<String>,
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

    if !result.available {
        bail!("no captions available for {}", video_id);
    }

    let end = result
        .captions
        .iter()
        .fold(0.0f64, |acc, c| acc.max(c.start + c.duration));

    Output::info("Replaying captions in real time. Press Ctrl+C to stop.");
    println!();

    let (ticker, mut ticks) = CaptionTicker::spawn(result.captions, Duration::from_secs(1));
    let mut last_shown: Option<String> = None;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            tick = ticks.recv() => {
                let Some(tick) = tick else { break };

                if let Some(caption) = tick.caption {
                    if last_shown.as_deref() != Some(caption.text.as_str()) {
                        Output::caption_line(&format_timestamp(tick.position), &caption.text);
                        last_shown = Some(caption.text);
                    }
                }

                if tick.position > end {
                    break;
                }
            }
        }
    }

    ticker.stop();
    Ok(())
}
