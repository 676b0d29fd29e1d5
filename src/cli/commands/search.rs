//! Search YouTube and print the results.

use crate::cli::Output;
use crate::config::{require_env, Settings, YOUTUBE_API_KEY_VAR};
use crate::session::SessionCache;
use crate::youtube::{SearchClient, SearchQuery};

pub async fn run_search(
    query: &str,
    max_results: Option<u32>,
    page_token: Option<String>,
    json: bool,
    settings: Settings,
) -> anyhow::Result<()> {
    let api_key = require_env(YOUTUBE_API_KEY_VAR)?;
    let client = SearchClient::new(&api_key);

    let request = SearchQuery {
        query: query.to_string(),
        max_results: max_results.unwrap_or(settings.search.max_results),
        page_token,
    };

    let spinner = Output::spinner("Searching YouTube...");
    let page = client.search(&request).await?;
    spinner.finish_and_clear();

    SessionCache::new(&settings.data_dir()).save(query, &page)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if page.videos.is_empty() {
        Output::info("No videos found.");
        return Ok(());
    }

    Output::header(&format!("Results for \"{}\"", query));
    for (i, video) in page.videos.iter().enumerate() {
        Output::video_result(i + 1, video);
    }

    if let Some(token) = &page.next_page_token {
        println!();
        Output::kv("Next page token", token);
    }

    Ok(())
}
