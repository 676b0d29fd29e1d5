//! Video search through the YouTube Data API v3.
//!
//! Ranking, relevance, and page-token semantics belong entirely to the
//! provider; this client only translates shapes and surfaces non-success
//! responses as a single typed fault.

use super::{SearchPage, Thumbnail, Video};
use crate::error::{OppsumError, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, instrument};

const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// A validated search request.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,
    pub max_results: u32,
    pub page_token: Option<String>,
}

/// Client for the YouTube Data API search endpoint.
pub struct SearchClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SearchClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run one search call and map the provider shape into ours.
    #[instrument(skip(self, query), fields(q = %query.query))]
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let url = format!("{}/search", self.base_url);
        let max_results = query.max_results.to_string();

        let mut params = vec![
            ("part", "snippet"),
            ("type", "video"),
            ("q", query.query.as_str()),
            ("maxResults", max_results.as_str()),
            ("key", self.api_key.as_str()),
        ];
        if let Some(token) = &query.page_token {
            params.push(("pageToken", token.as_str()));
        }

        // Strip URLs from transport errors; the request URL carries the key.
        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorEnvelope>()
                .await
                .ok()
                .and_then(|e| e.error)
                .map(|d| d.message)
                .unwrap_or_default();
            return Err(OppsumError::Search(format!(
                "YouTube API returned {}: {}",
                status, message
            )));
        }

        let data: ApiSearchResponse = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)?;
        let page = map_response(data);
        debug!(count = page.videos.len(), "search returned results");
        Ok(page)
    }
}

#[derive(Debug, Deserialize)]
struct ApiSearchResponse {
    #[serde(default)]
    items: Vec<ApiSearchItem>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiSearchItem {
    id: ApiVideoId,
    snippet: ApiSnippet,
}

#[derive(Debug, Deserialize)]
struct ApiVideoId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiSnippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    thumbnails: ApiThumbnails,
    #[serde(rename = "channelTitle")]
    channel_title: String,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Default)]
struct ApiThumbnails {
    high: Option<ApiThumbnail>,
    medium: Option<ApiThumbnail>,
    #[serde(rename = "default")]
    fallback: Option<ApiThumbnail>,
}

#[derive(Debug, Deserialize)]
struct ApiThumbnail {
    url: String,
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// Map the provider response into the canonical page, skipping items that
/// lack a video ID or any thumbnail.
fn map_response(data: ApiSearchResponse) -> SearchPage {
    let videos = data
        .items
        .into_iter()
        .filter_map(|item| {
            let id = item.id.video_id?;
            let snippet = item.snippet;
            let thumb = snippet
                .thumbnails
                .high
                .or(snippet.thumbnails.medium)
                .or(snippet.thumbnails.fallback)?;
            Some(Video {
                id,
                title: snippet.title,
                description: snippet.description,
                thumbnail: Thumbnail {
                    url: thumb.url,
                    width: thumb.width,
                    height: thumb.height,
                },
                channel_title: snippet.channel_title,
                published_at: snippet.published_at,
            })
        })
        .collect();

    SearchPage {
        videos,
        next_page_token: data.next_page_token,
    }
}
