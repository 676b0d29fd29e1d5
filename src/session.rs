//! Session-scoped cache of the last search.
//!
//! One JSON file under the data directory, overwritten wholesale on every
//! search and read back best-effort. Losing or corrupting it only costs the
//! convenience of title lookup and result recall; it is never authoritative.

use crate::error::Result;
use crate::youtube::{SearchPage, Video};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SESSION_FILE: &str = "last_search.json";

/// The last search this session ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastSearch {
    pub query: String,
    pub page: SearchPage,
    pub fetched_at: DateTime<Utc>,
}

/// File-backed session cache rooted at the data directory.
pub struct SessionCache {
    path: PathBuf,
}

impl SessionCache {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    /// Replace the cached search wholesale.
    pub fn save(&self, query: &str, page: &SearchPage) -> Result<()> {
        let entry = LastSearch {
            query: query.to_string(),
            page: page.clone(),
            fetched_at: Utc::now(),
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&entry)?)?;
        Ok(())
    }

    /// Load the cached search, if a readable one exists.
    pub fn load(&self) -> Option<LastSearch> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Look up a cached video by ID.
    pub fn find_video(&self, video_id: &str) -> Option<Video> {
        self.load()?
            .page
            .videos
            .into_iter()
            .find(|v| v.id == video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::Thumbnail;

    fn sample_page(id: &str, title: &str) -> SearchPage {
        SearchPage {
            videos: vec![Video {
                id: id.to_string(),
                title: title.to_string(),
                description: String::new(),
                thumbnail: Thumbnail {
                    url: "https://img/h.jpg".to_string(),
                    width: 480,
                    height: 360,
                },
                channel_title: "A channel".to_string(),
                published_at: Utc::now(),
            }],
            next_page_token: None,
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SessionCache::new(dir.path());

        cache.save("rust", &sample_page("abc12345678", "Learn Rust")).unwrap();
        let loaded = cache.load().unwrap();

        assert_eq!(loaded.query, "rust");
        assert_eq!(loaded.page.videos[0].title, "Learn Rust");
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SessionCache::new(dir.path()).load().is_none());
    }

    #[test]
    fn test_load_corrupt_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "not json").unwrap();
        assert!(SessionCache::new(dir.path()).load().is_none());
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SessionCache::new(dir.path());

        cache.save("first", &sample_page("aaaaaaaaaaa", "First")).unwrap();
        cache.save("second", &sample_page("bbbbbbbbbbb", "Second")).unwrap();

        let loaded = cache.load().unwrap();
        assert_eq!(loaded.query, "second");
        assert_eq!(loaded.page.videos.len(), 1);
        assert!(cache.find_video("aaaaaaaaaaa").is_none());
    }

    #[test]
    fn test_find_video() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SessionCache::new(dir.path());

        cache.save("rust", &sample_page("abc12345678", "Learn Rust")).unwrap();

        assert_eq!(cache.find_video("abc12345678").unwrap().title, "Learn Rust");
        assert!(cache.find_video("missing").is_none());
    }
}
