//! Caption fetch policy.
//!
//! One attempt in the requested language, plus a single fixed-language
//! fallback when the default language has no transcript. Strictly
//! sequential; the fallback only runs after the primary outcome is known.

use super::{normalize, CaptionResult, RawSegment};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Source of raw transcript segments for a video.
///
/// `Ok(None)` means the video has no transcript in the requested language.
/// Errors are reserved for transport and provider faults.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    async fn fetch(&self, video_id: &str, lang: &str) -> Result<Option<Vec<RawSegment>>>;
}

/// Fetches and normalizes captions with the single-fallback policy.
pub struct CaptionFetcher {
    provider: Arc<dyn TranscriptProvider>,
    default_language: String,
    fallback_language: String,
}

impl CaptionFetcher {
    pub fn new(
        provider: Arc<dyn TranscriptProvider>,
        default_language: &str,
        fallback_language: &str,
    ) -> Self {
        Self {
            provider,
            default_language: default_language.to_string(),
            fallback_language: fallback_language.to_string(),
        }
    }

    /// Fetch captions for a video in the requested language.
    ///
    /// The returned `language` is the one actually served. A video without a
    /// transcript in any attempted language yields `available: false`, which
    /// is a success; callers must read `language` rather than assume it
    /// echoes the request.
    pub async fn fetch(&self, video_id: &str, lang: &str) -> Result<CaptionResult> {
        match self.provider.fetch(video_id, lang).await {
            Ok(Some(segments)) if !segments.is_empty() => {
                info!(video_id, lang, count = segments.len(), "fetched captions");
                return Ok(available(segments, lang));
            }
            Ok(_) if lang != self.default_language => {
                info!(video_id, lang, "no transcript in requested language");
                return Ok(unavailable(lang));
            }
            Err(err) if lang != self.default_language => return Err(err),
            Ok(_) => {
                info!(
                    video_id,
                    lang,
                    fallback = %self.fallback_language,
                    "no transcript in default language, trying fallback"
                );
            }
            Err(err) => {
                warn!(
                    video_id,
                    lang,
                    error = %err,
                    fallback = %self.fallback_language,
                    "primary caption fetch failed, trying fallback"
                );
            }
        }

        match self.provider.fetch(video_id, &self.fallback_language).await? {
            Some(segments) if !segments.is_empty() => {
                info!(
                    video_id,
                    lang = %self.fallback_language,
                    count = segments.len(),
                    "fetched fallback captions"
                );
                Ok(available(segments, &self.fallback_language))
            }
            _ => {
                info!(video_id, "no transcript in any attempted language");
                Ok(unavailable(lang))
            }
        }
    }
}

fn available(segments: Vec<RawSegment>, language: &str) -> CaptionResult {
    CaptionResult {
        captions: normalize(segments),
        language: language.to_string(),
        available: true,
    }
}

fn unavailable(language: &str) -> CaptionResult {
    CaptionResult {
        captions: Vec::new(),
        language: language.to_string(),
        available: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::captions::SegmentTiming;
    use crate::error::OppsumError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct FakeProvider {
        tracks: HashMap<String, Vec<RawSegment>>,
        calls: Mutex<Vec<String>>,
        fail_langs: Vec<String>,
    }

    impl FakeProvider {
        fn new(tracks: HashMap<String, Vec<RawSegment>>) -> Self {
            Self {
                tracks,
                calls: Mutex::new(Vec::new()),
                fail_langs: Vec::new(),
            }
        }

        fn failing_on(mut self, lang: &str) -> Self {
            self.fail_langs.push(lang.to_string());
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranscriptProvider for FakeProvider {
        async fn fetch(&self, _video_id: &str, lang: &str) -> Result<Option<Vec<RawSegment>>> {
            self.calls.lock().unwrap().push(lang.to_string());
            if self.fail_langs.iter().any(|l| l == lang) {
                return Err(OppsumError::Captions("connection reset".to_string()));
            }
            Ok(self.tracks.get(lang).cloned())
        }
    }

    fn segments() -> Vec<RawSegment> {
        vec![RawSegment::new(
            "hello",
            SegmentTiming::Milliseconds {
                start_ms: 0.0,
                end_ms: 2000.0,
            },
        )]
    }

    fn fetcher(provider: Arc<FakeProvider>) -> CaptionFetcher {
        CaptionFetcher::new(provider, "ko", "en")
    }

    #[tokio::test]
    async fn test_primary_language_served_directly() {
        let provider = Arc::new(FakeProvider::new(HashMap::from([(
            "ko".to_string(),
            segments(),
        )])));
        let result = fetcher(provider.clone()).fetch("abc", "ko").await.unwrap();

        assert!(result.available);
        assert_eq!(result.language, "ko");
        assert_eq!(result.captions.len(), 1);
        assert_eq!(provider.calls(), vec!["ko"]);
    }

    #[tokio::test]
    async fn test_fallback_when_default_language_missing() {
        let provider = Arc::new(FakeProvider::new(HashMap::from([(
            "en".to_string(),
            segments(),
        )])));
        let result = fetcher(provider.clone()).fetch("abc", "ko").await.unwrap();

        assert!(result.available);
        assert_eq!(result.language, "en");
        assert_eq!(provider.calls(), vec!["ko", "en"]);
    }

    #[tokio::test]
    async fn test_no_transcript_anywhere_is_not_an_error() {
        let provider = Arc::new(FakeProvider::new(HashMap::new()));
        let result = fetcher(provider.clone()).fetch("abc", "ko").await.unwrap();

        assert!(!result.available);
        assert!(result.captions.is_empty());
        assert_eq!(result.language, "ko");
        assert_eq!(provider.calls(), vec!["ko", "en"]);
    }

    #[tokio::test]
    async fn test_non_default_language_gets_no_fallback() {
        let provider = Arc::new(FakeProvider::new(HashMap::from([(
            "en".to_string(),
            segments(),
        )])));
        let result = fetcher(provider.clone()).fetch("abc", "fr").await.unwrap();

        assert!(!result.available);
        assert_eq!(result.language, "fr");
        assert_eq!(provider.calls(), vec!["fr"]);
    }

    #[tokio::test]
    async fn test_primary_fault_recovered_by_fallback() {
        let provider = Arc::new(
            FakeProvider::new(HashMap::from([("en".to_string(), segments())]))
                .failing_on("ko"),
        );
        let result = fetcher(provider).fetch("abc", "ko").await.unwrap();

        assert!(result.available);
        assert_eq!(result.language, "en");
    }

    #[tokio::test]
    async fn test_fallback_fault_propagates() {
        let provider = Arc::new(FakeProvider::new(HashMap::new()).failing_on("en"));
        let err = fetcher(provider).fetch("abc", "ko").await.unwrap_err();

        assert!(matches!(err, OppsumError::Captions(_)));
    }

    #[tokio::test]
    async fn test_non_default_language_fault_propagates() {
        let provider = Arc::new(FakeProvider::new(HashMap::new()).failing_on("fr"));
        let err = fetcher(provider.clone()).fetch("abc", "fr").await.unwrap_err();

        assert!(matches!(err, OppsumError::Captions(_)));
        assert_eq!(provider.calls(), vec!["fr"]);
    }
}
