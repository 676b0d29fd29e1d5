//! Caption timeline: canonical types, normalization, and lookups.

mod fetch;
mod innertube;
mod normalize;

pub use fetch::{CaptionFetcher, TranscriptProvider};
pub use innertube::InnerTubeProvider;
pub use normalize::{normalize, RawSegment, SegmentTiming};

use serde::{Deserialize, Serialize};

/// A single normalized caption.
///
/// Offsets are seconds from the start of the video. Captions are constructed
/// fresh on every fetch and never mutated; within a fetched sequence they are
/// sorted ascending by `start` but may overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    /// Display length, in seconds.
    pub duration: f64,
}

/// Result of a caption fetch.
///
/// `available: false` is the normal "this video has no transcript" outcome,
/// distinct from a transport fault. It always carries an empty caption list.
/// `language` is the language actually served, which on fallback differs from
/// the one requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionResult {
    pub captions: Vec<Caption>,
    pub language: String,
    pub available: bool,
}

/// Find the caption active at time `t` seconds.
///
/// Captions may overlap; when several intervals contain `t`, the most
/// recently begun caption wins, so the sorted list is scanned from the end.
pub fn caption_at(captions: &[Caption], t: f64) -> Option<&Caption> {
    captions
        .iter()
        .rev()
        .find(|c| t >= c.start && t < c.start + c.duration)
}

/// Join caption texts into a single string for summarization.
pub fn combine_caption_text(captions: &[Caption]) -> String {
    captions
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an offset in seconds as MM:SS, or H:MM:SS past an hour.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caption(text: &str, start: f64, duration: f64) -> Caption {
        Caption {
            text: text.to_string(),
            start,
            duration,
        }
    }

    #[test]
    fn test_caption_at_latest_start_wins() {
        let captions = vec![caption("first", 0.0, 5.0), caption("second", 3.0, 5.0)];
        let active = caption_at(&captions, 4.0).unwrap();
        assert_eq!(active.text, "second");
    }

    #[test]
    fn test_caption_at_single_interval() {
        let captions = vec![caption("first", 0.0, 5.0), caption("second", 3.0, 5.0)];
        assert_eq!(caption_at(&captions, 1.0).unwrap().text, "first");
        assert_eq!(caption_at(&captions, 6.0).unwrap().text, "second");
    }

    #[test]
    fn test_caption_at_none_active() {
        let captions = vec![caption("first", 0.0, 5.0)];
        assert!(caption_at(&captions, 10.0).is_none());
        assert!(caption_at(&[], 0.0).is_none());
    }

    #[test]
    fn test_caption_at_interval_is_half_open() {
        let captions = vec![caption("first", 0.0, 5.0)];
        assert!(caption_at(&captions, 5.0).is_none());
        assert_eq!(caption_at(&captions, 0.0).unwrap().text, "first");
    }

    #[test]
    fn test_combine_caption_text() {
        let captions = vec![caption("hello", 0.0, 1.0), caption("world", 1.0, 1.0)];
        assert_eq!(combine_caption_text(&captions), "hello world");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(61.5), "01:01");
        assert_eq!(format_timestamp(3661.0), "1:01:01");
    }
}
