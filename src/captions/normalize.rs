//! Conversion of provider transcript segments into the canonical timeline.
//!
//! Track formats do not tag their units on the wire: InnerTube JSON tracks
//! count in milliseconds and mark segment ends, legacy timedtext XML counts
//! in seconds and carries durations. Each parser hard-codes its convention
//! when it builds a `RawSegment`.

use super::Caption;

/// Timing of a raw segment, in the convention of the track format it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentTiming {
    /// Millisecond offsets with an explicit end marker (InnerTube JSON tracks).
    Milliseconds { start_ms: f64, end_ms: f64 },
    /// Second offsets with an explicit duration (legacy timedtext XML).
    Seconds { start: f64, duration: f64 },
}

/// A provider transcript segment before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSegment {
    pub text: String,
    pub timing: SegmentTiming,
}

impl RawSegment {
    pub fn new(text: impl Into<String>, timing: SegmentTiming) -> Self {
        Self {
            text: text.into(),
            timing,
        }
    }
}

/// Normalize raw segments into seconds-based captions sorted ascending by
/// start time.
///
/// Segments with non-positive durations are kept as-is; the provider emits
/// them occasionally and lookups simply never select them.
pub fn normalize(segments: Vec<RawSegment>) -> Vec<Caption> {
    let mut captions: Vec<Caption> = segments
        .into_iter()
        .map(|segment| {
            let (start, duration) = match segment.timing {
                SegmentTiming::Milliseconds { start_ms, end_ms } => {
                    (start_ms / 1000.0, (end_ms - start_ms) / 1000.0)
                }
                SegmentTiming::Seconds { start, duration } => (start, duration),
            };
            Caption {
                text: segment.text,
                start,
                duration,
            }
        })
        .collect();

    captions.sort_by(|a, b| a.start.total_cmp(&b.start));
    captions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millisecond_range_converts_to_seconds() {
        let captions = normalize(vec![RawSegment::new(
            "hello",
            SegmentTiming::Milliseconds {
                start_ms: 1500.0,
                end_ms: 4000.0,
            },
        )]);

        assert_eq!(captions.len(), 1);
        assert!((captions[0].start - 1.5).abs() < f64::EPSILON);
        assert!((captions[0].duration - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_seconds_pass_through() {
        let captions = normalize(vec![RawSegment::new(
            "hello",
            SegmentTiming::Seconds {
                start: 0.21,
                duration: 2.34,
            },
        )]);

        assert!((captions[0].start - 0.21).abs() < f64::EPSILON);
        assert!((captions[0].duration - 2.34).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mixed_conventions_sorted_ascending() {
        let captions = normalize(vec![
            RawSegment::new(
                "third",
                SegmentTiming::Milliseconds {
                    start_ms: 9000.0,
                    end_ms: 11000.0,
                },
            ),
            RawSegment::new(
                "first",
                SegmentTiming::Seconds {
                    start: 1.0,
                    duration: 2.0,
                },
            ),
            RawSegment::new(
                "second",
                SegmentTiming::Milliseconds {
                    start_ms: 5000.0,
                    end_ms: 7000.0,
                },
            ),
        ]);

        let order: Vec<&str> = captions.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
        assert!(captions.windows(2).all(|w| w[0].start <= w[1].start));
        assert!(captions.iter().all(|c| c.duration >= 0.0));
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        assert!(normalize(Vec::new()).is_empty());
    }

    #[test]
    fn test_non_positive_durations_pass_through() {
        let captions = normalize(vec![RawSegment::new(
            "zero",
            SegmentTiming::Milliseconds {
                start_ms: 2000.0,
                end_ms: 2000.0,
            },
        )]);

        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].duration, 0.0);
    }
}
