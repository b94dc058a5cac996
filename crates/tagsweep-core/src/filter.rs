//! Minimum-length filter for retrieved videos

use crate::types::Video;

/// Videos must be strictly longer than this to be reported
pub const MIN_VIDEO_DURATION_SECS: f64 = 10.0;

/// Keep videos longer than `min_seconds`, preserving order
pub fn filter_by_duration(videos: Vec<Video>, min_seconds: f64) -> Vec<Video> {
    videos
        .into_iter()
        .filter(|video| video.duration_seconds > min_seconds)
        .collect()
}
