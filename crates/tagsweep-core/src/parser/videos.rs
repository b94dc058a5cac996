//! Video details response parser
//!
//! Decodes the JSON body of `GET /videos` into [`Video`] records.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Result, SweepError};
use crate::parser::duration::parse_iso8601_duration;
use crate::types::Video;

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    snippet: Snippet,
    #[serde(default)]
    statistics: Option<Statistics>,
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    published_at: DateTime<Utc>,
}

// The API encodes counters as strings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: String,
}

/// Parses a video list response body
///
/// # Errors
/// - `ParseError` if the body or an item is malformed
/// - `InvalidDuration` if an item's duration cannot be converted
pub fn parse_video_list(body: &str) -> Result<Vec<Video>> {
    let response: VideoListResponse = serde_json::from_str(body)?;

    response.items.into_iter().map(parse_video).collect()
}

fn parse_video(item: VideoItem) -> Result<Video> {
    let view_count = match item.statistics.and_then(|s| s.view_count) {
        Some(raw) => raw.parse::<u64>().map_err(|_| {
            SweepError::ParseError(format!("viewCount {:?} for video {}", raw, item.id))
        })?,
        None => 0,
    };

    Ok(Video {
        duration_seconds: parse_iso8601_duration(&item.content_details.duration)?,
        uploaded_at: item.snippet.published_at,
        view_count,
        id: item.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_video_list() {
        let body = r#"{
            "kind": "youtube#videoListResponse",
            "items": [
                {
                    "id": "aaa",
                    "snippet": {"publishedAt": "2024-03-01T12:00:00Z", "title": "DSC 0001"},
                    "statistics": {"viewCount": "1234", "likeCount": "5"},
                    "contentDetails": {"duration": "PT1M5S"}
                },
                {
                    "id": "bbb",
                    "snippet": {"publishedAt": "2024-03-02T08:30:00Z"},
                    "statistics": {},
                    "contentDetails": {"duration": "PT8S"}
                }
            ]
        }"#;

        let videos = parse_video_list(body).unwrap();
        assert_eq!(videos.len(), 2);

        assert_eq!(videos[0].id, "aaa");
        assert_eq!(videos[0].view_count, 1234);
        assert_eq!(videos[0].duration_seconds, 65.0);
        assert_eq!(videos[0].uploaded_at.to_rfc3339(), "2024-03-01T12:00:00+00:00");

        assert_eq!(videos[1].id, "bbb");
        assert_eq!(videos[1].view_count, 0);
        assert_eq!(videos[1].duration_seconds, 8.0);
    }

    #[test]
    fn test_parse_missing_statistics() {
        let body = r#"{"items": [{
            "id": "ccc",
            "snippet": {"publishedAt": "2024-03-01T12:00:00Z"},
            "contentDetails": {"duration": "PT30S"}
        }]}"#;
        let videos = parse_video_list(body).unwrap();
        assert_eq!(videos[0].view_count, 0);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_video_list(r#"{"items": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_bad_duration() {
        let body = r#"{"items": [{
            "id": "ddd",
            "snippet": {"publishedAt": "2024-03-01T12:00:00Z"},
            "contentDetails": {"duration": "1:30"}
        }]}"#;
        assert!(matches!(
            parse_video_list(body),
            Err(SweepError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_parse_bad_view_count() {
        let body = r#"{"items": [{
            "id": "eee",
            "snippet": {"publishedAt": "2024-03-01T12:00:00Z"},
            "statistics": {"viewCount": "lots"},
            "contentDetails": {"duration": "PT30S"}
        }]}"#;
        assert!(matches!(parse_video_list(body), Err(SweepError::ParseError(_))));
    }

    #[test]
    fn test_parse_missing_snippet() {
        let body = r#"{"items": [{"id": "fff", "contentDetails": {"duration": "PT30S"}}]}"#;
        assert!(matches!(parse_video_list(body), Err(SweepError::ParseError(_))));
    }
}
