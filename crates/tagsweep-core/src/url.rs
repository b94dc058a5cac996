//! URL helper functions for the YouTube Data API
//!
//! Provides functions for building search and video list URLs.

use crate::types::WorkItem;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Page size for both endpoints
pub const MAX_RESULTS: u32 = 50;

const DEFAULT_PART: &str = "snippet";
const DEFAULT_KIND: &str = "video";
const DEFAULT_ORDER: &str = "date";
const VIDEO_PARTS: &str = "id,statistics,contentDetails,snippet";

/// Builds the search URL for one work item
///
/// `part`, `type` and `order` fall back to `snippet`, `video` and `date`
/// unless the work item overrides them. `embed` and `time` are passed
/// through unchanged.
///
/// # Example
/// ```
/// use tagsweep_core::url::build_search_url;
/// use tagsweep_core::{LogicalQuery, WorkItem};
/// let item = WorkItem::from(LogicalQuery::new("dsc", 1));
/// let url = build_search_url("https://api.test/v3", "KEY", &item);
/// assert_eq!(
///     url,
///     "https://api.test/v3/search?key=KEY&part=snippet&type=video&order=date&maxResults=50\
///      &q=%22dsc%200001%22&embed=allowed&time=this_week"
/// );
/// ```
pub fn build_search_url(base_url: &str, api_key: &str, item: &WorkItem) -> String {
    let max_results = MAX_RESULTS.to_string();
    let mut params: Vec<(&str, &str)> = vec![
        ("key", api_key),
        ("part", item.part.as_deref().unwrap_or(DEFAULT_PART)),
        ("type", item.kind.as_deref().unwrap_or(DEFAULT_KIND)),
        ("order", item.order.as_deref().unwrap_or(DEFAULT_ORDER)),
        ("maxResults", max_results.as_str()),
        ("q", item.query.rendered_text.as_str()),
        ("embed", item.embed.as_str()),
        ("time", item.time_window.as_str()),
    ];
    if let Some(token) = item.page_token.as_deref() {
        params.push(("pageToken", token));
    }

    format!("{}/search?{}", trim_base(base_url), encode_query(&params))
}

/// Builds the video list URL for a batch of IDs
///
/// # Example
/// ```
/// use tagsweep_core::url::build_videos_url;
/// let ids = vec!["abc".to_string(), "def".to_string()];
/// let url = build_videos_url("https://api.test/v3", "KEY", &ids);
/// assert_eq!(
///     url,
///     "https://api.test/v3/videos?key=KEY&part=id%2Cstatistics%2CcontentDetails%2Csnippet\
///      &id=abc%2Cdef&maxResults=50"
/// );
/// ```
pub fn build_videos_url(base_url: &str, api_key: &str, ids: &[String]) -> String {
    let joined = ids.join(",");
    let max_results = MAX_RESULTS.to_string();
    let params = [
        ("key", api_key),
        ("part", VIDEO_PARTS),
        ("id", joined.as_str()),
        ("maxResults", max_results.as_str()),
    ];

    format!("{}/videos?{}", trim_base(base_url), encode_query(&params))
}

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LogicalQuery;

    fn item() -> WorkItem {
        WorkItem::from(LogicalQuery::new("dsc", 42))
    }

    #[test]
    fn test_build_search_url_defaults() {
        let url = build_search_url(DEFAULT_BASE_URL, "k", &item());
        assert!(url.starts_with("https://www.googleapis.com/youtube/v3/search?key=k&"));
        assert!(url.contains("&part=snippet&"));
        assert!(url.contains("&type=video&"));
        assert!(url.contains("&order=date&"));
        assert!(url.contains("&maxResults=50&"));
        assert!(url.contains("&q=%22dsc%200042%22&"));
        assert!(!url.contains("pageToken"));
    }

    #[test]
    fn test_build_search_url_overrides() {
        let mut item = item();
        item.order = Some("viewCount".to_string());
        item.part = Some("id".to_string());
        let url = build_search_url(DEFAULT_BASE_URL, "k", &item);
        assert!(url.contains("&order=viewCount&"));
        assert!(url.contains("&part=id&"));
    }

    #[test]
    fn test_build_search_url_with_page_token() {
        let item = item().continuation("CDIQAA".to_string());
        let url = build_search_url(DEFAULT_BASE_URL, "k", &item);
        assert!(url.ends_with("&pageToken=CDIQAA"));
    }

    #[test]
    fn test_build_search_url_trailing_slash() {
        let url = build_search_url("http://localhost:8080/", "k", &item());
        assert!(url.starts_with("http://localhost:8080/search?"));
    }

    #[test]
    fn test_build_videos_url_single_id() {
        let url = build_videos_url(DEFAULT_BASE_URL, "k", &["abc".to_string()]);
        assert!(url.contains("&id=abc&"));
    }

    #[test]
    fn test_encode_query_escapes_values() {
        let encoded = encode_query(&[("q", "a&b=c")]);
        assert_eq!(encoded, "q=a%26b%3Dc");
    }
}
