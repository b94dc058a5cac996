//! Search response parser
//!
//! Decodes the JSON body of `GET /search` into a [`SearchPage`].

use serde::Deserialize;

use crate::error::Result;
use crate::types::SearchPage;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

/// Parses a search response body into a page of video IDs
///
/// Items without a `videoId` (channels, playlists) are skipped. An empty
/// `nextPageToken` is treated as absent.
///
/// # Errors
/// Returns `ParseError` if the body is not a search response
pub fn parse_search_page(body: &str) -> Result<SearchPage> {
    let response: SearchResponse = serde_json::from_str(body)?;

    let video_ids = response
        .items
        .into_iter()
        .filter_map(|item| item.id.video_id)
        .collect();

    Ok(SearchPage {
        video_ids,
        next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
    })
}
