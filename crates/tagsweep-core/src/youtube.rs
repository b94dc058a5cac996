//! YouTube Data API collaborators
//!
//! Combines the HTTP client with the response parsers and implements
//! both scheduler collaborator traits.

use async_trait::async_trait;
use tracing::debug;

use crate::client::{ApiClient, ClientConfig};
use crate::error::{Result, SweepError};
use crate::parser::{parse_search_page, parse_video_list};
use crate::service::{SearchService, VideoDetailService};
use crate::types::{SearchPage, Video, WorkItem};
use crate::url::{MAX_RESULTS, build_search_url, build_videos_url};

/// YouTube Data API v3 backed search and detail lookups
pub struct YouTubeApi {
    client: ApiClient,
}

impl YouTubeApi {
    /// Create a new API wrapper
    ///
    /// # Errors
    /// Returns error if the key is blank or HTTP client initialization fails
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = ApiClient::new(config)?;
        Ok(Self { client })
    }

    /// Create from `YT_API_KEY` with default endpoint
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

#[async_trait]
impl SearchService for YouTubeApi {
    /// Search for one page of a logical query
    ///
    /// # Errors
    /// - `HttpError` if the network request fails
    /// - `ServiceError` on a non-2xx status
    /// - `ParseError` if the body is not a search response
    async fn search(&self, item: &WorkItem) -> Result<SearchPage> {
        debug!(
            q = %item.query.rendered_text,
            page_token = item.page_token.as_deref().unwrap_or(""),
            "search request"
        );

        let url = build_search_url(self.client.base_url(), self.client.api_key(), item);
        let body = self.client.fetch(&url).await?;
        parse_search_page(&body)
    }
}

#[async_trait]
impl VideoDetailService for YouTubeApi {
    /// Fetch metadata for up to 50 videos
    ///
    /// An empty slice returns immediately without a request.
    ///
    /// # Errors
    /// - `BatchTooLarge` if more than 50 IDs are passed
    /// - `HttpError`, `ServiceError`, `ParseError`, `InvalidDuration` from the request
    async fn list_details(&self, ids: &[String]) -> Result<Vec<Video>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        if ids.len() > MAX_RESULTS as usize {
            return Err(SweepError::BatchTooLarge {
                max: MAX_RESULTS as usize,
                got: ids.len(),
            });
        }

        debug!(count = ids.len(), "videos request");

        let url = build_videos_url(self.client.base_url(), self.client.api_key(), ids);
        let body = self.client.fetch(&url).await?;
        parse_video_list(&body)
    }
}
