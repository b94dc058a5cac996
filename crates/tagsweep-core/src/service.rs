//! Collaborator traits driven by the scheduler

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{SearchPage, Video, WorkItem};

/// Executes one search request
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Fetch the page of results described by `item`
    async fn search(&self, item: &WorkItem) -> Result<SearchPage>;
}

/// Resolves video IDs into metadata records
#[async_trait]
pub trait VideoDetailService: Send + Sync {
    /// Look up at most 50 IDs in one call
    async fn list_details(&self, ids: &[String]) -> Result<Vec<Video>>;
}

#[async_trait]
impl<T: SearchService + ?Sized> SearchService for Arc<T> {
    async fn search(&self, item: &WorkItem) -> Result<SearchPage> {
        (**self).search(item).await
    }
}

#[async_trait]
impl<T: VideoDetailService + ?Sized> VideoDetailService for Arc<T> {
    async fn list_details(&self, ids: &[String]) -> Result<Vec<Video>> {
        (**self).list_details(ids).await
    }
}
