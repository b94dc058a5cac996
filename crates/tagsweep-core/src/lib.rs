//! Tag Sweep Core Library
//!
//! Finds YouTube videos whose titles follow a numbered-tag convention
//! (`DSC 0001`, `IMG 0002`, …) by sweeping every tag/index phrase through
//! the YouTube Data API.
//!
//! # Overview
//!
//! This crate provides:
//! - Query generation over a tag vocabulary and index range
//! - A seeded shuffle of the traversal order
//! - A strictly sequential scheduler with a fixed inter-request delay,
//!   per-query pagination quotas and cancellation
//! - A minimum-length filter on retrieved videos
//! - A typed client for the `search` and `videos` endpoints
//!
//! # Example
//!
//! ```no_run
//! use tagsweep_core::{ClientConfig, SweepConfig, sweep};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> tagsweep_core::Result<()> {
//!     let config = SweepConfig {
//!         tags: vec!["dsc".to_string(), "img".to_string()],
//!         start_index: 1,
//!         end_index: 20,
//!         max_results_per_query: Some(100),
//!         ..SweepConfig::default()
//!     };
//!
//!     let summary = sweep(&config, ClientConfig::from_env()?, CancellationToken::new(), |vids| {
//!         for vid in vids {
//!             println!("{} {}s {} views", vid.id, vid.duration_seconds, vid.view_count);
//!         }
//!     })
//!     .await?;
//!
//!     println!("{} videos delivered", summary.videos_delivered);
//!     Ok(())
//! }
//! ```
//!
//! # Collaborators
//!
//! The [`Scheduler`] is generic over [`SearchService`] and
//! [`VideoDetailService`]; [`YouTubeApi`] implements both. Any failure
//! from either drops the current work item and the run continues.

mod client;
mod config;
mod error;
mod filter;
pub mod parser;
mod query;
mod quota;
mod scheduler;
mod service;
mod types;
pub mod url;
mod youtube;

// Re-export client types
pub use client::{API_KEY_ENV, ApiClient, ClientConfig};

// Re-export configuration
pub use config::{DEFAULT_REQUEST_DELAY_MS, SweepConfig, max_results_from_sentinel};

// Re-export error types
pub use error::{Result, SweepError};

// Re-export the building blocks of a sweep
pub use filter::{MIN_VIDEO_DURATION_SECS, filter_by_duration};
pub use query::{generate_queries, shuffle_work};
pub use quota::QuotaTracker;

// Re-export parser functions
pub use parser::{parse_iso8601_duration, parse_search_page, parse_video_list};

// Re-export main orchestration API
pub use scheduler::{RunSummary, Scheduler, SchedulerState, sweep};
pub use service::{SearchService, VideoDetailService};
pub use youtube::YouTubeApi;

// Re-export data types
pub use types::{LogicalQuery, SearchPage, Video, WorkItem};
