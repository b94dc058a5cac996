//! Core data types for the tag sweeper
//!
//! Contains the main data structures used throughout the library.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default value of the `embed` search filter
pub const DEFAULT_EMBED: &str = "allowed";

/// Default value of the `time` search filter
pub const DEFAULT_TIME_WINDOW: &str = "this_week";

/// One (tag, index) search phrase, the unit of quota tracking
///
/// The rendered text is the exact-phrase form sent as `q`, e.g. `"dsc 0001"`
/// including the double quotes. It doubles as the quota identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogicalQuery {
    pub tag: String,
    pub index: u32,
    pub rendered_text: String,
}

impl LogicalQuery {
    /// Build the query for `tag` and `index`
    ///
    /// Indices are zero-padded to four digits. Values of 10000 and above
    /// render at their natural width.
    pub fn new(tag: &str, index: u32) -> Self {
        Self {
            tag: tag.to_string(),
            index,
            rendered_text: format!("\"{}\"", phrase(tag, index)),
        }
    }

    /// The unquoted phrase, e.g. `dsc 0001`
    pub fn phrase(&self) -> String {
        phrase(&self.tag, self.index)
    }

    /// Identity used as the quota key
    pub fn identity(&self) -> &str {
        &self.rendered_text
    }
}

fn phrase(tag: &str, index: u32) -> String {
    format!("{} {:04}", tag, index)
}

/// Live search-request parameters for one logical query
///
/// `part`, `kind` and `order` override the search defaults
/// (`snippet`, `video`, `date`) when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub query: LogicalQuery,
    pub embed: String,
    pub time_window: String,
    pub part: Option<String>,
    pub kind: Option<String>,
    pub order: Option<String>,
    /// Continuation token from a previous page of the same query
    pub page_token: Option<String>,
}

impl WorkItem {
    /// First-page work item for a logical query
    pub fn new(query: LogicalQuery, embed: &str, time_window: &str) -> Self {
        Self {
            query,
            embed: embed.to_string(),
            time_window: time_window.to_string(),
            part: None,
            kind: None,
            order: None,
            page_token: None,
        }
    }

    /// The same request, continued at `token`
    pub fn continuation(&self, token: String) -> Self {
        Self {
            page_token: Some(token),
            ..self.clone()
        }
    }

    pub fn identity(&self) -> &str {
        self.query.identity()
    }
}

impl From<LogicalQuery> for WorkItem {
    fn from(query: LogicalQuery) -> Self {
        WorkItem::new(query, DEFAULT_EMBED, DEFAULT_TIME_WINDOW)
    }
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Candidate video IDs in result order
    pub video_ids: Vec<String>,

    /// Present only when more pages exist
    pub next_page_token: Option<String>,
}

/// A video with the metadata the sweep reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// YouTube video ID (e.g., "dQw4w9WgXcQ")
    pub id: String,

    /// Publication time from `snippet.publishedAt`
    pub uploaded_at: DateTime<Utc>,

    /// View count, 0 when statistics are hidden
    pub view_count: u64,

    /// Length in seconds
    pub duration_seconds: f64,
}
