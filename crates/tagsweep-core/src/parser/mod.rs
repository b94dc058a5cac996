//! JSON response parsers for the YouTube Data API
//!
//! Contains modules for parsing the two endpoint payloads and the
//! duration format they embed.

pub mod duration;
pub mod search;
pub mod videos;

pub use duration::parse_iso8601_duration;
pub use search::parse_search_page;
pub use videos::parse_video_list;
