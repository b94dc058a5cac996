//! Sweep configuration
//!
//! Plain settings record with defaults and an environment loader.
//! Unparsable environment values fall back to the defaults.

use std::time::Duration;

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, SweepError};
use crate::types::{DEFAULT_EMBED, DEFAULT_TIME_WINDOW};

/// Default pause between two work items
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 2000;

/// Settings for one sweep run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Title prefixes, e.g. `dsc`, `img`
    pub tags: Vec<String>,
    /// First numeric suffix, inclusive (default: 1)
    pub start_index: u32,
    /// Last numeric suffix, inclusive (default: 10)
    pub end_index: u32,
    /// Stop paging a query once this many videos were retrieved for it.
    /// `None` pages until the API runs out. Deserializes from an integer
    /// where any negative value (e.g. `-1`) means unbounded.
    #[serde(deserialize_with = "deserialize_max_results")]
    pub max_results_per_query: Option<u64>,
    /// Pause between work items in milliseconds (default: 2000)
    pub request_delay_ms: u64,
    /// Seed for the traversal shuffle, OS entropy when unset
    pub seed: Option<u64>,
    /// `embed` search filter (default: "allowed")
    pub embed: String,
    /// `time` search filter (default: "this_week")
    pub time_window: String,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            start_index: 1,
            end_index: 10,
            max_results_per_query: None,
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            seed: None,
            embed: DEFAULT_EMBED.to_string(),
            time_window: DEFAULT_TIME_WINDOW.to_string(),
        }
    }
}

impl SweepConfig {
    /// Load from `TAGSWEEP_*` environment variables
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            tags: std::env::var("TAGSWEEP_TAGS")
                .map(|v| parse_tags(&v))
                .unwrap_or(default.tags),
            start_index: env_parse("TAGSWEEP_START_INDEX").unwrap_or(default.start_index),
            end_index: env_parse("TAGSWEEP_END_INDEX").unwrap_or(default.end_index),
            max_results_per_query: env_parse::<i64>("TAGSWEEP_MAX_RESULTS_PER_QUERY")
                .map(max_results_from_sentinel)
                .unwrap_or(default.max_results_per_query),
            request_delay_ms: env_parse("TAGSWEEP_REQUEST_DELAY_MS")
                .unwrap_or(default.request_delay_ms),
            seed: env_parse("TAGSWEEP_SEED").or(default.seed),
            embed: std::env::var("TAGSWEEP_EMBED").unwrap_or(default.embed),
            time_window: std::env::var("TAGSWEEP_TIME_WINDOW").unwrap_or(default.time_window),
        }
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Reject settings that would make a run pointless
    ///
    /// # Errors
    /// Returns `InvalidConfig` for an empty, blank or repeated tag, or an
    /// inverted range
    pub fn validate(&self) -> Result<()> {
        if self.tags.is_empty() {
            return Err(SweepError::InvalidConfig("no tags given".to_string()));
        }
        if self.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(SweepError::InvalidConfig("blank tag".to_string()));
        }
        let mut seen = HashSet::new();
        for tag in &self.tags {
            if !seen.insert(tag.as_str()) {
                return Err(SweepError::InvalidConfig(format!("duplicate tag {:?}", tag)));
            }
        }
        if self.start_index > self.end_index {
            return Err(SweepError::InvalidConfig(format!(
                "start index {} is after end index {}",
                self.start_index, self.end_index
            )));
        }
        Ok(())
    }
}

/// Map the legacy `-1` style limit to an optional cap
///
/// Any negative value means unbounded.
pub fn max_results_from_sentinel(value: i64) -> Option<u64> {
    u64::try_from(value).ok()
}

fn deserialize_max_results<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<i64> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(max_results_from_sentinel))
}

// Keeps the first occurrence of each tag
fn parse_tags(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty() && seen.insert(*t))
        .map(String::from)
        .collect()
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
