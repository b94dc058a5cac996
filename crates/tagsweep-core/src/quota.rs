//! Per-query retrieval accounting

use std::collections::HashMap;

/// Cumulative count of retrieved videos per logical query identity
///
/// Owned by one scheduler run. Totals only ever grow.
#[derive(Debug, Clone, Default)]
pub struct QuotaTracker {
    totals: HashMap<String, u64>,
}

impl QuotaTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to the running total for `identity`
    pub fn record(&mut self, identity: &str, count: u64) {
        *self.totals.entry(identity.to_string()).or_insert(0) += count;
    }

    /// Current total for `identity`, 0 if never recorded
    pub fn total(&self, identity: &str) -> u64 {
        self.totals.get(identity).copied().unwrap_or(0)
    }

    /// Whether another page may be requested for `identity`
    ///
    /// `None` means unbounded.
    pub fn allows_more(&self, identity: &str, max_results: Option<u64>) -> bool {
        match max_results {
            Some(max) => self.total(identity) < max,
            None => true,
        }
    }

    /// Number of identities seen so far
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
