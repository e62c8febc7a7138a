//! Store Entry Module
//!
//! Defines a stored URL together with its freshness timestamp.

use std::time::{SystemTime, UNIX_EPOCH};

// == Url Entry ==
/// A stored URL and the last time it was written or read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    /// The stored URL
    pub value: String,
    /// Last store or successful fetch (Unix milliseconds)
    pub last_touched: u64,
}

impl UrlEntry {
    // == Constructor ==
    /// Creates a new entry touched at `now`.
    pub fn new(value: String, now: u64) -> Self {
        Self {
            value,
            last_touched: now,
        }
    }

    // == Touch ==
    /// Refreshes the timestamp, leaving the value untouched.
    pub fn touch(&mut self, now: u64) {
        self.last_touched = now;
    }

    // == Is Expired ==
    /// Checks whether the entry has been idle for longer than `ttl_ms`.
    ///
    /// An entry idle for exactly `ttl_ms` is still live; it expires once the
    /// idle time strictly exceeds the TTL. A clock that moved backwards yields
    /// an idle time of zero.
    pub fn is_expired(&self, ttl_ms: u64, now: u64) -> bool {
        now.saturating_sub(self.last_touched) > ttl_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A system clock set before the epoch reads as zero.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
