//! Expiring Store Module
//!
//! Identity-keyed URL storage with sliding expiration.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::error::{RelayError, Result};
use crate::store::entry::{current_timestamp_ms, UrlEntry};

// == Url Store ==
/// Maps a derived identity to the URL it last stored.
///
/// Entries expire once they have been idle (neither stored nor fetched) for
/// longer than the configured expiration time. Expiry is enforced both by
/// [`UrlStore::sweep_expired`] and at read time, so a stale entry is never
/// returned even if the evictor has not run yet.
///
/// Every method has an `_at` variant taking the current time in Unix
/// milliseconds; the plain variants read the wall clock.
#[derive(Debug)]
pub struct UrlStore {
    /// Identity -> entry
    entries: HashMap<String, UrlEntry>,
    /// Idle time after which an entry expires, in milliseconds
    ttl_ms: u64,
}

impl UrlStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `expiration_secs`
    /// seconds without a touch.
    pub fn new(expiration_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_ms: expiration_secs.saturating_mul(1000),
        }
    }

    /// Entry time-to-live in milliseconds.
    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    // == Put ==
    /// Stores `value` for `identity`, replacing any previous entry.
    pub fn put(&mut self, identity: String, value: String) {
        self.put_at(identity, value, current_timestamp_ms());
    }

    /// Same as [`UrlStore::put`] with an explicit clock.
    pub fn put_at(&mut self, identity: String, value: String, now: u64) {
        info!("Stored URL for user: {}", identity);
        self.entries.insert(identity, UrlEntry::new(value, now));
    }

    // == Get ==
    /// Returns the URL stored for `identity` and refreshes its timestamp.
    ///
    /// An entry past its expiration is removed and reported as not found.
    pub fn get(&mut self, identity: &str) -> Result<String> {
        self.get_at(identity, current_timestamp_ms())
    }

    /// Same as [`UrlStore::get`] with an explicit clock.
    pub fn get_at(&mut self, identity: &str, now: u64) -> Result<String> {
        let ttl_ms = self.ttl_ms;

        let Some(entry) = self.entries.get_mut(identity) else {
            warn!("No URL found for user: {}", identity);
            return Err(RelayError::NotFound);
        };

        if entry.is_expired(ttl_ms, now) {
            self.entries.remove(identity);
            info!("Deleting expired data for user: {}", identity);
            warn!("No URL found for user: {}", identity);
            return Err(RelayError::NotFound);
        }

        entry.touch(now);
        info!("Retrieved URL for user: {}", identity);
        Ok(entry.value.clone())
    }

    // == Sweep Expired ==
    /// Removes every entry idle for longer than the expiration time.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        self.sweep_expired_at(current_timestamp_ms())
    }

    /// Same as [`UrlStore::sweep_expired`] with an explicit clock.
    pub fn sweep_expired_at(&mut self, now: u64) -> usize {
        let ttl_ms = self.ttl_ms;
        let before = self.entries.len();

        self.entries.retain(|identity, entry| {
            let expired = entry.is_expired(ttl_ms, now);
            if expired {
                info!("Deleting expired data for user: {}", identity);
            }
            !expired
        });

        before - self.entries.len()
    }

    // == Length ==
    /// Returns the number of entries currently held, including any that have
    /// expired but not been swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL_SECS: u64 = 90;
    const TTL_MS: u64 = TTL_SECS * 1000;
    const T0: u64 = 1_700_000_000_000;

    #[test]
    fn test_store_new() {
        let store = UrlStore::new(TTL_SECS);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl_ms(), TTL_MS);
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = UrlStore::new(TTL_SECS);

        store.put("id1".to_string(), "https://example.com".to_string());
        let value = store.get("id1").unwrap();

        assert_eq!(value, "https://example.com");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = UrlStore::new(TTL_SECS);

        let result = store.get("nonexistent");
        assert_eq!(result, Err(RelayError::NotFound));
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = UrlStore::new(TTL_SECS);

        store.put_at("id1".to_string(), "https://a.example".to_string(), T0);
        store.put_at("id1".to_string(), "https://b.example".to_string(), T0 + 10);

        assert_eq!(store.get_at("id1", T0 + 20).unwrap(), "https://b.example");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_overwrite_resets_timestamp() {
        let mut store = UrlStore::new(TTL_SECS);

        store.put_at("id1".to_string(), "https://a.example".to_string(), T0);
        store.put_at("id1".to_string(), "https://b.example".to_string(), T0 + TTL_MS);

        // Past the first write's expiry, within the second's.
        assert_eq!(store.sweep_expired_at(T0 + TTL_MS + 1), 0);
        assert!(store.get_at("id1", T0 + TTL_MS + 1).is_ok());
    }

    #[test]
    fn test_expired_entry_not_returned_before_sweep() {
        let mut store = UrlStore::new(TTL_SECS);

        store.put_at("id1".to_string(), "https://example.com".to_string(), T0);

        let result = store.get_at("id1", T0 + TTL_MS + 1);
        assert_eq!(result, Err(RelayError::NotFound));
        assert!(store.is_empty(), "Read-time expiry removes the entry");
    }

    #[test]
    fn test_expiry_after_sweep() {
        let mut store = UrlStore::new(TTL_SECS);

        store.put_at("id1".to_string(), "https://example.com".to_string(), T0);

        let removed = store.sweep_expired_at(T0 + TTL_MS + 1);
        assert_eq!(removed, 1);
        assert_eq!(store.get_at("id1", T0 + TTL_MS + 1), Err(RelayError::NotFound));
    }

    #[test]
    fn test_sliding_expiration() {
        let mut store = UrlStore::new(TTL_SECS);
        let eps = 1_000;

        store.put_at("id1".to_string(), "https://example.com".to_string(), T0);

        let t1 = T0 + TTL_MS - eps;
        assert!(store.get_at("id1", t1).is_ok());
        assert_eq!(store.sweep_expired_at(t1), 0);

        let t2 = T0 + 2 * (TTL_MS - eps);
        assert_eq!(store.sweep_expired_at(t2), 0);
        assert_eq!(store.get_at("id1", t2).unwrap(), "https://example.com");
    }

    #[test]
    fn test_miss_has_no_side_effect() {
        let mut store = UrlStore::new(TTL_SECS);

        store.put_at("id1".to_string(), "https://example.com".to_string(), T0);
        let _ = store.get_at("other", T0 + TTL_MS);

        // id1 was not touched by the miss, so it still expires on schedule.
        assert_eq!(store.sweep_expired_at(T0 + TTL_MS + 1), 1);
    }

    #[test]
    fn test_sweep_keeps_fresh_entries() {
        let mut store = UrlStore::new(TTL_SECS);

        store.put_at("old".to_string(), "https://old.example".to_string(), T0);
        store.put_at("new".to_string(), "https://new.example".to_string(), T0 + 60_000);

        let removed = store.sweep_expired_at(T0 + TTL_MS + 1);
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get_at("new", T0 + TTL_MS + 1).is_ok());
    }

    #[test]
    fn test_sweep_boundary_is_strict() {
        let mut store = UrlStore::new(TTL_SECS);

        store.put_at("id1".to_string(), "https://example.com".to_string(), T0);

        assert_eq!(store.sweep_expired_at(T0 + TTL_MS), 0);
        assert_eq!(store.sweep_expired_at(T0 + TTL_MS + 1), 1);
    }

    #[test]
    fn test_sweep_on_empty_store() {
        let mut store = UrlStore::new(TTL_SECS);
        assert_eq!(store.sweep_expired(), 0);
    }
}
