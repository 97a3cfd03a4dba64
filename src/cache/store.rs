//! Cache Store Module
//!
//! The entry map plus its statistics. `CacheStore` itself is not synchronized;
//! [`Cache`](crate::cache::Cache) wraps it in a mutex shared with the reaper.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key to entry storage with a fixed expiry interval.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lookup and expiry counters
    stats: CacheStats,
    /// Maximum age an entry may reach before a sweep removes it
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose sweeps drop entries older than `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            interval,
        }
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, stamped with the current instant.
    pub fn add(&mut self, key: String, payload: Vec<u8>) {
        self.insert(key, CacheEntry::new(payload));
    }

    /// Inserts a prebuilt entry, replacing any previous one for `key`.
    pub fn insert(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Age is not checked here: an entry past its interval is still returned
    /// until a sweep removes it.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.payload().to_vec())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep ==
    /// Removes every entry whose age at `now` exceeds the interval.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let interval = self.interval;
        self.entries.retain(|_, entry| !entry.is_stale(now, interval));

        let removed = before - self.entries.len();
        self.stats.record_expired(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries, swept or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
