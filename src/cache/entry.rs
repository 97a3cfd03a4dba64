//! Cache Entry Module
//!
//! Defines a single stored response body together with its insertion time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached payload and the instant it was inserted.
///
/// Entries are never mutated in place. Overwriting a key replaces the whole
/// entry, which also resets its age.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    payload: Vec<u8>,
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(payload: Vec<u8>) -> Self {
        Self::created_at(payload, Instant::now())
    }

    /// Creates an entry with an explicit creation instant.
    pub fn created_at(payload: Vec<u8>, created_at: Instant) -> Self {
        Self {
            payload,
            created_at,
        }
    }

    /// The stored bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    // == Age ==
    /// Time elapsed between insertion and `now`.
    ///
    /// Saturates to zero for entries stamped after `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Returns `true` once the entry's age is strictly greater than `interval`.
    ///
    /// An entry whose age equals the interval is still fresh; it goes on the
    /// next sweep.
    pub fn is_stale(&self, now: Instant, interval: Duration) -> bool {
        self.age(now) > interval
    }
}
