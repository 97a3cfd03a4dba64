//! Shared cache handle
//!
//! Couples the mutex-guarded [`CacheStore`] with its background reaper.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::{spawn_reaper_task, spawn_reaper_thread};

/// Locks the store, recovering the guard if a previous holder panicked.
///
/// Every store operation leaves the map consistent, so a poisoned lock still
/// guards valid data.
pub(crate) fn lock_store(store: &Mutex<CacheStore>) -> MutexGuard<'_, CacheStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

// == Cache ==
/// In-memory TTL cache for response bodies.
///
/// Cloning is cheap and every clone shares the same entries. A reaper task
/// sweeps the entries once per interval and removes those older than the
/// interval. Reads never check age themselves, so an entry can be returned
/// after it has gone stale until the next sweep gets to it.
///
/// The reaper stops when the cancellation token fires or once every handle
/// has been dropped.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    cancel: CancellationToken,
}

impl Cache {
    /// Creates an empty cache and starts its reaper.
    pub fn new(interval: Duration) -> Self {
        Self::with_cancellation(interval, CancellationToken::new())
    }

    /// Creates an empty cache whose reaper exits when `cancel` is cancelled.
    ///
    /// Inside a Tokio runtime the reaper is a task on that runtime. Outside of
    /// one it gets a dedicated thread.
    pub fn with_cancellation(interval: Duration, cancel: CancellationToken) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let reaper_store = Arc::downgrade(&store);

        if Handle::try_current().is_ok() {
            spawn_reaper_task(reaper_store, interval, cancel.clone());
        } else {
            debug!("No Tokio runtime, starting reaper thread");
            if let Err(err) = spawn_reaper_thread(reaper_store, interval, cancel.clone()) {
                warn!(error = %err, "Failed to start cache reaper, entries will not expire");
            }
        }

        Self { store, cancel }
    }

    // == Add ==
    /// Stores `payload` under `key`, replacing any previous entry and its age.
    pub fn add(&self, key: impl Into<String>, payload: impl Into<Vec<u8>>) {
        let key = key.into();
        let payload = payload.into();
        debug!(key = %key, bytes = payload.len(), "Storing cache entry");

        lock_store(&self.store).add(key, payload);
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let (payload, entries) = {
            let mut store = lock_store(&self.store);
            (store.get(key), store.len())
        };

        if payload.is_some() {
            debug!(key, "Cache hit");
        } else {
            debug!(key, entries, "Cache miss");
        }
        payload
    }

    /// Stops the reaper. Entries already stored stay readable.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// The expiry interval this cache was created with.
    pub fn interval(&self) -> Duration {
        lock_store(&self.store).interval()
    }

    pub fn len(&self) -> usize {
        lock_store(&self.store).len()
    }

    pub fn is_empty(&self) -> bool {
        lock_store(&self.store).is_empty()
    }

    /// Snapshot of the hit, miss and expiry counters.
    pub fn stats(&self) -> CacheStats {
        lock_store(&self.store).stats()
    }
}
