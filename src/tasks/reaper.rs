//! Cache Reaper Task
//!
//! Background task that periodically sweeps stale entries out of a cache store.

use std::io;
use std::sync::{Mutex, Weak};
use std::thread;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::{lock_store, CacheStore};

/// Shortest timer period the reaper runs with.
///
/// A zero interval still sweeps with a zero age threshold, only the timer is
/// clamped since a tokio interval cannot have a zero period.
pub const MIN_REAP_PERIOD: Duration = Duration::from_millis(1);

/// Longest timer period the reaper runs with, roughly thirty years.
///
/// Larger intervals keep their age threshold but would overflow the timer's
/// deadline arithmetic.
pub const MAX_REAP_PERIOD: Duration = Duration::from_secs(30 * 365 * 24 * 60 * 60);

/// Timer period for a configured interval.
fn reap_period(interval: Duration) -> Duration {
    interval.clamp(MIN_REAP_PERIOD, MAX_REAP_PERIOD)
}

/// Spawns a background task that sweeps `store` once per `interval`.
///
/// The first sweep happens one interval after the call. Each sweep holds the
/// store's lock for the whole pass and removes entries whose age is strictly
/// greater than the store's interval.
///
/// The task holds only a weak reference to the store and exits when either
/// `cancel` fires or the store has been dropped.
///
/// # Arguments
/// * `store` - Weak reference to the shared store
/// * `interval` - Time between sweeps
/// * `cancel` - Token that stops the task when cancelled
///
/// # Panics
/// Panics if called outside of a Tokio runtime, see [`spawn_reaper_thread`].
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(Duration::from_secs(5))));
/// let cancel = CancellationToken::new();
/// let reaper = spawn_reaper_task(Arc::downgrade(&store), Duration::from_secs(5), cancel.clone());
/// // Later, during shutdown:
/// cancel.cancel();
/// reaper.await?;
/// ```
pub fn spawn_reaper_task(
    store: Weak<Mutex<CacheStore>>,
    interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    let start = Instant::now();
    tokio::spawn(reap(store, interval, start, cancel))
}

/// Runs the reaper on a dedicated thread with its own single-threaded runtime.
///
/// Used when the cache is built outside of any Tokio runtime. Fails only if
/// the runtime or the thread cannot be created.
pub fn spawn_reaper_thread(
    store: Weak<Mutex<CacheStore>>,
    interval: Duration,
    cancel: CancellationToken,
) -> io::Result<thread::JoinHandle<()>> {
    let start = Instant::now();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    thread::Builder::new()
        .name("cache-reaper".to_string())
        .spawn(move || runtime.block_on(reap(store, interval, start, cancel)))
}

async fn reap(
    store: Weak<Mutex<CacheStore>>,
    interval: Duration,
    start: Instant,
    cancel: CancellationToken,
) {
    let period = reap_period(interval);
    let first = start.checked_add(period).unwrap_or(start);
    let mut ticker = time::interval_at(first, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(?interval, "Starting cache reaper");

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("Cache reaper cancelled");
                break;
            }
            _ = ticker.tick() => {}
        }

        let Some(shared) = store.upgrade() else {
            debug!("Cache dropped, stopping reaper");
            break;
        };

        let (removed, remaining) = {
            let mut guard = lock_store(&shared);
            let removed = guard.sweep(Instant::now());
            (removed, guard.len())
        };

        if removed > 0 {
            info!(removed, remaining, "Reaped expired cache entries");
        } else {
            debug!(remaining, "Reaper sweep found no expired entries");
        }
    }
}
