//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: Sweeps stale cache entries once per interval, on the current
//!   runtime or on its own thread when there is none

mod reaper;

pub use reaper::{spawn_reaper_task, spawn_reaper_thread, MAX_REAP_PERIOD, MIN_REAP_PERIOD};
