//! Cache Module
//!
//! Provides an in-memory response cache whose entries are expired by a
//! periodic background sweep.

mod entry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub(crate) use handle::lock_store;
pub use stats::CacheStats;
pub use store::CacheStore;
