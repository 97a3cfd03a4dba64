//! Pokecache - A Pokedex REPL backed by an in-memory TTL cache
//!
//! API responses are cached by URL. A background reaper drops entries once
//! they are older than the configured interval.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::PokedexError;
pub use repl::Session;
pub use tasks::spawn_reaper_task;
