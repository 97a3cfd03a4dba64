//! API Module
//!
//! Cached HTTP access to the PokeAPI.
//!
//! # Endpoints
//! - `GET location-area/` - Paginated list of location areas
//! - `GET location-area/{name}` - Pokemon encountered in an area
//! - `GET pokemon/{name}` - Pokemon details

pub mod client;

pub use client::PokeApiClient;
