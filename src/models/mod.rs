//! PokeAPI response models
//!
//! Defines the subset of the PokeAPI JSON documents the Pokedex reads.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    LocationArea, LocationAreaPage, NamedResource, Pokemon, PokemonEncounter, PokemonStat,
    PokemonType,
};
