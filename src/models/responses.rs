//! Response DTOs for the PokeAPI
//!
//! Only the fields the REPL prints are decoded; everything else is ignored.

use serde::Deserialize;

/// A `{ "name", "url" }` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `GET /location-area/`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas across all pages
    #[serde(default)]
    pub count: usize,
    /// URL of the next page, absent on the last page
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page
    pub previous: Option<String>,
    /// Areas on this page
    pub results: Vec<NamedResource>,
}

/// Response body of `GET /location-area/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// Response body of `GET /pokemon/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Some forms carry `null` here; treated as zero
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

impl Pokemon {
    /// Chance of the pokemon escaping a throw, in `[0, 1]`.
    ///
    /// Scales base experience against 1000, so anything at or above 1000 always escapes.
    pub fn escape_chance(&self) -> f64 {
        (f64::from(self.base_experience.unwrap_or(0)) / 1000.0).min(1.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
