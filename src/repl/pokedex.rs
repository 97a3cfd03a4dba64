//! Caught pokemon, kept for the lifetime of a session.

use std::collections::BTreeMap;

use crate::models::Pokemon;

/// Pokemon the user has caught, keyed and ordered by the name used to catch them.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch under `name`, the word the user typed. Catching under
    /// the same name again replaces the record.
    pub fn record(&mut self, name: impl Into<String>, pokemon: Pokemon) {
        self.caught.insert(name.into(), pokemon);
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Caught pokemon in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.caught.values()
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
