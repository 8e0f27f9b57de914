//! Pokemon DTOs and the caught-Pokemon collection
//!
//! `PokemonDetail` mirrors the PokeAPI response; `CaughtPokemon` is the
//! flattened form the `inspect` command displays, and `Pokedex` is the
//! session's collection of them.

use std::collections::HashMap;

use serde::Deserialize;

use super::NamedResource;

/// Detail for a single Pokemon (GET /pokemon/{name}).
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

/// One stat entry in a Pokemon detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One type entry in a Pokemon detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

// == Caught Pokemon ==
/// A Pokemon the user has caught, flattened for display.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub name: String,
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    /// Stat name to base value
    pub stats: HashMap<String, u32>,
    /// Type names in slot order
    pub types: Vec<String>,
}

impl From<PokemonDetail> for CaughtPokemon {
    fn from(detail: PokemonDetail) -> Self {
        let stats = detail
            .stats
            .into_iter()
            .map(|slot| (slot.stat.name, slot.base_stat))
            .collect();
        let types = detail
            .types
            .into_iter()
            .map(|slot| slot.type_info.name)
            .collect();

        Self {
            name: detail.name,
            base_experience: detail.base_experience,
            height: detail.height,
            weight: detail.weight,
            stats,
            types,
        }
    }
}

// == Pokedex ==
/// The session's collection of caught Pokemon, keyed by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: HashMap<String, CaughtPokemon>,
}

impl Pokedex {
    /// Creates an empty Pokedex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch, replacing any earlier entry for the same name.
    pub fn record(&mut self, pokemon: CaughtPokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    /// Looks up a caught Pokemon by name.
    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.caught.get(name)
    }

    /// Names of everything caught so far, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.caught.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns true when nothing has been caught yet.
    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
