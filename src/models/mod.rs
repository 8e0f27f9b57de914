//! Models Module
//!
//! serde DTOs for the PokeAPI payloads we decode, plus the caught-Pokemon
//! bookkeeping the REPL maintains.

mod location;
mod pokemon;

pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{CaughtPokemon, Pokedex, PokemonDetail, StatSlot, TypeSlot};
