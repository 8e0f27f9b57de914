//! REPL Commands
//!
//! Command parsing and execution against the session state.

use rand::Rng;

use crate::api::ApiClient;
use crate::error::{PokedexError, Result};
use crate::models::{CaughtPokemon, Pokedex};

/// Highest possible catch roll; a Pokemon with base experience at or
/// above this value can never be caught.
const MAX_CATCH_VALUE: u32 = 300;

// == Session State ==
/// Mutable state carried across REPL commands.
#[derive(Debug)]
pub struct ReplState {
    /// Cache-backed PokeAPI client
    pub client: ApiClient,
    /// URL of the next location-area page, if any
    pub next_url: Option<String>,
    /// URL of the previous location-area page, if any
    pub previous_url: Option<String>,
    /// Pokemon caught this session
    pub pokedex: Pokedex,
}

impl ReplState {
    /// Creates fresh session state around the given client.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            next_url: None,
            previous_url: None,
            pokedex: Pokedex::new(),
        }
    }
}

// == Flow ==
/// Whether the REPL keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplFlow {
    Continue,
    Exit,
}

// == Command ==
/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
}

/// Command names and descriptions for the help listing.
const HELP_ENTRIES: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("exit", "Exit the Pokedex"),
    ("map", "Displays the next 20 location areas"),
    ("mapb", "Displays the previous 20 location areas"),
    ("explore <area_name>", "Displays the Pokemon found in a location area"),
    ("catch <pokemon_name>", "Attempts to catch a Pokemon"),
    ("inspect <pokemon_name>", "Shows details of a caught Pokemon"),
    ("pokedex", "Lists all Pokemon you have caught"),
];

impl Command {
    // == Parse ==
    /// Parses cleaned input words into a command.
    pub fn parse(words: &[String]) -> Result<Self> {
        let name = words.first().map(String::as_str).unwrap_or_default();
        let arg = words.get(1);

        match name {
            "help" => Ok(Command::Help),
            "exit" => Ok(Command::Exit),
            "map" => Ok(Command::Map),
            "mapb" => Ok(Command::MapBack),
            "explore" => arg
                .map(|a| Command::Explore(a.clone()))
                .ok_or(PokedexError::MissingArgument {
                    usage: "explore <area_name>",
                }),
            "catch" => arg
                .map(|a| Command::Catch(a.clone()))
                .ok_or(PokedexError::MissingArgument {
                    usage: "catch <pokemon_name>",
                }),
            "inspect" => arg
                .map(|a| Command::Inspect(a.clone()))
                .ok_or(PokedexError::MissingArgument {
                    usage: "inspect <pokemon_name>",
                }),
            "pokedex" => Ok(Command::Pokedex),
            other => Err(PokedexError::UnknownCommand(other.to_string())),
        }
    }

    // == Execute ==
    /// Runs the command against the session state, printing its output.
    pub async fn execute(self, state: &mut ReplState) -> Result<ReplFlow> {
        match self {
            Command::Help => {
                println!("Welcome to the Pokedex!");
                println!("Usage:");
                println!();
                for (name, description) in HELP_ENTRIES {
                    println!("{name}: {description}");
                }
                println!();
            }
            Command::Exit => {
                println!("Closing the Pokedex... Goodbye!");
                return Ok(ReplFlow::Exit);
            }
            Command::Map => {
                let page = state
                    .client
                    .location_areas(state.next_url.as_deref())
                    .await?;
                for area in &page.results {
                    println!("{}", area.name);
                }
                state.next_url = page.next;
                state.previous_url = page.previous;
            }
            Command::MapBack => {
                let Some(previous) = state.previous_url.clone() else {
                    println!("You're on the first page.");
                    return Ok(ReplFlow::Continue);
                };
                let page = state.client.location_areas(Some(&previous)).await?;
                for area in &page.results {
                    println!("{}", area.name);
                }
                state.next_url = page.next;
                state.previous_url = page.previous;
            }
            Command::Explore(area_name) => {
                println!("Exploring {area_name}...");
                let detail = state.client.location_area(&area_name).await?;

                if detail.pokemon_encounters.is_empty() {
                    println!("No Pokemon found in this area.");
                    return Ok(ReplFlow::Continue);
                }

                println!("Found Pokemon:");
                for encounter in &detail.pokemon_encounters {
                    println!(" - {}", encounter.pokemon.name);
                }
            }
            Command::Catch(pokemon_name) => {
                println!("Throwing a Pokeball at {pokemon_name}...");

                let detail = match state.client.pokemon(&pokemon_name).await {
                    Ok(detail) => detail,
                    Err(err) if err.is_not_found() => {
                        println!("pokemon '{pokemon_name}' not found");
                        return Ok(ReplFlow::Continue);
                    }
                    Err(err) => return Err(err),
                };

                let roll = rand::thread_rng().gen_range(0..MAX_CATCH_VALUE);
                if catch_succeeds(roll, detail.base_experience) {
                    println!("{pokemon_name} was caught!");
                    state.pokedex.record(CaughtPokemon::from(detail));
                    println!("You may now inspect it with the inspect command.");
                } else {
                    println!("{pokemon_name} escaped!");
                }
            }
            Command::Inspect(pokemon_name) => {
                let Some(pokemon) = state.pokedex.get(&pokemon_name) else {
                    println!("you have not caught that pokemon");
                    return Ok(ReplFlow::Continue);
                };

                println!("Name: {}", pokemon.name);
                println!("Height: {}", pokemon.height);
                println!("Weight: {}", pokemon.weight);

                println!("Stats:");
                let mut stats: Vec<_> = pokemon.stats.iter().collect();
                stats.sort_unstable_by_key(|(name, _)| name.as_str());
                for (name, value) in stats {
                    println!("  -{name}: {value}");
                }

                println!("Types:");
                for type_name in &pokemon.types {
                    println!("  - {type_name}");
                }
            }
            Command::Pokedex => {
                if state.pokedex.is_empty() {
                    println!("Your Pokedex is empty! Go catch some Pokemon!");
                    return Ok(ReplFlow::Continue);
                }

                println!("Your Pokedex:");
                for name in state.pokedex.names() {
                    println!(" - {name}");
                }
            }
        }

        Ok(ReplFlow::Continue)
    }
}

// == Catch Odds ==
/// Stronger Pokemon are harder to catch: the roll must land under
/// `MAX_CATCH_VALUE - base_experience`.
fn catch_succeeds(roll: u32, base_experience: u32) -> bool {
    roll < MAX_CATCH_VALUE.saturating_sub(base_experience)
}
