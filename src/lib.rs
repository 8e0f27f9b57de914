//! Pokedex CLI - a PokeAPI REPL backed by a time-expiring cache
//!
//! The core of the crate is [`cache::TimedCache`], a concurrent byte
//! cache whose entries are forgotten by a background reaper once they
//! outlive a configured interval. Everything else is the CLI built on
//! top of it: a reqwest PokeAPI client that reads through the cache and
//! the interactive command loop.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::TimedCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use tasks::{spawn_reaper_task, ReaperHandle};
