//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror. The cache layer takes
//! no part in this: its operations are total and signal absence with
//! `Option` rather than an error.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the fetch and REPL layers.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// HTTP transport failure (connect, timeout, body read)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with an error status
    #[error("bad status code {status} for {url}")]
    BadStatus { status: u16, url: String },

    /// Response body did not decode as the expected JSON shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was issued without its required argument
    #[error("missing argument: {usage}")]
    MissingArgument { usage: &'static str },

    /// Input named a command the REPL does not know
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Reading from stdin failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PokedexError {
    /// True when the failure was a plain 404, so callers can phrase it as
    /// "no such Pokemon/area" instead of an HTTP error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::BadStatus { status: 404, .. })
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
