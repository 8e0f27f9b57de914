//! API Module
//!
//! The cache-backed PokeAPI client.

mod client;

pub use client::ApiClient;
