//! Cache Module
//!
//! Provides the in-memory timed cache that backs API fetches: byte
//! payloads keyed by URL, forgotten by a background reaper once they
//! outlive the configured interval.

mod clock;
mod entry;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use store::TimedCache;
