//! Cache Entry Module
//!
//! Defines the structure for individual timed cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload with its creation time.
///
/// Entries are immutable once created: re-adding a key replaces the whole
/// entry, value and timestamp both.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// When the entry was created, per the cache's clock
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the given creation instant.
    pub fn new(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how old the entry is as of `now`.
    ///
    /// Saturates to zero if `now` is somehow earlier than `created_at`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry's age strictly exceeds `interval`.
    ///
    /// Boundary condition: an entry aged exactly `interval` is NOT stale.
    /// Staleness begins only once the full interval has elapsed, so an
    /// entry added at time T survives until at least T + interval.
    pub fn is_stale(&self, now: Instant, interval: Duration) -> bool {
        self.age(now) > interval
    }
}
