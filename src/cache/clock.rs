//! Clock Abstraction Module
//!
//! Injectable time source so expiry can be tested without real delays.

use std::fmt;
use std::sync::Mutex;
use std::time::{Duration, Instant};

// == Clock Trait ==
/// A source of monotonic time for entry timestamps and staleness checks.
///
/// The cache reads all of its times through this trait, so tests can
/// substitute a clock they control instead of sleeping.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns the current instant according to this clock.
    fn now(&self) -> Instant;
}

// == System Clock ==
/// Production clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

// == Manual Clock ==
/// A clock that only moves when told to.
///
/// Time starts at construction and advances via [`ManualClock::advance`].
/// Intended for deterministic expiry tests; shared freely via `Arc`.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    elapsed: Mutex<Duration>,
}

impl ManualClock {
    /// Creates a manual clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            elapsed: Mutex::new(Duration::ZERO),
        }
    }

    /// Moves the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        let mut elapsed = self.elapsed.lock().unwrap_or_else(|e| e.into_inner());
        *elapsed += step;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let elapsed = self.elapsed.lock().unwrap_or_else(|e| e.into_inner());
        self.base + *elapsed
    }
}
