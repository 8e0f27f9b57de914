//! Property-Based Tests for the Timed Cache
//!
//! Uses proptest to check the cache's storage and expiry behavior against
//! a simple model across generated operation sequences.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{ManualClock, TimedCache};

// == Test Configuration ==
const TEST_INTERVAL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys (URL-ish, small alphabet so collisions happen)
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-c]{1,4}"
}

/// Generates byte payloads, empty included
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

/// One cache operation for sequence tests
#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Add { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a pair and reading it straight back returns the same bytes.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let cache = TimedCache::new(TEST_INTERVAL);

        cache.add(key.clone(), value.clone());
        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // Re-adding a key replaces the payload entirely.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let cache = TimedCache::new(TEST_INTERVAL);

        cache.add(key.clone(), value1);
        cache.add(key.clone(), value2.clone());

        prop_assert_eq!(cache.get(&key), Some(value2));
        prop_assert_eq!(cache.len(), 1);
    }

    // Any sequence of adds and gets behaves exactly like a plain map:
    // every get returns the most recent add for that key, or None.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let cache = TimedCache::new(TEST_INTERVAL);
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Add { key, value } => {
                    cache.add(key.clone(), value.clone());
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key), model.get(&key).cloned());
                }
            }
        }

        prop_assert_eq!(cache.len(), model.len());
    }

    // With a frozen clock nothing ever ages out, no matter how many
    // sweeps run.
    #[test]
    fn prop_sweep_removes_nothing_fresh(
        pairs in prop::collection::hash_map(key_strategy(), value_strategy(), 1..10)
    ) {
        let clock = Arc::new(ManualClock::new());
        let cache = TimedCache::with_clock(TEST_INTERVAL, clock);

        for (key, value) in &pairs {
            cache.add(key.clone(), value.clone());
        }

        prop_assert_eq!(cache.reap(), 0);
        prop_assert_eq!(cache.reap(), 0);

        for (key, value) in &pairs {
            prop_assert_eq!(cache.get(key), Some(value.clone()));
        }
    }

    // Once the clock jumps past the interval, a single sweep empties the
    // cache completely.
    #[test]
    fn prop_sweep_removes_everything_stale(
        pairs in prop::collection::hash_map(key_strategy(), value_strategy(), 1..10)
    ) {
        let clock = Arc::new(ManualClock::new());
        let cache = TimedCache::with_clock(TEST_INTERVAL, clock.clone());

        for (key, value) in &pairs {
            cache.add(key.clone(), value.clone());
        }
        let stored = cache.len();

        clock.advance(TEST_INTERVAL + Duration::from_secs(1));

        prop_assert_eq!(cache.reap(), stored);
        prop_assert!(cache.is_empty());
    }
}
