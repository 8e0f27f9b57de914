//! Timed Cache Module
//!
//! Thread-safe byte cache keyed by string, with age-based expiry driven
//! by a background reaper (see `tasks::spawn_reaper_task`).

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::cache::{CacheEntry, Clock, SystemClock};
use crate::tasks::{spawn_reaper_task, ReaperHandle};

// == Timed Cache ==
/// In-memory cache whose entries are forgotten once they outlive `interval`.
///
/// A single exclusive lock guards the whole map; `add`, `get`, and the
/// reaper sweep serialize through it, and nothing performs I/O while
/// holding it. Cloning is cheap and shares the same underlying map, which
/// is how the reaper task and foreground callers see the same entries.
///
/// `get` never checks staleness itself: bounding entry age is solely the
/// reaper's job, so a lookup can observe an entry up to one sweep period
/// past `interval`. In exchange, lookups never pay a staleness check.
#[derive(Debug, Clone)]
pub struct TimedCache {
    /// Key-value storage behind the cache's one exclusive lock
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    /// Time source for `created_at` stamps and sweep comparisons
    clock: Arc<dyn Clock>,
    /// Staleness threshold; also the reaper's sweep period
    interval: Duration,
}

impl TimedCache {
    // == Constructors ==
    /// Creates an empty cache on the system clock.
    ///
    /// No reaper is started; use [`TimedCache::start`] for the usual
    /// construct-and-start lifecycle, or drive [`TimedCache::reap`] by
    /// hand (tests do).
    pub fn new(interval: Duration) -> Self {
        Self::with_clock(interval, Arc::new(SystemClock))
    }

    /// Creates an empty cache reading time from the given clock.
    pub fn with_clock(interval: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            clock,
            interval,
        }
    }

    /// Creates a cache and immediately starts its background reaper,
    /// sweeping every `interval`.
    ///
    /// The returned [`ReaperHandle`] is the only way to stop the sweep
    /// task; dropping it detaches the task for the life of the runtime.
    pub fn start(interval: Duration) -> (Self, ReaperHandle) {
        let cache = Self::new(interval);
        let handle = spawn_reaper_task(cache.clone(), interval);
        (cache, handle)
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, stamping it with the
    /// current time.
    ///
    /// Replacement is total: a re-add overwrites both the payload and the
    /// creation time, restarting the entry's lifetime. Cannot fail.
    pub fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let entry = CacheEntry::new(value, self.clock.now());
        self.lock_entries().insert(key.into(), entry);
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, or `None` if the
    /// key is absent.
    ///
    /// Absence means "never added or already reaped" — this distinguishes
    /// a missing key from a present-but-empty payload. No staleness check
    /// happens here.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.lock_entries().get(key).map(|entry| entry.value.clone())
    }

    // == Reap ==
    /// Performs one sweep: removes every entry whose age strictly exceeds
    /// the interval, judging all entries against a single `now`.
    ///
    /// Returns the number of entries removed. The sweep is atomic with
    /// respect to `add`/`get`; no caller can observe a half-swept map.
    pub fn reap(&self) -> usize {
        let mut entries = self.lock_entries();
        let now = self.clock.now();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_stale(now, self.interval));
        before - entries.len()
    }

    // == Accessors ==
    /// Returns the configured staleness threshold.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    // == Lock Helper ==
    /// Acquires the map lock, recovering from poisoning.
    ///
    /// The map holds plain data and every critical section is a handful
    /// of map operations, so a panicking holder cannot leave it logically
    /// inconsistent; recovery keeps `add`/`get` total.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    const INTERVAL: Duration = Duration::from_secs(10);

    fn manual_cache() -> (TimedCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let cache = TimedCache::with_clock(INTERVAL, clock.clone());
        (cache, clock)
    }

    #[test]
    fn test_add_then_get() {
        let cache = TimedCache::new(INTERVAL);

        cache.add("https://example.com/api/1", b"testdata_one".to_vec());
        assert_eq!(
            cache.get("https://example.com/api/1"),
            Some(b"testdata_one".to_vec())
        );
    }

    #[test]
    fn test_get_missing_key() {
        let cache = TimedCache::new(INTERVAL);
        assert_eq!(cache.get("never_added"), None);
    }

    #[test]
    fn test_empty_payload_is_still_found() {
        let cache = TimedCache::new(INTERVAL);

        cache.add("empty", Vec::new());

        // Present-with-empty-payload is distinct from absent.
        assert_eq!(cache.get("empty"), Some(Vec::new()));
    }

    #[test]
    fn test_readd_replaces_value() {
        let cache = TimedCache::new(INTERVAL);

        cache.add("key", b"first".to_vec());
        cache.add("key", b"second".to_vec());

        assert_eq!(cache.get("key"), Some(b"second".to_vec()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_readd_restarts_lifetime() {
        let (cache, clock) = manual_cache();

        cache.add("key", b"first".to_vec());
        clock.advance(Duration::from_secs(8));

        // Overwrite resets created_at, so another 8 seconds later the
        // entry is only 8 seconds old and survives the sweep.
        cache.add("key", b"second".to_vec());
        clock.advance(Duration::from_secs(8));

        assert_eq!(cache.reap(), 0);
        assert_eq!(cache.get("key"), Some(b"second".to_vec()));
    }

    #[test]
    fn test_reap_keeps_fresh_entries() {
        let (cache, clock) = manual_cache();

        cache.add("fresh", b"v".to_vec());
        clock.advance(INTERVAL / 2);

        assert_eq!(cache.reap(), 0);
        assert_eq!(cache.get("fresh"), Some(b"v".to_vec()));
    }

    #[test]
    fn test_reap_removes_stale_entries() {
        let (cache, clock) = manual_cache();

        cache.add("stale", b"v".to_vec());
        clock.advance(INTERVAL + Duration::from_millis(1));

        assert_eq!(cache.reap(), 1);
        assert_eq!(cache.get("stale"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_reap_at_exact_interval_keeps_entry() {
        let (cache, clock) = manual_cache();

        cache.add("boundary", b"v".to_vec());
        clock.advance(INTERVAL);

        // Strictly-greater staleness: age == interval survives the sweep.
        assert_eq!(cache.reap(), 0);
        assert_eq!(cache.get("boundary"), Some(b"v".to_vec()));
    }

    #[test]
    fn test_reap_is_selective() {
        let (cache, clock) = manual_cache();

        cache.add("old", b"1".to_vec());
        clock.advance(Duration::from_secs(9));
        cache.add("new", b"2".to_vec());
        clock.advance(Duration::from_secs(2));

        // "old" is 11s old, "new" only 2s.
        assert_eq!(cache.reap(), 1);
        assert_eq!(cache.get("old"), None);
        assert_eq!(cache.get("new"), Some(b"2".to_vec()));
    }

    #[test]
    fn test_get_does_not_expire_entries() {
        let (cache, clock) = manual_cache();

        cache.add("lingering", b"v".to_vec());
        clock.advance(INTERVAL * 2);

        // Until a sweep runs, even a long-stale entry is still visible;
        // staleness is the reaper's job alone.
        assert_eq!(cache.get("lingering"), Some(b"v".to_vec()));

        assert_eq!(cache.reap(), 1);
        assert_eq!(cache.get("lingering"), None);
    }

    #[test]
    fn test_clones_share_storage() {
        let cache = TimedCache::new(INTERVAL);
        let clone = cache.clone();

        cache.add("shared", b"v".to_vec());
        assert_eq!(clone.get("shared"), Some(b"v".to_vec()));
    }

    #[test]
    fn test_concurrent_disjoint_keys() {
        use std::thread;

        let cache = TimedCache::new(INTERVAL);
        let mut handles = Vec::new();

        for worker in 0..8 {
            let cache = cache.clone();
            handles.push(thread::spawn(move || {
                let key = format!("worker_{worker}");
                for round in 0..200 {
                    cache.add(key.clone(), format!("round_{round}").into_bytes());
                    let _ = cache.get(&key);
                }
                // Own last write must be visible to the writer.
                assert_eq!(cache.get(&key), Some(b"round_199".to_vec()));
            }));
        }

        for handle in handles {
            handle.join().expect("worker panicked");
        }

        assert_eq!(cache.len(), 8);
    }
}
