//! Cache Reaper Task
//!
//! Background task that periodically sweeps stale entries out of the
//! timed cache, so callers never have to drive expiry themselves.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TimedCache;

// == Reaper Handle ==
/// Handle to a running reaper task.
///
/// The reaper has no failure modes of its own; the handle exists so the
/// task is not an unscoped resource — tests and graceful shutdown can
/// stop it deterministically instead of leaking it to process exit.
#[derive(Debug)]
pub struct ReaperHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    /// Signals the reaper to stop and waits for it to finish its current
    /// tick, if any, and exit.
    pub async fn shutdown(self) {
        // Receiver gone means the task already exited; nothing to wait for.
        if self.shutdown_tx.send(true).is_ok() {
            let _ = self.task.await;
        }
    }

    /// Aborts the task without waiting. Prefer [`ReaperHandle::shutdown`].
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

// == Spawn ==
/// Spawns the background reaper for `cache`, sweeping every `period`.
///
/// Each tick acquires the cache's lock once, removes every entry older
/// than the cache interval, and logs the count. An entry added at time T
/// therefore survives until at least T + interval and is gone no later
/// than T + interval + `period` (one missed sweep at worst).
///
/// # Example
/// ```ignore
/// let cache = TimedCache::new(Duration::from_secs(300));
/// let reaper = spawn_reaper_task(cache.clone(), cache.interval());
/// // Later, during shutdown:
/// reaper.shutdown().await;
/// ```
pub fn spawn_reaper_task(cache: TimedCache, period: Duration) -> ReaperHandle {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        info!("Starting cache reaper with period of {:?}", period);

        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick of an interval completes immediately; consume it
        // so the first sweep happens one full period after start.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = cache.reap();
                    if removed > 0 {
                        info!("Cache reaper: removed {} stale entries", removed);
                    } else {
                        debug!("Cache reaper: no stale entries found");
                    }
                }
                _ = shutdown_rx.changed() => {
                    info!("Cache reaper shutting down");
                    break;
                }
            }
        }
    });

    ReaperHandle { shutdown_tx, task }
}
