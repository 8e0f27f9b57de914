//! Background Tasks Module
//!
//! Contains background tasks that run for the life of the process.
//!
//! # Tasks
//! - Cache reaper: removes stale cache entries at the configured interval

mod reaper;

pub use reaper::{spawn_reaper_task, ReaperHandle};
