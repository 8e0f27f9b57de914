//! REPL Module
//!
//! The interactive command layer: input cleaning, command parsing and
//! dispatch, and the session loop.

mod commands;
mod input;
mod session;

pub use commands::{Command, ReplFlow, ReplState};
pub use input::clean_input;
pub use session::run;
