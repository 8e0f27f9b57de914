//! REPL Session Loop
//!
//! Reads lines from stdin, parses them into commands, and executes them
//! against the session state until `exit` or end of input.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::error::{PokedexError, Result};
use crate::repl::commands::{Command, ReplFlow, ReplState};
use crate::repl::input::clean_input;

/// Runs the interactive loop to completion.
///
/// Command failures are printed and the loop continues; only a stdin
/// read failure ends the session with an error. The prompt goes to
/// stderr so piped stdout stays clean command output.
pub async fn run(mut state: ReplState) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        eprint!("Pokedex > ");
        std::io::stderr().flush()?;

        let Some(line) = lines.next_line().await? else {
            // EOF: behave like exit.
            break;
        };

        let words = clean_input(&line);
        if words.is_empty() {
            continue;
        }
        let command_name = words[0].clone();

        let command = match Command::parse(&words) {
            Ok(command) => command,
            Err(PokedexError::UnknownCommand(name)) => {
                println!("Unknown command: {name}");
                continue;
            }
            Err(err) => {
                println!("Error executing command {command_name}: {err}");
                continue;
            }
        };

        debug!(command = %command_name, "dispatching");
        match command.execute(&mut state).await {
            Ok(ReplFlow::Continue) => {}
            Ok(ReplFlow::Exit) => break,
            Err(err) => {
                println!("Error executing command {command_name}: {err}");
            }
        }
    }

    Ok(())
}
