//! Input Cleaning
//!
//! Normalizes a raw REPL line into lowercase words.

/// Splits `text` into lowercase words, dropping all surrounding and
/// repeated whitespace (spaces, tabs, newlines).
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
