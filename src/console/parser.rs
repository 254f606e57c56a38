//! Turns a raw input line into an [`Action`].
//!
//! Only the first two whitespace-separated tokens matter; the rest of the line is ignored.
//! Words are lowercased so `GO North` works. A first token outside the vocabulary yields
//! an action with no word, which the engine reports as not understood.

use crate::square::{Action, Verb};

pub fn parse_action(line: &str) -> Action {
    let lowered = line.trim().to_lowercase();
    let mut tokens = lowered.split_whitespace();
    let first = tokens.next();
    let second = tokens.next();

    let word = first.filter(|w| w.parse::<Verb>().is_ok());
    Action::new(word, second)
}

/// The vocabulary, space separated, for help text.
pub fn vocabulary() -> String {
    Verb::ALL
        .iter()
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join("  ")
}
