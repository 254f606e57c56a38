use thiserror::Error;

use super::types::{Direction, RobotKind};

/// Everything a turn can refuse. The message of each variant is what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// First word was not a known action.
    #[error("I don't know what you mean...")]
    UnknownCommand,

    /// Known verb without the word it needs.
    #[error("{}", missing_argument_prompt(.verb))]
    MissingArgument { verb: &'static str },

    /// No door that way (or the direction word is not a direction).
    #[error("There is no door to the {direction}!")]
    NoSuchExit { direction: String },

    #[error("That door to the {direction} is locked!")]
    ExitLocked { direction: Direction },

    #[error("You are already carrying the {item}. Drop it first.")]
    AlreadyCarrying { item: String },

    #[error("There is no {item} in this room.")]
    ItemNotPresent { item: String },

    #[error("You don't have a {item}.")]
    NotCarrying { item: String },

    #[error("You need a key for that door.")]
    MissingKey,

    #[error("The door to the {direction} is already unlocked.")]
    AlreadyUnlocked { direction: Direction },

    /// `quit` followed by another word.
    #[error("{} what?", capitalize(.verb))]
    ExtraneousArgument { verb: &'static str },

    /// Met an active Bishop without a screwdriver. Ends the session.
    #[error("You encountered a {kind} but didn't have a screwdriver. Game over.")]
    FatalEncounter { kind: RobotKind },
}

impl SquareError {
    /// Only a fatal encounter ends the session; every other error leaves the turn recoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SquareError::FatalEncounter { .. })
    }
}

fn missing_argument_prompt(verb: &str) -> &'static str {
    match verb {
        "go" => "Go where?",
        "pick-up" => "Pick up what?",
        "drop" => "Drop what?",
        "lock" => "Lock which direction?",
        "unlock" => "Unlock which direction?",
        _ => "That needs a second word.",
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
