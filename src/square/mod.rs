//! The Square: world model, robots and the turn engine.
//!
//! The world is a 5x5 grid of rooms joined by lockable doors. The player starts in
//! room (1,1) and wins by reaching (5,5). A Rook and a Bishop roam the grid; a
//! screwdriver disables either, but meeting an active Bishop without one ends the game.
//!
//! Nothing in here does I/O. [`GameEngine::step`] returns [`Narration`] events and the
//! `console` module decides how to show them.

pub mod action;
pub mod engine;
pub mod errors;
pub mod event;
pub mod grid;
pub mod player;
pub mod robot;
pub mod room;
pub mod types;

pub use action::{Action, Verb};
pub use engine::{GameEngine, GameStatus, SessionSummary, TurnReport};
pub use errors::SquareError;
pub use event::Narration;
pub use grid::Square;
pub use player::Player;
pub use robot::Robot;
pub use room::{Room, RoomContents};
pub use types::*;
