//! # The Square - a turn-based escape room
//!
//! You start in room (1,1) of a 5x5 grid and must reach the exit at (5,5).
//! Doors between rooms can be locked and unlocked with a key. Two robots hunt you:
//!
//! - **Rook** walks toward you and flips the lock of the door nearest you every turn.
//!   Meeting it without a screwdriver is harmless.
//! - **Bishop** walks toward you, or away while you carry a screwdriver.
//!   Meeting it without a screwdriver ends the game.
//!
//! You can carry one item at a time. Keys and screwdrivers are scattered at random.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use thesquare::config::Config;
//! use thesquare::square::GameEngine;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let mut engine = GameEngine::new(&mut StdRng::seed_from_u64(7));
//!     let stdin = std::io::stdin();
//!     let status = thesquare::console::run(&mut engine, stdin.lock(), &mut std::io::stdout(), &config)?;
//!     println!("{:?}", status);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`square`] - World model, robots and the turn engine (no I/O)
//! - [`console`] - Input parsing, text rendering and the terminal session loop
//! - [`config`] - TOML configuration
//! - [`logutil`] - Log sanitizing helpers

pub mod config;
pub mod console;
pub mod logutil;
pub mod square;
