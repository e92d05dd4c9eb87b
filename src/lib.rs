//! N×N tic-tac-toe engine for the browser.
//!
//! Logging goes through `tracing`. The crate never installs a subscriber, so
//! spans and events are only visible to native hosts (tests, tools) that set
//! one up; in the browser build they are dropped.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod render;
pub mod types;
pub mod wasm;
pub mod win_positions;

pub use error::GameError;
pub use game::{GameEngine, MoveOutcome};
pub use types::{Cell, GameResult, GameState, Player};
pub use win_positions::{WinLine, WinPositionSet};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
