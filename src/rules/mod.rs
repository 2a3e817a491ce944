//! Game rules for tic-tac-toe
//!
//! This module implements the rule set:
//! - Move legality and application
//! - Win/draw detection over the 8 fixed lines
//! - Turn alternation

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{apply_move, MoveError};
pub use win::{evaluate, line_completion, GameStatus, WIN_LINES};
