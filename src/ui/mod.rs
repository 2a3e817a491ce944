//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe. It owns
//! the pacing delay around the computer's move; the core engine
//! itself is synchronous and pure.

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
