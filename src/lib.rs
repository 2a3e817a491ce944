//! Tic-tac-toe game engine with a rule-based computer opponent
//!
//! The core is a pure 3x3 game-state machine plus a deterministic
//! move-selection heuristic. Presentation and input live in the
//! [`ui`] module and only talk to the core through [`Session`].
//!
//! # Architecture
//!
//! - [`board`]: 9-cell board, marks, index/position conversions
//! - [`rules`]: move application, win/draw detection, turn order
//! - [`policy`]: the opponent's priority-ladder move choice
//! - [`session`]: the mutable aggregate callers own and drive
//! - [`ui`]: egui front end (board view, status panel, pacing)
//!
//! # Quick start
//!
//! ```
//! use tictactoe::{GameMode, GameStatus, Mark, Session};
//!
//! let mut session = Session::new(GameMode::HumanVsComputer { computer: Mark::O });
//!
//! // Human plays the center, computer answers.
//! session.play(4).unwrap();
//! session.play_computer_move().unwrap();
//!
//! assert!(matches!(session.status(), GameStatus::InProgress { .. }));
//! assert_eq!(session.turn(), Mark::X);
//! ```
//!
//! # Opponent policy
//!
//! The computer evaluates a fixed ladder, first applicable rule wins:
//! win now, block the opponent, take the center, take a corner, take
//! anything. A greedy heuristic, deliberately not minimax.

pub mod board;
pub mod policy;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use policy::{choose_move, ChoiceRule, MoveChoice, PolicyError};
pub use rules::{apply_move, evaluate, GameStatus, MoveError, WIN_LINES};
pub use session::{GameMode, Session};
