//! Game session management
//!
//! A [`Session`] is the mutable aggregate the caller owns: current
//! board, active mark, status, and mode. The engine functions it
//! drives ([`crate::rules`], [`crate::policy`]) stay pure; the
//! session is the single place state actually changes.

use tracing::{debug, info};

use crate::board::{Board, Mark};
use crate::policy::{self, MoveChoice, PolicyError};
use crate::rules::{self, GameStatus, MoveError};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans alternating on the same board
    HumanVsHuman,
    /// One human against the rule-based opponent
    HumanVsComputer { computer: Mark },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsHuman
    }
}

/// Mutable game session: board, turn, status, mode.
///
/// Created fresh at game start and discarded on reset or mode change.
/// Resetting is safe at any point, including after a terminal status.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    turn: Mark,
    status: GameStatus,
    mode: GameMode,
}

impl Session {
    /// Fresh session: empty board, X to move.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress { turn: Mark::X },
            mode,
        }
    }

    /// Discard the game in progress and start over in the same mode.
    pub fn reset(&mut self) {
        info!(mode = ?self.mode, "session reset");
        *self = Session::new(self.mode);
    }

    /// Switch mode. Always starts a fresh game; an in-progress board
    /// is never carried across a mode change.
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(?mode, "mode change");
        *self = Session::new(mode);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// True while neither side has won and the board is not full
    pub fn in_progress(&self) -> bool {
        self.status.is_in_progress()
    }

    /// True if the active mark is played by the computer
    pub fn is_computer_turn(&self) -> bool {
        match self.mode {
            GameMode::HumanVsComputer { computer } => {
                self.in_progress() && self.turn == computer
            }
            GameMode::HumanVsHuman => false,
        }
    }

    /// Play the active mark at `idx`.
    ///
    /// On success the board, turn, and status advance together and
    /// the new status is returned. On failure the session is
    /// untouched.
    pub fn play(&mut self, idx: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let board = rules::apply_move(&self.board, idx, self.turn)?;
        let status = rules::evaluate(&board);

        debug!(cell = idx, mark = self.turn.label(), ?status, "move applied");

        self.board = board;
        self.status = status;
        if let GameStatus::InProgress { turn } = status {
            self.turn = turn;
        }

        Ok(status)
    }

    /// Ask the policy for the computer's move without applying it.
    ///
    /// Callers that pace the computer's move (the GUI waits half a
    /// second) pick the cell first and apply it later via [`play`].
    ///
    /// [`play`]: Session::play
    pub fn choose_computer_move(&self) -> Result<MoveChoice, PolicyError> {
        policy::choose_move_detailed(&self.board, self.turn)
    }

    /// Choose and immediately apply the computer's move.
    pub fn play_computer_move(&mut self) -> Result<GameStatus, MoveError> {
        match self.choose_computer_move() {
            Ok(choice) => self.play(choice.cell),
            // Full board means the game is already drawn
            Err(PolicyError::NoMoveAvailable) => Err(MoveError::GameAlreadyOver),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
