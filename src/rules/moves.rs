//! Move validation and application
//!
//! `apply_move` is pure: it validates against the current board and
//! returns the updated board, leaving state ownership to the caller.

use derive_more::{Display, Error};

use crate::board::{Board, Mark, TOTAL_CELLS};

use super::win::evaluate;

/// Error applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Cell index outside 0..9
    #[display("cell index {_0} is out of range")]
    IndexOutOfRange(#[error(not(source))] usize),

    /// Target cell already holds a mark
    #[display("cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] usize),

    /// Board is already won or drawn
    #[display("game is already over")]
    GameAlreadyOver,

    /// The given mark is not the one to move
    #[display("it is not {}'s turn", _0.label())]
    OutOfTurn(#[error(not(source))] Mark),
}

/// Apply `mark` at `idx`, returning the updated board.
///
/// Validation order: index range, terminal status, cell emptiness,
/// then turn alternation. The input board is untouched; the caller
/// decides whether to adopt the returned board.
pub fn apply_move(board: &Board, idx: usize, mark: Mark) -> Result<Board, MoveError> {
    if idx >= TOTAL_CELLS {
        return Err(MoveError::IndexOutOfRange(idx));
    }
    if evaluate(board).is_terminal() {
        return Err(MoveError::GameAlreadyOver);
    }
    if !board.is_empty(idx) {
        return Err(MoveError::CellOccupied(idx));
    }
    if mark != board.to_move() {
        return Err(MoveError::OutOfTurn(mark));
    }

    Ok(board.with_mark(idx, mark))
}
