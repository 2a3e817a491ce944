//! Rule-based opponent policy
//!
//! Move choice follows a fixed priority ladder; the first applicable
//! rule wins:
//!
//! 1. **Win now**: complete an own two-in-a-row
//! 2. **Block**: complete the opponent's two-in-a-row to deny it
//! 3. **Center**: take cell 4
//! 4. **Corner**: first empty of [0, 2, 6, 8]
//! 5. **Any**: first empty cell in index order
//!
//! This is a greedy heuristic rather than exhaustive search; it plays
//! a credible game but makes no unbeatable-play guarantee.
//!
//! # Example
//!
//! ```
//! use tictactoe::{policy, Board, Mark};
//!
//! let board = Board::new().with_mark(0, Mark::X);
//! let cell = policy::choose_move(&board, Mark::O).unwrap();
//! assert_eq!(cell, 4); // takes the center
//! ```

use derive_more::{Display, Error};
use tracing::debug;

use crate::board::{Board, Mark, TOTAL_CELLS};
use crate::rules::line_completion;

/// Corner cells in scan order
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Center cell index
const CENTER: usize = 4;

/// Which ladder rule produced the chosen move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceRule {
    /// Completed an own line for the win
    WinNow,
    /// Blocked the opponent's completable line
    Block,
    /// Took the center cell
    Center,
    /// Took the first empty corner
    Corner,
    /// Took the first empty cell
    Any,
}

/// A chosen move together with the rule that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    pub cell: usize,
    pub rule: ChoiceRule,
}

/// Error choosing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PolicyError {
    /// Every cell is occupied
    #[display("no empty cell to play")]
    NoMoveAvailable,
}

/// Choose a cell for `side` to play.
///
/// Callers must only invoke this while the game is in progress;
/// on a full board this fails with [`PolicyError::NoMoveAvailable`].
pub fn choose_move(board: &Board, side: Mark) -> Result<usize, PolicyError> {
    choose_move_detailed(board, side).map(|choice| choice.cell)
}

/// Like [`choose_move`], but also reports which rule fired.
pub fn choose_move_detailed(board: &Board, side: Mark) -> Result<MoveChoice, PolicyError> {
    let choice = ladder(board, side).ok_or(PolicyError::NoMoveAvailable)?;
    debug!(cell = choice.cell, rule = ?choice.rule, "policy chose move");
    Ok(choice)
}

/// Walk the priority ladder, first applicable rule wins.
fn ladder(board: &Board, side: Mark) -> Option<MoveChoice> {
    if let Some(cell) = line_completion(board, side) {
        return Some(MoveChoice {
            cell,
            rule: ChoiceRule::WinNow,
        });
    }

    if let Some(cell) = line_completion(board, side.opponent()) {
        return Some(MoveChoice {
            cell,
            rule: ChoiceRule::Block,
        });
    }

    if board.is_empty(CENTER) {
        return Some(MoveChoice {
            cell: CENTER,
            rule: ChoiceRule::Center,
        });
    }

    for cell in CORNERS {
        if board.is_empty(cell) {
            return Some(MoveChoice {
                cell,
                rule: ChoiceRule::Corner,
            });
        }
    }

    (0..TOTAL_CELLS).find(|&cell| board.is_empty(cell)).map(|cell| MoveChoice {
        cell,
        rule: ChoiceRule::Any,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark::{Empty, O, X};

    #[test]
    fn test_completes_own_line() {
        let board = Board::from_cells([X, X, Empty, Empty, Empty, Empty, Empty, Empty, Empty]);
        let choice = choose_move_detailed(&board, X).unwrap();
        assert_eq!(choice.cell, 2);
        assert_eq!(choice.rule, ChoiceRule::WinNow);
    }

    #[test]
    fn test_win_preferred_over_block() {
        // O can win on cell 5; X threatens on cell 2. O takes the win.
        let board = Board::from_cells([X, X, Empty, O, O, Empty, Empty, Empty, X]);
        let choice = choose_move_detailed(&board, O).unwrap();
        assert_eq!(choice.cell, 5);
        assert_eq!(choice.rule, ChoiceRule::WinNow);
    }

    #[test]
    fn test_blocks_opponent_instead_of_taking_center() {
        let board = Board::from_cells([O, O, Empty, Empty, X, Empty, Empty, Empty, Empty]);
        let choice = choose_move_detailed(&board, X).unwrap();
        assert_eq!(choice.cell, 2);
        assert_eq!(choice.rule, ChoiceRule::Block);
    }

    #[test]
    fn test_takes_center_when_no_threats() {
        let board = Board::new().with_mark(0, X);
        let choice = choose_move_detailed(&board, O).unwrap();
        assert_eq!(choice.cell, 4);
        assert_eq!(choice.rule, ChoiceRule::Center);
    }

    #[test]
    fn test_takes_first_empty_corner_when_center_taken() {
        let board = Board::from_cells([Empty, X, Empty, Empty, O, Empty, Empty, Empty, Empty]);
        let choice = choose_move_detailed(&board, X).unwrap();
        assert_eq!(choice.cell, 0);
        assert_eq!(choice.rule, ChoiceRule::Corner);
    }

    #[test]
    fn test_corner_scan_order() {
        // Corner 0 taken, center taken, no threats; next corner is 2.
        let board = Board::from_cells([X, Empty, Empty, Empty, O, Empty, Empty, Empty, Empty]);
        let choice = choose_move_detailed(&board, X).unwrap();
        assert_eq!(choice.cell, 2);
        assert_eq!(choice.rule, ChoiceRule::Corner);
    }

    #[test]
    fn test_falls_back_to_first_empty_cell() {
        // Only cell 7 is open; both lines through it are mixed, the
        // center and every corner are taken.
        let board = Board::from_cells([X, O, O, O, X, X, X, Empty, O]);
        let choice = choose_move_detailed(&board, X).unwrap();
        assert_eq!(choice.cell, 7);
        assert_eq!(choice.rule, ChoiceRule::Any);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(choose_move(&board, X), Err(PolicyError::NoMoveAvailable));
    }

    #[test]
    fn test_choice_is_independent_of_which_side_is_automated() {
        // Symmetric position: the ladder sees the same threats no
        // matter which mark it plays, only from its own perspective.
        let board = Board::from_cells([X, X, Empty, O, O, Empty, Empty, Empty, Empty]);
        assert_eq!(choose_move(&board, X).unwrap(), 2); // win
        assert_eq!(choose_move(&board, O).unwrap(), 5); // win
    }
}
