//! Win and draw detection
//!
//! A line is won when all three of its cells hold the same non-empty
//! mark. Lines are checked in the fixed [`WIN_LINES`] order and the
//! first matching line is reported; this only affects which line gets
//! highlighted, since at most one side can complete a line in a
//! reachable position.

use crate::board::{Board, Mark};

/// The 8 winning index triples: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // Top row
    [3, 4, 5], // Middle row
    [6, 7, 8], // Bottom row
    [0, 3, 6], // Left column
    [1, 4, 7], // Middle column
    [2, 5, 8], // Right column
    [0, 4, 8], // Diagonal from top-left
    [2, 4, 6], // Diagonal from top-right
];

/// Game status, derived purely from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game continues; `turn` is the mark to move next
    InProgress { turn: Mark },
    /// `winner` completed `line` (indices into the board)
    Won { winner: Mark, line: [usize; 3] },
    /// Board full, no line completed
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_in_progress(self) -> bool {
        matches!(self, GameStatus::InProgress { .. })
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_in_progress()
    }
}

/// Evaluate the board: won, drawn, or in progress.
///
/// Scans [`WIN_LINES`] in declaration order and reports the first
/// completed line. A full board with no completed line is a draw.
/// Otherwise the game is in progress with the turn derived from the
/// mark counts ([`Board::to_move`]).
pub fn evaluate(board: &Board) -> GameStatus {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let mark = board.get(a);
        if mark != Mark::Empty && mark == board.get(b) && mark == board.get(c) {
            return GameStatus::Won { winner: mark, line };
        }
    }

    if board.is_full() {
        return GameStatus::Draw;
    }

    GameStatus::InProgress {
        turn: board.to_move(),
    }
}

/// Find the empty cell that would complete a line for `mark`.
///
/// Scans [`WIN_LINES`] in declaration order and returns the empty
/// third cell of the first line where `mark` already holds the other
/// two. Used by the opponent policy both to win and to block.
pub fn line_completion(board: &Board, mark: Mark) -> Option<usize> {
    for line in WIN_LINES {
        let mut held = 0;
        let mut open = None;
        for idx in line {
            match board.get(idx) {
                m if m == mark => held += 1,
                Mark::Empty => open = Some(idx),
                _ => {}
            }
        }
        if held == 2 {
            if let Some(idx) = open {
                return Some(idx);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark::{Empty, O, X};

    #[test]
    fn test_empty_board_in_progress_x_to_move() {
        let status = evaluate(&Board::new());
        assert_eq!(status, GameStatus::InProgress { turn: Mark::X });
    }

    #[test]
    fn test_top_row_win() {
        let board = Board::from_cells([X, X, X, O, O, Empty, Empty, Empty, Empty]);
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                winner: X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_cells([O, X, Empty, O, X, Empty, Empty, X, Empty]);
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                winner: X,
                line: [1, 4, 7]
            }
        );
    }

    #[test]
    fn test_diagonal_win() {
        let board = Board::from_cells([X, O, Empty, O, X, Empty, Empty, Empty, X]);
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                winner: X,
                line: [0, 4, 8]
            }
        );
    }

    #[test]
    fn test_full_board_no_line_is_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_won_board_is_not_draw_even_when_full() {
        // Full board where X completed the bottom row last
        let board = Board::from_cells([X, O, O, O, O, X, X, X, X]);
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                winner: X,
                line: [6, 7, 8]
            }
        );
    }

    #[test]
    fn test_first_matching_line_reported() {
        // X holds both the top row and the left column; the row is
        // declared first in WIN_LINES so it is the one reported.
        let board = Board::from_cells([X, X, X, X, O, O, X, O, Empty]);
        match evaluate(&board) {
            GameStatus::Won { winner, line } => {
                assert_eq!(winner, X);
                assert_eq!(line, [0, 1, 2]);
            }
            other => panic!("expected a win, got {:?}", other),
        }
    }

    #[test]
    fn test_line_completion_finds_open_third_cell() {
        let board = Board::from_cells([X, X, Empty, Empty, Empty, Empty, Empty, Empty, Empty]);
        assert_eq!(line_completion(&board, X), Some(2));
        assert_eq!(line_completion(&board, O), None);
    }

    #[test]
    fn test_line_completion_ignores_blocked_lines() {
        // Top row has two X but the third cell is O
        let board = Board::from_cells([X, X, O, Empty, Empty, Empty, Empty, Empty, Empty]);
        assert_eq!(line_completion(&board, X), None);
    }

    #[test]
    fn test_line_completion_scan_order() {
        // X can complete the middle row (index 5) or the left column
        // (index 6); the middle row is declared first.
        let board = Board::from_cells([X, O, O, X, X, Empty, Empty, Empty, Empty]);
        assert_eq!(line_completion(&board, X), Some(5));
    }
}
