//! Board representation for tic-tac-toe

#[cfg(test)]
mod tests;

/// Board side length (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// Cell marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Label used in status text ("X" / "O")
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Row-major cell index (row0: 0,1,2; row1: 3,4,5; row2: 6,7,8)
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }
}

/// The 9-cell game board.
///
/// Cells are indexed 0..9 in row-major order. The board is a plain
/// value type; move application returns a new board rather than
/// mutating in place (see [`crate::rules::apply_move`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from an explicit cell array (tests, setups)
    pub fn from_cells(cells: [Mark; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    /// Get mark at cell index
    #[inline]
    pub fn get(&self, idx: usize) -> Mark {
        self.cells[idx]
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        self.cells[idx] == Mark::Empty
    }

    /// Returns a copy with the given cell set. Does not validate;
    /// use [`crate::rules::apply_move`] for game moves.
    #[inline]
    pub fn with_mark(&self, idx: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[idx] = mark;
        next
    }

    /// Count of cells holding the given mark
    #[inline]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == mark).count()
    }

    /// True if no cell is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Mark::Empty)
    }

    /// Iterator over (index, mark) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Mark)> + '_ {
        self.cells.iter().copied().enumerate()
    }

    /// The mark whose turn it is, derived from mark counts.
    ///
    /// X moves first, so X to move when counts are equal, O to move
    /// when X leads by one. Only meaningful on boards reachable by
    /// alternating play.
    #[inline]
    pub fn to_move(&self) -> Mark {
        if self.count(Mark::X) == self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
