use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(4);
    assert_eq!(pos2.row, 1);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 3));
    assert!(!Pos::is_valid(3, 0));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 2).to_index(), 2);
    assert_eq!(Pos::new(2, 0).to_index(), 6);
    assert_eq!(Pos::new(2, 2).to_index(), 8);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for idx in 0..TOTAL_CELLS {
        assert!(board.is_empty(idx));
    }
    assert_eq!(board.count(Mark::Empty), 9);
    assert!(!board.is_full());
}

#[test]
fn test_with_mark_leaves_original_untouched() {
    let board = Board::new();
    let next = board.with_mark(4, Mark::X);

    assert!(board.is_empty(4));
    assert_eq!(next.get(4), Mark::X);
    assert_eq!(next.count(Mark::X), 1);
}

#[test]
fn test_to_move_alternates_with_counts() {
    let board = Board::new();
    assert_eq!(board.to_move(), Mark::X);

    let board = board.with_mark(0, Mark::X);
    assert_eq!(board.to_move(), Mark::O);

    let board = board.with_mark(4, Mark::O);
    assert_eq!(board.to_move(), Mark::X);
}
