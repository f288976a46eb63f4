//! Board tests - grid storage, fit predicate and line clearing

use falling_blocks::core::{Board, Tetromino};
use falling_blocks::types::{Cell, PieceKind, Rotation};

fn block(kind: PieceKind) -> Cell {
    Cell::Block(kind)
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(22, 10);
    assert_eq!(board.rows(), 22);
    assert_eq!(board.cols(), 10);

    for row in 0..22 {
        for col in 0..10 {
            assert_eq!(board.get(row, col), Some(Cell::Empty), "({row}, {col}) should be empty");
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(22, 10);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(22, 0), None);
    assert_eq!(board.get(0, 10), None);
    assert!(!board.is_vacant(22, 0));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(22, 10);

    assert!(board.set(10, 5, block(PieceKind::T)));
    assert_eq!(board.get(10, 5), Some(block(PieceKind::T)));
    assert!(!board.is_vacant(10, 5));

    assert!(!board.set(30, 5, block(PieceKind::T)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_from_rows_rejects_bad_pictures() {
    assert!(Board::from_rows(&[]).is_none());
    assert!(Board::from_rows(&["....", "..."]).is_none());
    assert!(Board::from_rows(&["..X."]).is_none());

    let board = Board::from_rows(&["....", ".TT.", "OOOO"]).unwrap();
    assert_eq!((board.rows(), board.cols()), (3, 4));
    assert_eq!(board.get(1, 2), Some(block(PieceKind::T)));
    assert_eq!(board.filled_count(), 6);
}

#[test]
fn test_fits_respects_walls_floor_and_blocks() {
    let mut board = Board::new(22, 10);
    let piece = Tetromino::spawn(PieceKind::I, 10);
    assert!(board.fits(&piece));

    // The frame may hang past a wall as long as the occupied cells do not.
    let upright = Tetromino {
        kind: PieceKind::I,
        rotation: Rotation::East,
        row: 0,
        col: -2,
    };
    assert!(board.fits(&upright));
    assert!(!board.fits(&upright.shifted(0, -1)));

    // Bar in frame row 1: the lowest legal frame row is 20.
    assert!(board.fits(&piece.shifted(20, 0)));
    assert!(!board.fits(&piece.shifted(21, 0)));

    board.set(1, 5, block(PieceKind::Z));
    assert!(!board.fits(&piece));
}

#[test]
fn test_lock_piece_writes_four_cells() {
    let mut board = Board::new(22, 10);
    let piece = Tetromino::spawn(PieceKind::T, 10).shifted(19, 0);
    board.lock_piece(&piece);

    assert_eq!(board.filled_count(), 4);
    for (row, col) in piece.cells() {
        assert_eq!(board.get(row, col), Some(block(PieceKind::T)));
    }
}

#[test]
fn test_clear_full_rows_shifts_rows_down() {
    let mut board = Board::from_rows(&[
        "....", //
        "J...", //
        "LLLL", //
        ".S..", //
        "IIII", //
    ])
    .unwrap();

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.get(4, 1), Some(block(PieceKind::S)));
    assert_eq!(board.get(3, 0), Some(block(PieceKind::J)));
    assert_eq!(board.get(2, 0), Some(Cell::Empty));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_adjacent_full_rows() {
    let mut board = Board::from_rows(&["T...", "OOOO", "OOOO", "OOOO", "OOOO"]).unwrap();

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.get(4, 0), Some(block(PieceKind::T)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_full_rows_is_noop_without_full_rows() {
    let mut board = Board::from_rows(&["....", "ZZZ.", ".ZZZ"]).unwrap();
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_top_occupied_checks_only_given_depth() {
    let mut board = Board::new(22, 10);
    board.set(2, 0, block(PieceKind::L));
    assert!(!board.is_top_occupied(2));

    board.set(1, 9, block(PieceKind::L));
    assert!(board.is_top_occupied(2));

    board.clear();
    assert_eq!(board.filled_count(), 0);
}
