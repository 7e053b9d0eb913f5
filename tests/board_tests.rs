//! Board tests - grid accessors, merge and line clearing

use blockfall::core::{ActivePiece, Board};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn partial_row(board: &mut Board, y: i8) {
    // Every column but the last.
    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, y, true);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(false), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.is_occupied(-1, 0));
    assert!(board.is_out_of_bounds(0, BOARD_HEIGHT as i8));
}

#[test]
fn test_board_set_and_clear() {
    let mut board = Board::new();
    assert!(board.set(5, 10, true));
    assert!(board.is_occupied(5, 10));
    assert!(!board.set(-1, 0, true));

    board.clear();
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_merge_sets_exactly_the_mask_cells() {
    let mut board = Board::new();
    let piece = ActivePiece::new_at(PieceKind::J, 4, 10);
    board.merge(&piece);

    // J: ..#. / ###.
    assert!(board.is_occupied(6, 10));
    assert!(board.is_occupied(4, 11));
    assert!(board.is_occupied(5, 11));
    assert!(board.is_occupied(6, 11));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_clear_with_no_full_rows_is_a_no_op() {
    let mut board = Board::new();
    partial_row(&mut board, 19);
    partial_row(&mut board, 12);
    board.set(3, 4, true);
    let before = board.clone();

    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_rows_five_and_seven() {
    let mut board = Board::new();
    // Distinct markers on the partial rows so shifts are observable.
    for y in 0..BOARD_HEIGHT as i8 {
        if y == 5 || y == 7 {
            continue;
        }
        board.set(y % BOARD_WIDTH as i8, y, true);
    }
    board.fill_rows([5, 7]);
    let before = board.clone();

    assert_eq!(board.clear_full_lines(), 2);

    // Top two rows are empty.
    for y in 0..2 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(!board.is_occupied(x, y));
        }
    }
    // Rows 0..5 moved down by two, row 6 moved down by one, rows below 7 untouched.
    for y in 0..5i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y + 2), before.get(x, y), "row {}", y);
        }
    }
    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(board.get(x, 7), before.get(x, 6));
    }
    for y in 8..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), before.get(x, y), "row {}", y);
        }
    }
}

#[test]
fn test_clear_stacked_full_rows_in_one_pass() {
    // Four adjacent full rows: the scan must re-check the same index after
    // each collapse instead of skipping upward.
    let mut board = Board::new();
    board.fill_rows(16..20);
    partial_row(&mut board, 15);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 18, 17, 16]);
    assert!(!board.is_row_full(19));
    assert!(board.is_occupied(0, 19));
    assert_eq!(board.filled_count(), BOARD_WIDTH as usize - 1);
}

#[test]
fn test_clear_alternating_full_rows() {
    let mut board = Board::from_rows(&[
        "##########",
        "#.#.#.#.#.",
        "##########",
        ".#.#.#.#.#",
        "##########",
    ]);

    assert_eq!(board.clear_full_lines(), 3);
    assert_eq!(board.filled_count(), 10);
    // Partial rows keep their order, now sitting on the floor.
    assert!(board.is_occupied(0, 18));
    assert!(!board.is_occupied(1, 18));
    assert!(!board.is_occupied(0, 19));
    assert!(board.is_occupied(1, 19));
}

#[test]
fn test_write_grid_matches_cells() {
    let mut board = Board::new();
    board.set(2, 3, true);
    let mut grid = [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_grid(&mut grid);
    assert!(grid[3][2]);
    assert_eq!(grid.iter().flatten().filter(|&&c| c).count(), 1);
}
