//! Collision and movement rules.
//!
//! [`can_place_at`] is the only collision check in the crate; every move,
//! rotation, drop and spawn test goes through it.

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::pieces::rotate_mask_cw;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `piece` offset by `(dx, dy)` fits on `board`.
///
/// A cell fails if its column is outside the board, its row is at or below
/// the floor, or it lands on an occupied cell. Rows above the board (y < 0)
/// never collide.
pub fn can_place_at(board: &Board, piece: &ActivePiece, dx: i8, dy: i8) -> bool {
    piece.cells().all(|(x, y)| {
        let x = x + dx;
        let y = y + dy;
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        y < 0 || !board.is_occupied(x, y)
    })
}

/// Shift the origin unconditionally. Validate with [`can_place_at`] first.
pub fn translate(piece: &mut ActivePiece, dx: i8, dy: i8) {
    piece.x += dx;
    piece.y += dy;
}

/// Move by `(dx, dy)` if the target placement is free.
pub fn try_move(board: &Board, piece: &mut ActivePiece, dx: i8, dy: i8) -> bool {
    if can_place_at(board, piece, dx, dy) {
        translate(piece, dx, dy);
        true
    } else {
        false
    }
}

/// Rotate 90° clockwise in place, or leave the piece untouched.
///
/// No wall kicks: a rotation that would overlap or leave the board is
/// simply rejected.
pub fn try_rotate(board: &Board, piece: &mut ActivePiece) -> bool {
    let candidate = piece.with_mask(rotate_mask_cw(&piece.mask));
    if can_place_at(board, &candidate, 0, 0) {
        piece.mask = candidate.mask;
        true
    } else {
        false
    }
}

/// Move straight down until blocked. Returns rows travelled.
///
/// Afterwards `can_place_at(board, piece, 0, 1)` is false.
pub fn hard_drop(board: &Board, piece: &mut ActivePiece) -> u32 {
    let mut distance = 0;
    while can_place_at(board, piece, 0, 1) {
        translate(piece, 0, 1);
        distance += 1;
    }
    distance
}

/// Row the piece would come to rest at, without moving it.
pub fn landing_y(board: &Board, piece: &ActivePiece) -> i8 {
    let mut probe = *piece;
    hard_drop(board, &mut probe);
    probe.y
}
