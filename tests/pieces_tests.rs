//! Piece catalog tests - shapes, rotation and the active piece

use blockfall::core::pieces::{mask_cells, CATALOG};
use blockfall::core::{catalog_size, get_shape, rotate_mask_cw, shape_of, ActivePiece, Mask, SimpleRng};
use blockfall::types::{PieceKind, SPAWN_X, SPAWN_Y};

fn mask_from(rows: [&str; 4]) -> Mask {
    let mut mask = [[false; 4]; 4];
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            mask[r][c] = ch == '#';
        }
    }
    mask
}

#[test]
fn test_catalog_has_seven_tetrominoes() {
    assert_eq!(catalog_size(), 7);
    assert!(shape_of(6).is_some());
    assert!(shape_of(7).is_none());

    for kind in PieceKind::ALL {
        assert_eq!(mask_cells(&get_shape(kind)).count(), 4, "{:?}", kind);
        assert_eq!(shape_of(kind.index()), Some(get_shape(kind)));
    }
}

#[test]
fn test_catalog_shapes() {
    assert_eq!(get_shape(PieceKind::I), mask_from(["####", "....", "....", "...."]));
    assert_eq!(get_shape(PieceKind::O), mask_from(["##..", "##..", "....", "...."]));
    assert_eq!(get_shape(PieceKind::T), mask_from([".#..", "###.", "....", "...."]));
    assert_eq!(get_shape(PieceKind::S), mask_from(["##..", ".##.", "....", "...."]));
    assert_eq!(get_shape(PieceKind::Z), mask_from([".##.", "##..", "....", "...."]));
    assert_eq!(get_shape(PieceKind::L), mask_from(["#...", "###.", "....", "...."]));
    assert_eq!(get_shape(PieceKind::J), mask_from(["..#.", "###.", "....", "...."]));
}

#[test]
fn test_rotate_i_is_vertical_in_last_column() {
    let rotated = rotate_mask_cw(&get_shape(PieceKind::I));
    assert_eq!(rotated, mask_from(["...#", "...#", "...#", "...#"]));
}

#[test]
fn test_rotate_t_once() {
    // new[i][j] = old[3 - j][i]
    let rotated = rotate_mask_cw(&get_shape(PieceKind::T));
    assert_eq!(rotated, mask_from(["..#.", "..##", "..#.", "...."]));
}

#[test]
fn test_four_rotations_are_identity() {
    for mask in CATALOG.iter() {
        let mut m = *mask;
        for _ in 0..4 {
            m = rotate_mask_cw(&m);
        }
        assert_eq!(&m, mask);
    }
}

#[test]
fn test_rotation_preserves_cell_count() {
    for kind in PieceKind::ALL {
        let mut m = get_shape(kind);
        for _ in 0..3 {
            m = rotate_mask_cw(&m);
            assert_eq!(mask_cells(&m).count(), 4);
        }
    }
}

#[test]
fn test_spawn_uses_origin_and_catalog_copy() {
    let piece = ActivePiece::spawn(PieceKind::Z);
    assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
    assert_eq!((piece.x, piece.y), (3, 0));
    assert_eq!(piece.mask, get_shape(PieceKind::Z));
}

#[test]
fn test_piece_cells_are_absolute() {
    let piece = ActivePiece::new_at(PieceKind::O, 4, 7);
    let cells: Vec<_> = piece.cells().collect();
    assert_eq!(cells, vec![(4, 7), (5, 7), (4, 8), (5, 8)]);
}

#[test]
fn test_spawn_random_is_seed_deterministic() {
    let mut a = SimpleRng::new(99);
    let mut b = SimpleRng::new(99);
    for _ in 0..50 {
        assert_eq!(ActivePiece::spawn_random(&mut a), ActivePiece::spawn_random(&mut b));
    }
}

#[test]
fn test_spawn_random_reaches_every_kind() {
    let mut rng = SimpleRng::new(7);
    let mut seen = [false; 7];
    for _ in 0..500 {
        seen[ActivePiece::spawn_random(&mut rng).kind.index()] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
