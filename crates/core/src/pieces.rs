//! Pieces module - the static piece catalog and the 4x4 mask transform
//!
//! Every piece lives in a 4x4 bounding box so that a single rotation formula
//! works for all seven shapes. Masks are indexed `mask[row][col]`.

use crate::types::{PieceKind, MASK_SIZE, PIECE_COUNT};

/// Occupancy of a piece's 4x4 bounding box, `mask[row][col]`.
pub type Mask = [[bool; MASK_SIZE]; MASK_SIZE];

const X: bool = true;
const O: bool = false;

/// Canonical catalog, indexed by [`PieceKind::index`].
///
/// Shapes are anchored at the top-left of the box.
pub const CATALOG: [Mask; PIECE_COUNT] = [
    // I
    [[X, X, X, X], [O, O, O, O], [O, O, O, O], [O, O, O, O]],
    // O
    [[X, X, O, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
    // T
    [[O, X, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    // S
    [[X, X, O, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    // Z
    [[O, X, X, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
    // L
    [[X, O, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    // J
    [[O, O, X, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
];

/// Number of catalog entries.
pub const fn catalog_size() -> usize {
    PIECE_COUNT
}

/// Mask for catalog entry `index`, `None` past the end.
pub fn shape_of(index: usize) -> Option<Mask> {
    CATALOG.get(index).copied()
}

/// Mask for a piece kind in its default orientation.
pub fn get_shape(kind: PieceKind) -> Mask {
    CATALOG[kind.index()]
}

/// Rotate a mask 90° clockwise within its bounding box.
///
/// `new[i][j] = old[3 - j][i]`. The box does not re-anchor, so shapes drift
/// inside it; four applications are the identity.
pub fn rotate_mask_cw(mask: &Mask) -> Mask {
    let mut out = [[false; MASK_SIZE]; MASK_SIZE];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = mask[MASK_SIZE - 1 - j][i];
        }
    }
    out
}

/// Iterate the `(col, row)` offsets of occupied mask cells, row-major.
pub fn mask_cells(mask: &Mask) -> impl Iterator<Item = (i8, i8)> + '_ {
    mask.iter().enumerate().flat_map(|(row, cols)| {
        cols.iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(col, _)| (col as i8, row as i8))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_entry_has_four_cells() {
        for (i, mask) in CATALOG.iter().enumerate() {
            assert_eq!(mask_cells(mask).count(), 4, "catalog entry {}", i);
        }
    }

    #[test]
    fn rotate_i_turns_row_into_column() {
        let rotated = rotate_mask_cw(&get_shape(PieceKind::I));
        // Row 0 of the old mask lands in the last column.
        let cells: Vec<_> = mask_cells(&rotated).collect();
        assert_eq!(cells, vec![(3, 0), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn rotate_four_times_is_identity() {
        for kind in PieceKind::ALL {
            let start = get_shape(kind);
            let mut m = start;
            for _ in 0..4 {
                m = rotate_mask_cw(&m);
            }
            assert_eq!(m, start, "{:?}", kind);
        }
    }

    #[test]
    fn shape_of_out_of_range_is_none() {
        assert!(shape_of(catalog_size()).is_none());
        assert_eq!(shape_of(2), Some(get_shape(PieceKind::T)));
    }
}
