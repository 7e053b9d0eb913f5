//! The active (falling) piece.

use crate::pieces::{get_shape, mask_cells, Mask};
use crate::rng::SimpleRng;
use crate::types::{PieceKind, PIECE_COUNT, SPAWN_X, SPAWN_Y};

/// Currently falling piece: a mutable copy of a catalog mask plus its origin.
///
/// `(x, y)` is the grid coordinate of the mask's top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub mask: Mask,
}

impl ActivePiece {
    /// Create a piece of `kind` at the spawn origin in its default orientation.
    ///
    /// Does not check collision; the caller decides whether the game is over.
    pub fn spawn(kind: PieceKind) -> Self {
        Self::new_at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Spawn a uniformly random catalog piece.
    pub fn spawn_random(rng: &mut SimpleRng) -> Self {
        let index = rng.next_range(PIECE_COUNT as u32) as usize;
        // next_range is always < PIECE_COUNT.
        let kind = PieceKind::from_index(index).unwrap_or(PieceKind::I);
        Self::spawn(kind)
    }

    /// Create a piece at an arbitrary origin.
    pub fn new_at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            x,
            y,
            mask: get_shape(kind),
        }
    }

    /// Same piece with a different mask, origin unchanged.
    pub fn with_mask(&self, mask: Mask) -> Self {
        Self { mask, ..*self }
    }

    /// Absolute grid coordinates of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        mask_cells(&self.mask).map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_uses_catalog_default_at_spawn_origin() {
        let p = ActivePiece::spawn(PieceKind::O);
        assert_eq!((p.x, p.y), (3, 0));
        let cells: Vec<_> = p.cells().collect();
        assert_eq!(cells, vec![(3, 0), (4, 0), (3, 1), (4, 1)]);
    }

    #[test]
    fn spawn_random_is_deterministic_per_seed() {
        let mut a = SimpleRng::new(99);
        let mut b = SimpleRng::new(99);
        for _ in 0..20 {
            assert_eq!(ActivePiece::spawn_random(&mut a), ActivePiece::spawn_random(&mut b));
        }
    }

    #[test]
    fn spawn_random_reaches_every_kind() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; PIECE_COUNT];
        for _ in 0..500 {
            seen[ActivePiece::spawn_random(&mut rng).kind.index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "seen = {:?}", seen);
    }
}
