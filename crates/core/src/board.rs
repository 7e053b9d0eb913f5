//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of binary cells (occupied or empty).
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).

use arrayvec::ArrayVec;

use crate::piece::ActivePiece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one line-clear pass, bottom-most first.
pub type ClearedRows = ArrayVec<u8, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Row-major occupancy (y * WIDTH + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y), `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, filled: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) is in bounds and filled.
    ///
    /// Out-of-bounds reads report `false`; bounds are the rules' concern.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|&c| c)
    }

    fn row(&self, y: usize) -> &[bool] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Number of filled cells on the whole board.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Commit a landed piece's cells into the grid.
    ///
    /// The piece must already satisfy the collision predicate at its origin.
    /// Cells above the visible grid are skipped.
    pub fn merge(&mut self, piece: &ActivePiece) {
        for (x, y) in piece.cells() {
            self.set(x, y, true);
        }
    }

    /// Shift every row above `y` down by one and empty row 0.
    fn collapse_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }
        self.cells[..width].fill(false);
    }

    /// Remove full rows and compact the rows above them downward.
    ///
    /// Scans bottom to top. After collapsing a full row the same index is
    /// examined again, because the row that slid into it may be full too.
    /// Returns the removed rows as indices into the board before the pass,
    /// bottom-most first.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = BOARD_HEIGHT as usize;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.collapse_row(row);
                // Each earlier collapse moved this row down by one.
                cleared.push((row - cleared.len()) as u8);
                continue;
            }
            y -= 1;
        }

        cleared
    }

    /// Remove full rows and return how many were cleared.
    pub fn clear_full_lines(&mut self) -> u32 {
        self.clear_full_rows().len() as u32
    }

    /// Copy occupancy into a row-major 2D grid.
    pub fn write_grid(&self, out: &mut [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Fill the given rows completely. Handy for building scenarios.
    pub fn fill_rows(&mut self, rows: impl IntoIterator<Item = usize>) {
        for y in rows {
            if y < BOARD_HEIGHT as usize {
                let start = y * BOARD_WIDTH as usize;
                self.cells[start..start + BOARD_WIDTH as usize].fill(true);
            }
        }
    }

    /// Build a board from text rows, `#` for filled, anything else empty.
    ///
    /// Rows are aligned to the bottom of the board; missing rows stay empty.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = (BOARD_HEIGHT as usize).saturating_sub(rows.len());
        for (i, line) in rows.iter().take(BOARD_HEIGHT as usize).enumerate() {
            for (x, ch) in line.chars().take(BOARD_WIDTH as usize).enumerate() {
                board.set(x as i8, (offset + i) as i8, ch == '#');
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
