//! Shared types and constants for blockfall.
//!
//! Everything here is plain data with no dependencies, so the core engine,
//! the input mapper and the terminal renderer can all agree on it.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn origin**: (`BOARD_WIDTH / 2 - 2`, 0) = (3, 0)
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed real-time tick |
//! | `GRAVITY_TICKS` | 10 | Ticks per forced downward step (500ms) |
//! | `POINTS_PER_LINE` | 100 | Flat award per cleared row |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X};
//!
//! assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
//! assert_eq!(PieceKind::I.as_str(), "i");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! assert_eq!(SPAWN_X, 3);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square bounding box every piece mask lives in.
pub const MASK_SIZE: usize = 4;

/// Spawn column of a piece mask's top-left cell (horizontally centered).
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Spawn row of a piece mask's top-left cell.
pub const SPAWN_Y: i8 = 0;

/// Fixed real-time tick in milliseconds.
pub const TICK_MS: u32 = 50;

/// Number of ticks between gravity steps (10 x 50ms = 500ms).
pub const GRAVITY_TICKS: u32 = 10;

/// Score awarded per cleared line.
pub const POINTS_PER_LINE: u32 = 100;

/// Number of entries in the piece catalog.
pub const PIECE_COUNT: usize = 7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_and_scoring_defaults() {
        assert_eq!(TICK_MS, 50);
        assert_eq!(GRAVITY_TICKS, 10);
        assert_eq!(TICK_MS * GRAVITY_TICKS, 500);
        assert_eq!(POINTS_PER_LINE, 100);
    }

    #[test]
    fn spawn_is_horizontally_centered() {
        assert_eq!(SPAWN_X, 3);
        assert_eq!(SPAWN_Y, 0);
        // A 4-wide mask at the spawn column leaves equal margins.
        assert_eq!(SPAWN_X as u8, BOARD_WIDTH - (SPAWN_X as u8 + MASK_SIZE as u8));
    }

    #[test]
    fn piece_kind_index_roundtrip() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i), Some(*kind));
        }
        assert_eq!(PieceKind::from_index(PIECE_COUNT), None);
    }
}

/// The seven catalog pieces, in catalog order.
///
/// The order only matters for indexing; spawning picks uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Catalog index of this kind (0-based).
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    /// Kind at a catalog index, `None` past the end.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase name, used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }
}

/// Discrete player inputs consumed by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise inside its 4x4 box (no wall kicks)
    Rotate,
    /// Drop piece to the lowest reachable row and lock it
    HardDrop,
    /// End the game immediately
    Quit,
}

/// Game loop state machine. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Running,
    GameOver,
}

/// Why the game reached `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// A freshly spawned piece collided with the stack.
    ToppedOut,
    /// The player asked to quit.
    Quit,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::ToppedOut => "topped out",
            EndReason::Quit => "quit",
        }
    }
}
