use crate::piece::ActivePiece;
use crate::pieces::Mask;
use crate::types::{EndReason, PieceKind, RunState, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub mask: Mask,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            mask: value.mask,
        }
    }
}

/// Read-only view of one frame, handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub state: RunState,
    pub end_reason: Option<EndReason>,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.state == RunState::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            score: 0,
            lines: 0,
            pieces: 0,
            state: RunState::Running,
            end_reason: None,
        }
    }
}
