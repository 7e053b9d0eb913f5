//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the game snapshot is drawn into
//! a framebuffer of styled cells, which is then flushed to the terminal
//! with crossterm. Raw mode is held by a scoped [`TerminalSession`].
//!
//! Goals:
//! - Keep `core` deterministic and free of terminal I/O
//! - Make frames testable without a terminal ([`GameView`] is pure)
//! - 2 columns per board cell to keep blocks roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{final_message, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalSession};
