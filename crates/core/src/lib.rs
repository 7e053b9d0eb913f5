//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the grid, the piece catalog, the movement rules,
//! line clearing and the tick-driven state machine. It performs no terminal
//! I/O: the caller feeds it discrete actions and ticks, and reads back a
//! [`GameSnapshot`] to draw.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 binary grid, merge and line clearing
//! - [`pieces`]: the 7-entry catalog of 4x4 masks and the rotation transform
//! - [`piece`]: the active piece (mask copy + origin)
//! - [`rules`]: collision predicate and the moves built on it
//! - [`game_state`]: the loop state machine, scoring and game over
//! - [`rng`]: seeded LCG for uniform piece picks
//! - [`config`]: tick, gravity and scoring knobs
//!
//! # Rules
//!
//! - Pieces spawn at (3, 0) and are picked uniformly at random.
//! - Rotation is a fixed 90° clockwise turn of the 4x4 box; blocked
//!   rotations are rejected (no wall kicks).
//! - Gravity moves the piece down once every 10 ticks (500ms at 50ms/tick).
//! - Every cleared line is worth a flat 100 points.
//! - A spawn that collides ends the game.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Hard drop locks immediately and the next piece is already falling.
//! assert_eq!(game.pieces(), 2);
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod rules;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use config::GameConfig;
pub use game_state::GameState;
pub use piece::ActivePiece;
pub use pieces::{catalog_size, get_shape, rotate_mask_cw, shape_of, Mask};
pub use rng::SimpleRng;
pub use rules::{can_place_at, hard_drop, translate, try_move, try_rotate};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
