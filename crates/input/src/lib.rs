//! Terminal input module.
//!
//! Maps `crossterm` key events into [`types::GameAction`] and exposes a
//! non-blocking poll so the game loop never stalls waiting for a key.
//! Raw-mode setup lives with the terminal session in `blockfall-term`.

pub mod map;
pub mod poll;

pub use blockfall_types as types;

pub use map::map_key;
pub use poll::{action_from_event, poll_action, poll_action_timeout};
