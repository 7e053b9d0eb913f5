//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Letters are case-insensitive. Unrecognized keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameAction::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Rotate),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char(' ') => {
            Some(GameAction::HardDrop)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameAction::Quit),
        _ => None,
    }
}
