//! Non-blocking input polling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::GameAction;

/// Return the pending action, if any, without waiting.
///
/// Reads at most one terminal event per call.
pub fn poll_action() -> Result<Option<GameAction>> {
    poll_action_timeout(Duration::ZERO)
}

/// Like [`poll_action`] but waits up to `timeout` for an event.
pub fn poll_action_timeout(timeout: Duration) -> Result<Option<GameAction>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(action_from_event(event::read()?))
}

/// Map one terminal event. Only key presses count; releases, repeats,
/// mouse and resize events yield `None`.
pub fn action_from_event(ev: Event) -> Option<GameAction> {
    match ev {
        Event::Key(key) => action_from_key(key),
        _ => None,
    }
}

fn action_from_key(key: KeyEvent) -> Option<GameAction> {
    match key.kind {
        KeyEventKind::Press => map_key(key),
        KeyEventKind::Repeat | KeyEventKind::Release => None,
    }
}
