//! Terminal event polling

use coinflip_app::{InputKey, Message};
use coinflip_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        _ => None, // Unsupported keys ignored
    }
}

/// Wait up to `timeout` for a terminal event.
///
/// Returns `None` on timeout and for events that carry no meaning here;
/// the caller owns the tick schedule.
pub fn poll(timeout: Duration) -> Result<Option<Message>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}
