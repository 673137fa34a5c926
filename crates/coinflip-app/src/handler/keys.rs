//! Key-to-command mapping
//!
//! This is the command registry: each exposed command is a key binding.
//! Bindings hidden by the settings are simply not handled.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::random::RandomSource;
use crate::state::AppState;
use crate::store::KvStore;

/// Map a key press to a follow-up message, honoring command visibility
pub fn handle_key<S: KvStore, R: RandomSource>(
    state: &AppState<S, R>,
    key: InputKey,
) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('f') | InputKey::Enter if state.settings.commands.toss => {
            Some(Message::Toss)
        }
        InputKey::Char('r') if state.settings.commands.reset => Some(Message::ResetStats),
        _ => None,
    }
}
