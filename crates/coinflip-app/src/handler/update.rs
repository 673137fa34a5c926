//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::random::RandomSource;
use crate::state::AppState;
use crate::store::KvStore;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state.
/// Returns an optional follow-up message.
pub fn update<S: KvStore, R: RandomSource>(
    state: &mut AppState<S, R>,
    message: Message,
) -> UpdateResult {
    update_at(state, message, Instant::now())
}

/// `update` with an explicit clock, the testable entry point
pub fn update_at<S: KvStore, R: RandomSource>(
    state: &mut AppState<S, R>,
    message: Message,
    now: Instant,
) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.advance(now);
            UpdateResult::none()
        }

        Message::Toss => {
            // A suppressed trigger while not idle is a silent no-op
            state.engine.trigger(now);
            UpdateResult::none()
        }

        Message::ResetStats => {
            state.engine.reset();
            UpdateResult::none()
        }
    }
}
