//! Handler module - TEA update function and key dispatch
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key-to-command mapping (the command registry)

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;

// Re-export main entry points
pub use update::{update, update_at};

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
