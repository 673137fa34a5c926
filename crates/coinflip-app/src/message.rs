//! Messages driving the TEA update loop

use crate::input_key::InputKey;

/// All events the update function can process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Raw key press from the terminal
    Key(InputKey),

    /// Periodic tick from the event poll timeout; advances animations,
    /// settles due flips, and prunes expired toasts
    Tick,

    /// Start a flip if the coin is idle (click / toss command)
    Toss,

    /// Zero the persisted statistics (reset command)
    ResetStats,

    /// Exit the application
    Quit,
}
