//! coinflip-app - Application state and flip orchestration for Coinflip
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a [`Message`] enum, an [`AppState`], and an `update()`
//! function that advances the state. The [`FlipEngine`] inside the state
//! owns the flip lifecycle, the weighted outcome draw, and the persisted
//! statistics.

pub mod config;
pub mod flip;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod random;
pub mod state;
pub mod store;
pub mod toast;

// Re-export primary types
pub use flip::{FlipEngine, FlipPhase, StatusLine};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use random::{OsRandom, RandomSource};
pub use state::AppState;
pub use store::{FileKvStore, KvStore, StatKey, StatsStore};
pub use toast::{Toast, ToastKind};
