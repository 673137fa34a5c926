//! Application state

use std::time::Instant;

use crate::config::Settings;
use crate::flip::FlipEngine;
use crate::random::{OsRandom, RandomSource};
use crate::store::{FileKvStore, KvStore};
use crate::toast::Toast;

/// Top-level application state, owned by the run loop and mutated only
/// through `update()`. Generic over the engine's persistence and randomness
/// seams so tests can drive it deterministically.
pub struct AppState<S: KvStore, R: RandomSource> {
    pub engine: FlipEngine<S, R>,
    pub settings: Settings,
    pub toasts: Vec<Toast>,
    should_quit: bool,
}

/// The production state: file-backed counters, OS randomness
pub type DefaultAppState = AppState<FileKvStore, OsRandom>;

impl<S: KvStore, R: RandomSource> AppState<S, R> {
    pub fn new(engine: FlipEngine<S, R>, settings: Settings) -> Self {
        Self {
            engine,
            settings,
            toasts: Vec::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance time-driven state: the flip session and toast expiry
    pub fn advance(&mut self, now: Instant) {
        if let Some(toast) = self.engine.tick(now) {
            self.toasts.push(toast);
        }
        self.toasts.retain(|t| !t.is_expired(now));
    }
}
