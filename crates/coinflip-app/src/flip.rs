//! The flip-and-settle state machine
//!
//! `Idle -> Tossing -> Settled -> Idle`, advanced by two entry points:
//! [`FlipEngine::trigger`] (user activation) and [`FlipEngine::tick`]
//! (periodic clock). All timing is deadline-based: the session object holds
//! `settle_at`, `next_frame_at`, and `idle_at` instants instead of owning
//! timers, so nothing can outlive the session that created it.
//!
//! At most one session exists at a time; its presence is the sole
//! re-entrancy guard. A trigger while not idle is a silent no-op.

use std::time::{Duration, Instant};

use coinflip_core::prelude::*;
use coinflip_core::{Outcome, StatisticsRecord};

use crate::config::TailsStyle;
use crate::random::RandomSource;
use crate::store::{KvStore, StatsStore};
use crate::toast::{Toast, ToastKind};

/// Status-bar glyph while no flip is running
pub const IDLE_LABEL: &str = "🪙";

/// Shortest possible toss
const TOSS_MIN: Duration = Duration::from_millis(1200);

/// Toss duration spread: uniform in `[1200, 2200)` ms
const TOSS_SPAN_MS: f64 = 1000.0;

/// Spinner cadence during Tossing
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// How long the result label stays up before reverting to the idle glyph
const SETTLE_DISPLAY: Duration = Duration::from_millis(2500);

/// Smooth braille spinner frames for the Tossing phase
const TOSSING_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The persistent on-screen element: a label plus a hover tooltip.
/// Created once at startup and updated for the engine's whole life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    label: String,
    tooltip: String,
}

impl StatusLine {
    pub fn new(label: impl Into<String>, tooltip: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tooltip: tooltip.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.tooltip = tooltip.into();
    }
}

/// Observable lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipPhase {
    Idle,
    Tossing,
    Settled,
}

/// Ephemeral per-flip state; exists only between trigger and return-to-idle
#[derive(Debug)]
struct FlipSession {
    started_at: Instant,
    /// When the toss resolves into an outcome
    settle_at: Instant,
    /// Next spinner frame deadline
    next_frame_at: Instant,
    frame_index: usize,
    /// Set at settle time
    outcome: Option<Outcome>,
    /// When the result display window ends and the coin goes idle again
    idle_at: Option<Instant>,
}

/// The flip state machine: lifecycle, weighted outcome draw, persisted
/// statistics. Generic over the persistence and randomness seams.
pub struct FlipEngine<S: KvStore, R: RandomSource> {
    store: StatsStore<S>,
    rng: R,
    record: StatisticsRecord,
    session: Option<FlipSession>,
    status: StatusLine,
    tails_style: TailsStyle,
}

impl<S: KvStore, R: RandomSource> FlipEngine<S, R> {
    /// Load persisted counts and present the idle coin
    pub fn new(kv: S, rng: R, tails_style: TailsStyle) -> Self {
        let store = StatsStore::new(kv);
        let record = store.load();
        info!(
            "Loaded stats: heads={} tails={} edge={}",
            record.heads, record.tails, record.edge
        );
        let status = StatusLine::new(IDLE_LABEL, record.summary());
        Self {
            store,
            rng,
            record,
            session: None,
            status,
            tails_style,
        }
    }

    pub fn phase(&self) -> FlipPhase {
        match &self.session {
            None => FlipPhase::Idle,
            Some(session) if session.outcome.is_none() => FlipPhase::Tossing,
            Some(_) => FlipPhase::Settled,
        }
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn record(&self) -> StatisticsRecord {
        self.record
    }

    /// Start a flip. No-op (returns false) unless the coin is idle.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.session.is_some() {
            debug!("Toss ignored: flip already in progress");
            return false;
        }

        // Toss duration is itself random, uniform in [1200, 2200) ms
        let duration = TOSS_MIN + Duration::from_millis((self.rng.draw() * TOSS_SPAN_MS) as u64);
        self.session = Some(FlipSession {
            started_at: now,
            settle_at: now + duration,
            next_frame_at: now + FRAME_INTERVAL,
            frame_index: 0,
            outcome: None,
            idle_at: None,
        });
        debug!("Toss started, settling in {:?}", duration);
        true
    }

    /// Advance the state machine to `now`. Returns a toast when a flip
    /// settles on this tick.
    pub fn tick(&mut self, now: Instant) -> Option<Toast> {
        match self.phase() {
            FlipPhase::Idle => None,
            FlipPhase::Tossing => {
                let settle_at = self.session.as_ref().map(|s| s.settle_at)?;
                if now >= settle_at {
                    Some(self.settle(now))
                } else {
                    self.advance_spinner(now);
                    None
                }
            }
            FlipPhase::Settled => {
                let idle_at = self.session.as_ref().and_then(|s| s.idle_at)?;
                if now >= idle_at {
                    self.session = None;
                    self.status.set_label(IDLE_LABEL);
                    debug!("Coin idle again");
                }
                None
            }
        }
    }

    /// Zero the counters and refresh the tooltip. Safe at any time: an
    /// in-flight session keeps its own deadlines and label untouched.
    pub fn reset(&mut self) {
        self.store.reset();
        self.record = StatisticsRecord::default();
        self.status.set_tooltip(self.record.summary());
        info!("Statistics reset");
    }

    fn advance_spinner(&mut self, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if now < session.next_frame_at {
            return;
        }
        let frame = TOSSING_FRAMES[session.frame_index % TOSSING_FRAMES.len()];
        self.status.set_label(format!("{} TOSSING {}", frame, frame));
        session.frame_index += 1;
        session.next_frame_at += FRAME_INTERVAL;
    }

    fn settle(&mut self, now: Instant) -> Toast {
        // One fresh draw decides the outcome; the toss-duration draw is
        // long spent and independent of this one.
        let roll = self.rng.draw();
        let outcome = Outcome::from_draw(roll);

        self.store.increment(outcome);
        self.record.record(outcome);

        self.status.set_label(result_label(outcome, self.tails_style));
        self.status.set_tooltip(self.record.summary());

        let mut airtime = Duration::ZERO;
        if let Some(session) = self.session.as_mut() {
            session.outcome = Some(outcome);
            session.idle_at = Some(now + SETTLE_DISPLAY);
            airtime = now.duration_since(session.started_at);
        }

        info!(
            "Flip settled: {} after {:?} (heads={} tails={} edge={})",
            outcome, airtime, self.record.heads, self.record.tails, self.record.edge
        );

        let result_text = match outcome {
            Outcome::Edge => "IMPOSSIBLE! Edge!".to_string(),
            other => other.to_string(),
        };
        let kind = match outcome {
            Outcome::Edge => ToastKind::Warning,
            _ => ToastKind::Success,
        };
        Toast::new("Coin Flip", format!("Result: {}", result_text), kind, now)
    }

    #[cfg(test)]
    fn frame_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.frame_index)
    }
}

/// Settled result label; the tails emoji is the one configurable cosmetic
fn result_label(outcome: Outcome, tails_style: TailsStyle) -> &'static str {
    match (outcome, tails_style) {
        (Outcome::Heads, _) => "🪙 HEADS 🪙",
        (Outcome::Tails, TailsStyle::Coin) => "🪙 TAILS 🪙",
        (Outcome::Tails, TailsStyle::Sparkle) => "✨ TAILS ✨",
        (Outcome::Edge, _) => "🤯 EDGE 🤯",
    }
}
