use std::time::{Duration, Instant};

use crate::config::{Settings, TailsStyle};
use crate::flip::{FlipEngine, FlipPhase};
use crate::handler::update::update_at;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::random::ScriptedRandom;
use crate::state::AppState;
use crate::store::MemoryKvStore;

type TestState = AppState<MemoryKvStore, ScriptedRandom>;

fn state(draws: &[f64]) -> TestState {
    let engine = FlipEngine::new(
        MemoryKvStore::default(),
        ScriptedRandom::new(draws),
        TailsStyle::Coin,
    );
    AppState::new(engine, Settings::default())
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_quit_message_sets_flag() {
    let mut state = state(&[]);
    assert!(!state.should_quit());
    update_at(&mut state, Message::Quit, Instant::now());
    assert!(state.should_quit());
}

#[test]
fn test_quit_keys_map_to_quit() {
    for key in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
        let mut state = state(&[]);
        let result = update_at(&mut state, Message::Key(key.clone()), Instant::now());
        assert_eq!(result.message, Some(Message::Quit), "key {:?}", key);
    }
}

#[test]
fn test_toss_key_starts_flip() {
    let mut state = state(&[0.0, 0.2]);
    let now = Instant::now();

    let result = update_at(&mut state, Message::Key(InputKey::Char('f')), now);
    assert_eq!(result.message, Some(Message::Toss));
    update_at(&mut state, Message::Toss, now);
    assert_eq!(state.engine.phase(), FlipPhase::Tossing);
}

#[test]
fn test_enter_also_tosses() {
    let mut state = state(&[]);
    let result = update_at(&mut state, Message::Key(InputKey::Enter), Instant::now());
    assert_eq!(result.message, Some(Message::Toss));
}

#[test]
fn test_hidden_commands_are_not_bound() {
    let mut state = state(&[]);
    state.settings.commands.toss = false;
    state.settings.commands.reset = false;

    let now = Instant::now();
    let result = update_at(&mut state, Message::Key(InputKey::Char('f')), now);
    assert_eq!(result.message, None);
    let result = update_at(&mut state, Message::Key(InputKey::Char('r')), now);
    assert_eq!(result.message, None);
    // Quit is always available
    let result = update_at(&mut state, Message::Key(InputKey::Char('q')), now);
    assert_eq!(result.message, Some(Message::Quit));
}

#[test]
fn test_tick_settles_flip_and_pushes_toast() {
    let mut state = state(&[0.0, 0.2]);
    let now = Instant::now();
    update_at(&mut state, Message::Toss, now);

    update_at(&mut state, Message::Tick, now + ms(1200));
    assert_eq!(state.engine.phase(), FlipPhase::Settled);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "Result: Heads");
}

#[test]
fn test_toast_pruned_after_ttl() {
    let mut state = state(&[0.0, 0.2]);
    let now = Instant::now();
    update_at(&mut state, Message::Toss, now);
    update_at(&mut state, Message::Tick, now + ms(1200));
    assert_eq!(state.toasts.len(), 1);

    // Toast TTL is 3000 ms from settling
    update_at(&mut state, Message::Tick, now + ms(4200));
    assert!(state.toasts.is_empty());
}

#[test]
fn test_double_toss_does_not_double_count() {
    let mut state = state(&[0.0, 0.2]);
    let now = Instant::now();
    update_at(&mut state, Message::Toss, now);
    update_at(&mut state, Message::Toss, now + ms(100));

    update_at(&mut state, Message::Tick, now + ms(1200));
    update_at(&mut state, Message::Tick, now + ms(2200));
    assert_eq!(state.engine.record().total(), 1);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn test_reset_message_zeroes_stats() {
    let mut state = state(&[0.0, 0.2]);
    let now = Instant::now();
    update_at(&mut state, Message::Toss, now);
    update_at(&mut state, Message::Tick, now + ms(1200));
    assert_eq!(state.engine.record().total(), 1);

    update_at(&mut state, Message::ResetStats, now + ms(1300));
    assert_eq!(state.engine.record().total(), 0);
    assert_eq!(state.engine.status().tooltip(), "Heads: 0 | Tails: 0");
}
