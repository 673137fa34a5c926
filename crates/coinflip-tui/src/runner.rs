//! Main TUI runner - entry point and event loop

use std::time::{Duration, Instant};

use coinflip_app::config::Settings;
use coinflip_app::store::STATS_FILENAME;
use coinflip_app::{
    handler, AppState, FileKvStore, FlipEngine, KvStore, Message, OsRandom, RandomSource,
};
use coinflip_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render};

/// Tick cadence for the event loop, well inside the 80ms spinner frame
/// interval
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Run the TUI application until quit
pub async fn run(settings: Settings) -> Result<()> {
    // Restore the terminal before the default panic output so the
    // backtrace lands on a usable screen
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        default_panic(info);
    }));

    // The status element is created once here with the loaded counts and
    // lives until teardown
    let stats_path = settings.data_dir().join(STATS_FILENAME);
    info!("Stats file: {}", stats_path.display());
    let engine = FlipEngine::new(
        FileKvStore::open(stats_path),
        OsRandom,
        settings.display.tails_style,
    );
    let mut state = AppState::new(engine, settings);

    // Initialize terminal
    let mut term = ratatui::init();

    // Interrupts quit through the same channel a future producer would use,
    // so the loop below is the only place the terminal is torn down
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    spawn_quit_listener(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    // Restore terminal
    ratatui::restore();

    result
}

/// Translate SIGINT/SIGTERM (Ctrl+C on other platforms) into a quit
/// message
fn spawn_quit_listener(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let interrupted = async {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{signal, SignalKind};
                let mut sigterm = signal(SignalKind::terminate())?;
                tokio::select! {
                    result = tokio::signal::ctrl_c() => result,
                    _ = sigterm.recv() => Ok(()),
                }
            }
            #[cfg(not(unix))]
            {
                tokio::signal::ctrl_c().await
            }
        };
        match interrupted.await {
            Ok(()) => {
                info!("Interrupt received, quitting");
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => warn!("Could not listen for shutdown signals: {}", e),
        }
    });
}

/// Main event loop
fn run_loop<S: KvStore, R: RandomSource>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState<S, R>,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    let mut next_tick = Instant::now() + TICK_INTERVAL;

    while !state.should_quit() {
        // Process external messages (from the quit listener, etc.)
        drain_messages(state, &mut msg_rx);

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Wait for input only until the next tick is due, so spinner
        // frames and settle deadlines advance even under held-down keys
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if let Some(message) = event::poll(timeout)? {
            process_message(state, message);
        }
        if tick_due(Instant::now(), &mut next_tick) {
            process_message(state, Message::Tick);
        }
    }

    Ok(())
}

/// Check the tick deadline, rescheduling it when it has passed
fn tick_due(now: Instant, next_tick: &mut Instant) -> bool {
    if now >= *next_tick {
        *next_tick = now + TICK_INTERVAL;
        true
    } else {
        false
    }
}

/// Apply everything already sitting in the channel
fn drain_messages<S: KvStore, R: RandomSource>(
    state: &mut AppState<S, R>,
    msg_rx: &mut mpsc::Receiver<Message>,
) {
    while let Ok(msg) = msg_rx.try_recv() {
        process_message(state, msg);
    }
}

/// Run a message and any follow-up messages it produces
fn process_message<S: KvStore, R: RandomSource>(state: &mut AppState<S, R>, msg: Message) {
    let mut next = Some(msg);
    while let Some(msg) = next.take() {
        next = handler::update(state, msg).message;
    }
}
