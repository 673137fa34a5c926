//! Main render/view function (View in TEA pattern)

use coinflip_app::{AppState, KvStore, RandomSource};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::widgets::{StatusBar, ToastStack};

/// Render the complete UI (View function in TEA).
/// Pure rendering - never modifies state.
pub fn view<S: KvStore, R: RandomSource>(frame: &mut Frame, state: &AppState<S, R>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(area);

    // Main area: the coin, centered, with the stats underneath
    let status = state.engine.status();
    let pad = chunks[0].height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::raw("")).collect();
    lines.push(Line::styled(
        status.label().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        status.tooltip().to_string(),
        Style::default().fg(Color::DarkGray),
    ));
    let coin = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(coin, chunks[0]);

    // Status bar at the bottom
    frame.render_widget(
        StatusBar::new(status, state.engine.phase(), &state.settings.commands),
        chunks[1],
    );

    // Toast overlay on top of the main area
    if !state.toasts.is_empty() {
        frame.render_widget(ToastStack::new(&state.toasts), chunks[0]);
    }
}
