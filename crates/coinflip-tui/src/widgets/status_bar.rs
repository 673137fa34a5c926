//! Status bar widget
//!
//! The persistent on-screen element: the coin label, the stats tooltip,
//! and the key hints for whichever commands are exposed.

use coinflip_app::config::CommandSettings;
use coinflip_app::{FlipPhase, StatusLine};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget showing the coin, stats, and key hints
pub struct StatusBar<'a> {
    status: &'a StatusLine,
    phase: FlipPhase,
    commands: &'a CommandSettings,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: &'a StatusLine, phase: FlipPhase, commands: &'a CommandSettings) -> Self {
        Self {
            status,
            phase,
            commands,
        }
    }

    /// The coin label, styled by lifecycle phase
    fn label_span(&self) -> Span<'static> {
        let style = match self.phase {
            FlipPhase::Idle => Style::default().fg(Color::White),
            FlipPhase::Tossing => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            FlipPhase::Settled => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        };
        Span::styled(self.status.label().to_string(), style)
    }

    /// Key hints for the exposed commands
    fn hint_spans(&self) -> Vec<Span<'static>> {
        let mut hints = Vec::new();
        if self.commands.toss {
            hints.push("f toss");
        }
        if self.commands.reset {
            hints.push("r reset");
        }
        hints.push("q quit");

        let mut spans = Vec::new();
        for (i, hint) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(
                hint.to_string(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans
    }

    /// Build all segments with separators
    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));

        let mut segments = Vec::new();
        segments.push(Span::raw(" "));
        segments.push(self.label_span());
        segments.push(separator.clone());
        segments.push(Span::styled(
            self.status.tooltip().to_string(),
            Style::default().fg(Color::Gray),
        ));
        segments.push(separator);
        segments.extend(self.hint_spans());
        segments.push(Span::raw(" "));
        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Top border as a separator from the main area
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(self.build_segments());
        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_bar(status: &StatusLine, phase: FlipPhase, commands: &CommandSettings) -> String {
        let backend = TestBackend::new(80, 2);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| {
                frame.render_widget(StatusBar::new(status, phase, commands), frame.area())
            })
            .expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_label_and_tooltip() {
        let status = StatusLine::new("🪙", "Heads: 0 | Tails: 0");
        let text = render_bar(&status, FlipPhase::Idle, &CommandSettings::default());
        assert!(text.contains("🪙"));
        assert!(text.contains("Heads: 0 | Tails: 0"));
    }

    #[test]
    fn test_hints_follow_command_visibility() {
        let status = StatusLine::new("🪙", "Heads: 0 | Tails: 0");

        let all = render_bar(&status, FlipPhase::Idle, &CommandSettings::default());
        assert!(all.contains("f toss"));
        assert!(all.contains("r reset"));
        assert!(all.contains("q quit"));

        let hidden = CommandSettings {
            toss: false,
            reset: false,
        };
        let text = render_bar(&status, FlipPhase::Idle, &hidden);
        assert!(!text.contains("f toss"));
        assert!(!text.contains("r reset"));
        assert!(text.contains("q quit"));
    }
}
