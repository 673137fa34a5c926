//! Toast notification overlay
//!
//! Renders active toasts as small bordered boxes in the top-right corner,
//! newest at the top. Expiry is the app state's job; this widget just shows
//! whatever it is given.

use coinflip_app::{Toast, ToastKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const TOAST_HEIGHT: u16 = 3;
const MAX_TOAST_WIDTH: u16 = 40;

/// Overlay widget for the active toasts
pub struct ToastStack<'a> {
    toasts: &'a [Toast],
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: &'a [Toast]) -> Self {
        Self { toasts }
    }

    fn style_for(kind: ToastKind) -> Style {
        match kind {
            ToastKind::Success => Style::default().fg(Color::Green),
            ToastKind::Warning => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Box wide enough for title and message, clamped to the max
    fn toast_width(toast: &Toast) -> u16 {
        let content = toast.message.width().max(toast.title.width()) as u16;
        (content + 4).min(MAX_TOAST_WIDTH)
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for toast in self.toasts {
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }
            let width = Self::toast_width(toast).min(area.width);
            let x = area.x + area.width - width;
            let box_area = Rect::new(x, y, width, TOAST_HEIGHT);

            let style = Self::style_for(toast.kind);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(toast.title.clone());

            Clear.render(box_area, buf);
            let inner = block.inner(box_area);
            block.render(box_area, buf);
            Paragraph::new(toast.message.clone())
                .style(style)
                .render(inner, buf);

            y += TOAST_HEIGHT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn render_toasts(toasts: &[Toast]) -> String {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| frame.render_widget(ToastStack::new(toasts), frame.area()))
            .expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_title_and_message() {
        let toasts = vec![Toast::new(
            "Coin Flip",
            "Result: Heads",
            ToastKind::Success,
            Instant::now(),
        )];
        let text = render_toasts(&toasts);
        assert!(text.contains("Coin Flip"));
        assert!(text.contains("Result: Heads"));
    }

    #[test]
    fn test_stacks_multiple_toasts() {
        let now = Instant::now();
        let toasts = vec![
            Toast::new("Coin Flip", "Result: Heads", ToastKind::Success, now),
            Toast::new("Coin Flip", "Result: IMPOSSIBLE! Edge!", ToastKind::Warning, now),
        ];
        let text = render_toasts(&toasts);
        assert!(text.contains("Result: Heads"));
        assert!(text.contains("Result: IMPOSSIBLE! Edge!"));
    }

    #[test]
    fn test_empty_stack_renders_nothing() {
        let text = render_toasts(&[]);
        assert!(!text.contains("Coin Flip"));
    }
}
