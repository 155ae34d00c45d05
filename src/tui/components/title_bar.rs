//! # TitleBar Component
//!
//! Top status bar: application name, backend origin, current status, and
//! the loading spinner.
//!
//! Purely presentational — all fields are props synced from `App` each
//! frame; it holds no state of its own.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub struct TitleBar {
    /// Backend origin shown for orientation (prop)
    pub base_url: String,
    /// Status bar text (prop)
    pub status_message: String,
    /// Whether a request is in flight (prop)
    pub is_loading: bool,
    /// Spinner animation frame, advanced by the event loop (prop)
    pub spinner_frame: usize,
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Abide", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" ({})", self.base_url),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if self.is_loading {
            let glyph = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            spans.push(Span::styled(
                format!("  {glyph} "),
                Style::default().fg(Color::Yellow),
            ));
        }
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!("  {}", self.status_message),
                Style::default().fg(Color::Gray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
