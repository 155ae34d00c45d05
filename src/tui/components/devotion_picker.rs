//! # DevotionPicker Component
//!
//! Theme selection strip for the devotion generator. Enter requests a
//! devotion for the selected theme (or lets the backend choose when none
//! is selected); `s` is "Surprise Me" and bypasses the selection with a
//! uniformly random theme.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::api::Theme;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the DevotionPicker
#[derive(Debug, Clone, PartialEq)]
pub enum DevotionEvent {
    /// Request a devotion; `None` lets the backend pick the theme.
    Generate(Option<Theme>),
}

pub struct DevotionPicker {
    cursor: usize,
    /// Currently selected theme, if any (internal state)
    pub selected: Option<Theme>,
    /// Whether this pane has focus (prop)
    pub focused: bool,
    /// Whether a request is in flight (prop) — disables generation
    pub busy: bool,
}

impl DevotionPicker {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            selected: None,
            focused: false,
            busy: false,
        }
    }

    fn highlighted(&self) -> Theme {
        Theme::ALL[self.cursor]
    }

    fn theme_line(&self) -> Line<'_> {
        let mut spans = Vec::with_capacity(Theme::ALL.len() * 2);
        for (i, theme) in Theme::ALL.iter().enumerate() {
            let is_selected = self.selected == Some(*theme);
            let mut style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            if self.focused && i == self.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {} ", theme.label()), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Default for DevotionPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DevotionPicker {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let description = self.highlighted().description();
        let hint = "Space selects  ·  Enter generates  ·  s: Surprise Me";

        let lines = vec![
            self.theme_line(),
            Line::from(Span::styled(
                description,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::bordered()
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(border_style)
                .title("Need a devotion? (10 minutes)"),
        );

        frame.render_widget(paragraph, area);
    }
}

impl EventHandler for DevotionPicker {
    type Event = DevotionEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorLeft => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(Theme::ALL.len() - 1);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = (self.cursor + 1) % Theme::ALL.len();
                None
            }
            TuiEvent::InputChar(' ') => {
                let theme = self.highlighted();
                self.selected = if self.selected == Some(theme) {
                    None
                } else {
                    Some(theme)
                };
                None
            }
            TuiEvent::InputChar('s') => {
                if self.busy {
                    return None;
                }
                // Surprise Me ignores the current selection entirely.
                Some(DevotionEvent::Generate(Some(Theme::random())))
            }
            TuiEvent::Submit => {
                if self.busy {
                    return None;
                }
                Some(DevotionEvent::Generate(self.selected))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_without_selection_defers_to_backend() {
        let mut picker = DevotionPicker::new();
        let event = picker.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(DevotionEvent::Generate(None)));
    }

    #[test]
    fn test_select_then_generate() {
        let mut picker = DevotionPicker::new();
        picker.handle_event(&TuiEvent::CursorRight); // Hope
        picker.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(picker.selected, Some(Theme::Hope));

        let event = picker.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(DevotionEvent::Generate(Some(Theme::Hope))));
    }

    #[test]
    fn test_reselecting_clears_selection() {
        let mut picker = DevotionPicker::new();
        picker.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(picker.selected, Some(Theme::Peace));
        picker.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(picker.selected, None);
    }

    #[test]
    fn test_surprise_me_emits_a_known_theme() {
        let mut picker = DevotionPicker::new();
        for _ in 0..50 {
            match picker.handle_event(&TuiEvent::InputChar('s')) {
                Some(DevotionEvent::Generate(Some(theme))) => {
                    assert!(Theme::ALL.contains(&theme));
                }
                other => panic!("expected a themed generate, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_busy_blocks_generation() {
        let mut picker = DevotionPicker::new();
        picker.busy = true;
        assert_eq!(picker.handle_event(&TuiEvent::Submit), None);
        assert_eq!(picker.handle_event(&TuiEvent::InputChar('s')), None);
    }

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut picker = DevotionPicker::new();
        picker.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(picker.highlighted(), Theme::Gratitude);
        picker.handle_event(&TuiEvent::CursorRight);
        assert_eq!(picker.highlighted(), Theme::Peace);
    }
}
