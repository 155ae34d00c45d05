//! # FeelingInput Component
//!
//! Collects free text and/or toggled mood tags, and composes them into a
//! single guidance request.
//!
//! ## Responsibilities
//!
//! - Capture free-text input (append/backspace editing, paste)
//! - Toggle mood tags (Space on the highlighted chip; toggling a selected
//!   chip removes it)
//! - Compose the submission text and clear itself once it is emitted
//!
//! ## State Management
//!
//! The buffer, tag selection, and chip cursor are internal state. `focused`
//! and `busy` are props synced from the controller each frame; while busy,
//! submission is a no-op and the component keeps its contents.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// The fixed quick-select mood tags.
pub const MOOD_TAGS: [&str; 15] = [
    "anxious",
    "lonely",
    "overwhelmed",
    "grateful",
    "peaceful",
    "hopeful",
    "stressed",
    "joyful",
    "sad",
    "angry",
    "confused",
    "excited",
    "tired",
    "inspired",
    "worried",
];

/// Composes the text sent to the backend from free text and selected tags.
///
/// With no tags the trimmed text is sent as-is; with tags, the comma-joined
/// tag list is appended after a single space and the result is trimmed, so
/// an empty text yields just the joined tags.
pub fn compose_feeling_text(text: &str, tags: &[&str]) -> String {
    let trimmed = text.trim();
    if tags.is_empty() {
        trimmed.to_string()
    } else {
        format!("{} {}", trimmed, tags.join(", "))
            .trim()
            .to_string()
    }
}

/// High-level events emitted by the FeelingInput
#[derive(Debug, Clone, PartialEq)]
pub enum FeelingEvent {
    /// User submitted; carries the fully composed text.
    Submit(String),
}

/// Which row of the pane has the inner focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InnerRow {
    Text,
    Tags,
}

pub struct FeelingInput {
    /// Free-text buffer (internal state)
    pub buffer: String,
    /// Selected tags in toggle order (internal state)
    selected: Vec<&'static str>,
    row: InnerRow,
    tag_cursor: usize,
    /// Whether this pane has focus (prop)
    pub focused: bool,
    /// Whether a request is in flight (prop) — disables submission
    pub busy: bool,
}

impl FeelingInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            selected: Vec::new(),
            row: InnerRow::Text,
            tag_cursor: 0,
            focused: true,
            busy: false,
        }
    }

    pub fn selected_tags(&self) -> &[&'static str] {
        &self.selected
    }

    /// Submission is allowed with non-empty trimmed text OR at least one tag.
    pub fn can_submit(&self) -> bool {
        !self.buffer.trim().is_empty() || !self.selected.is_empty()
    }

    fn toggle_tag(&mut self, tag: &'static str) {
        if let Some(pos) = self.selected.iter().position(|t| *t == tag) {
            self.selected.remove(pos);
        } else {
            self.selected.push(tag);
        }
    }

    fn tag_line(&self) -> Line<'_> {
        let mut spans = Vec::with_capacity(MOOD_TAGS.len() * 2);
        for (i, tag) in MOOD_TAGS.iter().enumerate() {
            let is_selected = self.selected.contains(tag);
            let mut style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            if self.focused && self.row == InnerRow::Tags && i == self.tag_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {tag} "), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Default for FeelingInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FeelingInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let text_style = if self.row == InnerRow::Text && self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text_line = if self.buffer.is_empty() {
            Line::from(Span::styled(
                "Tell me how you're feeling...",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::styled(self.buffer.as_str(), text_style))
        };

        let hint = format!(
            "{} selected  ·  Space toggles a feeling  ·  Enter submits",
            self.selected.len()
        );

        let lines = vec![
            text_line,
            Line::raw(""),
            self.tag_line(),
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_type(ratatui::widgets::BorderType::Rounded)
                    .border_style(border_style)
                    .title("How are you feeling today?"),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }
}

impl EventHandler for FeelingInput {
    type Event = FeelingEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(' ') if self.row == InnerRow::Tags => {
                self.toggle_tag(MOOD_TAGS[self.tag_cursor]);
                None
            }
            TuiEvent::InputChar(c) => {
                self.row = InnerRow::Text;
                self.buffer.push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                self.row = InnerRow::Text;
                self.buffer.push_str(text);
                None
            }
            TuiEvent::Backspace if self.row == InnerRow::Text => {
                self.buffer.pop();
                None
            }
            TuiEvent::CursorDown => {
                self.row = InnerRow::Tags;
                None
            }
            TuiEvent::CursorUp => {
                self.row = InnerRow::Text;
                None
            }
            TuiEvent::CursorLeft if self.row == InnerRow::Tags => {
                self.tag_cursor = self.tag_cursor.checked_sub(1).unwrap_or(MOOD_TAGS.len() - 1);
                None
            }
            TuiEvent::CursorRight if self.row == InnerRow::Tags => {
                self.tag_cursor = (self.tag_cursor + 1) % MOOD_TAGS.len();
                None
            }
            TuiEvent::Submit => {
                if self.busy || !self.can_submit() {
                    return None;
                }
                let text = compose_feeling_text(&self.buffer, &self.selected);
                self.buffer.clear();
                self.selected.clear();
                Some(FeelingEvent::Submit(text))
            }
            _ => None,
        }
    }
}
