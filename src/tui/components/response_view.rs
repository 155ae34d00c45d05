//! # ResponseView Component
//!
//! Renders the current backend response: either a guidance response
//! (topic, verses, reflection, prayer) or a devotion plan (prayers,
//! scripture readings, action steps, optional video). When the backend
//! flags a crisis, rendering is delegated to the crisis banner instead —
//! that path supersedes both modes.
//!
//! ## Copy affordances
//!
//! Digits `1..=9` copy individual verses, `r` the reflection, `p` the
//! prayer (the opening prayer in devotion mode, where `o`/`c` also copy
//! the opening/closing prayers), `d` the whole devotion plan as text,
//! `s`/`l` share (terminal fallback: copy the app address), `b` bookmarks.
//! A successful copy flips a per-key "copied" indicator for two seconds; a
//! failed copy never sets it.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::{ApiResponse, DevotionResponse, GuidanceResponse, format_duration};
use crate::tui::components::{crisis_banner, verse_block};
use crate::tui::event::TuiEvent;

/// How long the "copied" indicator stays lit after a successful copy.
pub const COPIED_TTL: Duration = Duration::from_secs(2);

/// Content-type tag identifying what was copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKey {
    /// Nth verse (guidance) or scripture (devotion), zero-based.
    Verse(usize),
    Reflection,
    /// Guidance prayer, or the opening prayer of a devotion.
    Prayer,
    ClosingPrayer,
    /// The whole devotion plan as text.
    Devotion,
    /// The shareable app address.
    Link,
}

/// High-level events emitted by the response pane.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEvent {
    /// Request to place `text` on the clipboard, tagged with `key`.
    Copy { key: CopyKey, text: String },
    /// Share the current guidance (falls back to copying the app link).
    Share,
    Bookmark,
}

/// Persistent presentation state for the response pane.
pub struct ResponseViewState {
    pub scroll_state: ScrollViewState,
    copied: Option<(CopyKey, Instant)>,
    /// Whether this pane has focus (prop)
    pub focused: bool,
}

impl ResponseViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            copied: None,
            focused: false,
        }
    }

    /// Records a successful copy, lighting the indicator for `key`.
    pub fn mark_copied(&mut self, key: CopyKey) {
        self.mark_copied_at(key, Instant::now());
    }

    fn mark_copied_at(&mut self, key: CopyKey, at: Instant) {
        self.copied = Some((key, at));
    }

    /// The key whose indicator is currently lit, if any.
    pub fn copied_key(&self, now: Instant) -> Option<CopyKey> {
        match self.copied {
            Some((key, at)) if now.duration_since(at) < COPIED_TTL => Some(key),
            _ => None,
        }
    }

    /// Drops an expired indicator. Returns true when one was cleared, so
    /// the event loop knows a redraw is due.
    pub fn expire_copied(&mut self, now: Instant) -> bool {
        if let Some((_, at)) = self.copied
            && now.duration_since(at) >= COPIED_TTL
        {
            self.copied = None;
            return true;
        }
        false
    }

    /// Translates a terminal event into a response-pane event, given the
    /// response currently on screen.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        response: &ApiResponse,
    ) -> Option<ResponseEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::CursorDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            TuiEvent::InputChar('s' | 'l') => Some(ResponseEvent::Share),
            TuiEvent::InputChar('b') => Some(ResponseEvent::Bookmark),
            TuiEvent::InputChar(c) => {
                // Crisis content is intentionally non-copyable.
                if response.crisis().is_some() {
                    return None;
                }
                match (response, c) {
                    (ApiResponse::Guidance(g), '1'..='9') => {
                        let index = c.to_digit(10)? as usize - 1;
                        let verse = g.verses.get(index)?;
                        Some(ResponseEvent::Copy {
                            key: CopyKey::Verse(index),
                            text: verse.text.clone(),
                        })
                    }
                    (ApiResponse::Guidance(g), 'r') => Some(ResponseEvent::Copy {
                        key: CopyKey::Reflection,
                        text: g.reflection.clone(),
                    }),
                    (ApiResponse::Guidance(g), 'p') => Some(ResponseEvent::Copy {
                        key: CopyKey::Prayer,
                        text: g.prayer.clone(),
                    }),
                    (ApiResponse::Devotion(d), '1'..='9') => {
                        let index = c.to_digit(10)? as usize - 1;
                        let verse = d.plan.scriptures.get(index)?;
                        Some(ResponseEvent::Copy {
                            key: CopyKey::Verse(index),
                            text: verse.text.clone(),
                        })
                    }
                    (ApiResponse::Devotion(d), 'p' | 'o') => Some(ResponseEvent::Copy {
                        key: CopyKey::Prayer,
                        text: d.plan.opening_prayer.clone(),
                    }),
                    (ApiResponse::Devotion(d), 'c') => Some(ResponseEvent::Copy {
                        key: CopyKey::ClosingPrayer,
                        text: d.plan.closing_prayer.clone(),
                    }),
                    (ApiResponse::Devotion(d), 'd') => Some(ResponseEvent::Copy {
                        key: CopyKey::Devotion,
                        text: plan_text(d),
                    }),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl Default for ResponseViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-text rendition of a devotion plan, used by "copy plan".
pub fn plan_text(devotion: &DevotionResponse) -> String {
    let plan = &devotion.plan;
    let mut out = format!("10-Minute Devotion — {}\n\n", devotion.theme);
    out.push_str(&format!("Opening Prayer\n{}\n\n", plan.opening_prayer));
    out.push_str("Scripture Reading\n");
    for verse in &plan.scriptures {
        out.push_str(&format!(
            "“{}” — {} ({})\n",
            verse.text, verse.reference, verse.translation
        ));
    }
    out.push_str(&format!("\nReflection\n{}\n\n", plan.reflection));
    out.push_str("Action Steps\n");
    for (i, step) in plan.action_steps.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, step));
    }
    out.push_str(&format!("\nClosing Prayer\n{}\n", plan.closing_prayer));
    out
}

// ============================================================================
// Rendering
// ============================================================================

/// Renders the response area: placeholder, crisis banner, guidance, or
/// devotion, inside a vertical scroll view.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    response: Option<&ApiResponse>,
    state: &mut ResponseViewState,
) {
    let Some(response) = response else {
        let placeholder = Paragraph::new(
            "Share how you're feeling, or generate a devotion.\n\
             Your guidance will appear here.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .block(bordered("Guidance", state.focused))
        .wrap(Wrap { trim: true });
        frame.render_widget(placeholder, area);
        return;
    };

    let copied = state.copied_key(Instant::now());
    let sections = match response {
        _ if response.crisis().is_some() => {
            // Flag wins over everything, including devotion display mode.
            let crisis = response.crisis().expect("checked above");
            crisis_banner::sections(&crisis)
        }
        ApiResponse::Guidance(g) => guidance_sections(g, copied),
        ApiResponse::Devotion(d) => devotion_sections(d, copied),
    };

    // Reserve one column for the scrollbar, as the scroll view does.
    let content_width = area.width.saturating_sub(1);
    let heights: Vec<u16> = sections
        .iter()
        .map(|p| p.line_count(content_width) as u16)
        .collect();
    let total_height: u16 = heights.iter().sum();

    let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    let mut y_offset: u16 = 0;
    for (section, height) in sections.into_iter().zip(heights) {
        let section_rect = Rect::new(0, y_offset, content_width, height);
        scroll_view.render_widget(section, section_rect);
        y_offset += height;
    }

    frame.render_stateful_widget(scroll_view, area, &mut state.scroll_state);
}

pub(crate) fn bordered(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::bordered()
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(border_style)
        .title(title.to_string())
}

fn card<'a>(title: &'a str, lines: Vec<Line<'a>>) -> Paragraph<'a> {
    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title),
        )
        .wrap(Wrap { trim: true })
}

fn copy_hint_line<'a>(hint: &'a str, copied: bool) -> Line<'a> {
    if copied {
        Line::from(Span::styled("✓ copied", Style::default().fg(Color::Green)))
    } else {
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    }
}

fn header<'a>(title: String, subtitle: String) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
        Line::raw(""),
    ])
    .wrap(Wrap { trim: true })
}

fn guidance_sections<'a>(
    guidance: &'a GuidanceResponse,
    copied: Option<CopyKey>,
) -> Vec<Paragraph<'a>> {
    let mut sections = vec![header(
        "Here's your personalized guidance".to_string(),
        format!("Based on your feelings about: {}", guidance.topic),
    )];

    let mut verse_lines = Vec::new();
    for (i, verse) in guidance.verses.iter().enumerate() {
        let hint = (i < 9).then_some((i + 1, copied == Some(CopyKey::Verse(i))));
        verse_lines.extend(verse_block::verse_lines(verse, Color::Cyan, hint));
    }
    sections.push(card("Bible Verses", verse_lines));

    let mut reflection_lines = vec![Line::raw(guidance.reflection.as_str()), Line::raw("")];
    reflection_lines.push(copy_hint_line(
        "[r] copy",
        copied == Some(CopyKey::Reflection),
    ));
    sections.push(card("Reflection", reflection_lines));

    let mut prayer_lines = vec![
        Line::from(Span::styled(
            guidance.prayer.as_str(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::raw(""),
    ];
    prayer_lines.push(copy_hint_line("[p] copy", copied == Some(CopyKey::Prayer)));
    sections.push(card("Prayer", prayer_lines));

    sections.push(actions_line("[s] share   [b] save", copied));
    sections
}

fn devotion_sections<'a>(
    devotion: &'a DevotionResponse,
    copied: Option<CopyKey>,
) -> Vec<Paragraph<'a>> {
    let plan = &devotion.plan;
    let mut sections = vec![header(
        "Your 10-Minute Devotion Plan".to_string(),
        format!("Theme: {}", devotion.theme),
    )];

    sections.push(card(
        "Opening Prayer (1 min)",
        vec![
            Line::from(Span::styled(
                plan.opening_prayer.as_str(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::raw(""),
            copy_hint_line("[p] copy", copied == Some(CopyKey::Prayer)),
        ],
    ));

    let mut scripture_lines = Vec::new();
    for (i, verse) in plan.scriptures.iter().enumerate() {
        let hint = (i < 9).then_some((i + 1, copied == Some(CopyKey::Verse(i))));
        scripture_lines.extend(verse_block::verse_lines(verse, Color::Cyan, hint));
    }
    sections.push(card("Scripture Reading (3-4 min)", scripture_lines));

    sections.push(card(
        "Reflection (3 min)",
        vec![Line::raw(plan.reflection.as_str())],
    ));

    let step_lines: Vec<Line> = plan
        .action_steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            Line::from(vec![
                Span::styled(
                    format!("{}. ", i + 1),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(step.as_str()),
            ])
        })
        .collect();
    sections.push(card("Action Steps", step_lines));

    sections.push(card(
        "Closing Prayer (1 min)",
        vec![
            Line::from(Span::styled(
                plan.closing_prayer.as_str(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::raw(""),
            copy_hint_line("[c] copy", copied == Some(CopyKey::ClosingPrayer)),
        ],
    ));

    if let Some(video) = &devotion.video {
        let mut meta = video.channel_title.clone();
        if let Some(duration) = video.duration {
            meta.push_str(&format!(" • {}", format_duration(duration)));
        }
        sections.push(card(
            "Related Content",
            vec![
                Line::from(Span::styled(
                    video.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(meta, Style::default().fg(Color::Gray))),
                Line::from(Span::styled(
                    video.watch_url(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                )),
                Line::from(Span::styled(
                    video.thumbnail_url.as_str(),
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        ));
    }

    sections.push(actions_line("[d] copy plan   [s] share   [b] save", copied));
    sections
}

fn actions_line<'a>(hint: &'a str, copied: Option<CopyKey>) -> Paragraph<'a> {
    let line = match copied {
        Some(CopyKey::Devotion) => copy_hint_line("", true),
        Some(CopyKey::Link) => Line::from(Span::styled(
            "✓ link copied",
            Style::default().fg(Color::Green),
        )),
        _ => Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    };
    Paragraph::new(vec![Line::raw(""), line])
}
