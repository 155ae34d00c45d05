//! # CrisisBanner Component
//!
//! Alternate renderer used whenever the backend flags the input as a
//! crisis signal. Surfaces the backend's message, supportive verses, a
//! prayer, and resource lines, then always appends the two fixed hotline
//! links and the emergency-services reminder. This path supersedes the
//! guidance and devotion views entirely.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::CrisisView;
use crate::tui::components::verse_block;

pub const LIFELINE_URL: &str = "https://988lifeline.org";
pub const CRISIS_TEXT_LINE_URL: &str = "https://www.crisistextline.org";

const DEFAULT_MESSAGE: &str =
    "You don't have to face this alone. Support is available right now.";

/// Builds the crisis sections rendered into the response scroll view.
pub fn sections<'a>(crisis: &CrisisView<'a>) -> Vec<Paragraph<'a>> {
    let mut out = Vec::new();

    let message = crisis.message.unwrap_or(DEFAULT_MESSAGE);
    out.push(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "⚠ Crisis Support Available",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::from(Span::styled(message, Style::default().fg(Color::Red))),
        ])
        .block(
            Block::bordered()
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true }),
    );

    if !crisis.supportive_verses.is_empty() {
        let mut verse_lines = Vec::new();
        for verse in crisis.supportive_verses {
            // Non-copyable by design: no copy hints in the crisis path.
            verse_lines.extend(verse_block::verse_lines(verse, Color::Red, None));
        }
        out.push(red_card("Words of Comfort", verse_lines));
    }

    if let Some(prayer) = crisis.prayer {
        out.push(red_card(
            "Prayer for You",
            vec![Line::from(Span::styled(
                prayer,
                Style::default().add_modifier(Modifier::ITALIC),
            ))],
        ));
    }

    let mut resource_lines: Vec<Line> = crisis
        .resources
        .iter()
        .map(|resource| {
            Line::from(vec![
                Span::styled("☎ ", Style::default().fg(Color::Red)),
                Span::raw(resource.as_str()),
            ])
        })
        .collect();
    if !resource_lines.is_empty() {
        resource_lines.push(Line::raw(""));
    }
    resource_lines.push(hotline_line(
        "988 Suicide & Crisis Lifeline",
        LIFELINE_URL,
    ));
    resource_lines.push(hotline_line("Crisis Text Line", CRISIS_TEXT_LINE_URL));
    out.push(red_card("Immediate Help & Resources", resource_lines));

    out.push(
        Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(
                "If you're in immediate danger, please call 911 or go to your \
                 nearest emergency room.",
                Style::default().fg(Color::Gray),
            )),
        ])
        .wrap(Wrap { trim: true }),
    );

    out
}

fn red_card<'a>(title: &'a str, lines: Vec<Line<'a>>) -> Paragraph<'a> {
    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red))
                .title(title),
        )
        .wrap(Wrap { trim: true })
}

fn hotline_line<'a>(name: &'a str, url: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled("☎ ", Style::default().fg(Color::Red)),
        Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" — "),
        Span::styled(
            url,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiResponse;
    use crate::test_support::sample_crisis;

    #[test]
    fn test_full_crisis_payload_renders_all_sections() {
        let response = ApiResponse::Guidance(sample_crisis());
        let crisis = response.crisis().unwrap();
        let built = sections(&crisis);
        // alert, verses, prayer, resources, emergency reminder
        assert_eq!(built.len(), 5);
    }

    #[test]
    fn test_bare_flag_still_shows_hotlines() {
        // A devotion-shaped payload with the flag carries no crisis fields;
        // the banner must still show the alert, hotlines, and reminder.
        let crisis = CrisisView {
            message: None,
            supportive_verses: &[],
            prayer: None,
            resources: &[],
        };
        let built = sections(&crisis);
        // alert, resources (hotlines only), emergency reminder
        assert_eq!(built.len(), 3);
    }
}
