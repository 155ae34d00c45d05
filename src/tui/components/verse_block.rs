//! Shared rendering for a single Bible verse: translation badge, quoted
//! text, and attribution line. Used by the guidance view, the devotion
//! scripture list, and the crisis banner (which renders verses without a
//! copy affordance).

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::api::Verse;

/// Builds the lines for one verse. `copy_hint` is `Some((digit, copied))`
/// for copyable verses; `None` renders the verse without the affordance.
pub fn verse_lines<'a>(
    verse: &'a Verse,
    accent: Color,
    copy_hint: Option<(usize, bool)>,
) -> Vec<Line<'a>> {
    let mut badge_spans = vec![Span::styled(
        format!("[{}]", verse.translation),
        Style::default().fg(Color::DarkGray),
    )];
    match copy_hint {
        Some((_, true)) => {
            badge_spans.push(Span::raw("  "));
            badge_spans.push(Span::styled(
                "✓ copied",
                Style::default().fg(Color::Green),
            ));
        }
        Some((digit, false)) => {
            badge_spans.push(Span::raw("  "));
            badge_spans.push(Span::styled(
                format!("[{digit}] copy"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        None => {}
    }

    vec![
        Line::from(badge_spans),
        Line::from(Span::styled(
            format!("“{}”", verse.text),
            Style::default().fg(accent).add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("— {}", verse.reference),
            Style::default().fg(Color::Gray),
        )),
        Line::raw(""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_verse;

    fn rendered_text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_verse_lines_show_reference_and_translation() {
        let verse = sample_verse();
        let text = rendered_text(&verse_lines(&verse, Color::Cyan, None));
        assert!(text.contains("[KJV]"));
        assert!(text.contains("— Philippians 4:6"));
        assert!(!text.contains("copy"), "crisis verses are not copyable");
    }

    #[test]
    fn test_copy_hint_flips_to_checkmark() {
        let verse = sample_verse();
        let pending = rendered_text(&verse_lines(&verse, Color::Cyan, Some((1, false))));
        assert!(pending.contains("[1] copy"));

        let copied = rendered_text(&verse_lines(&verse, Color::Cyan, Some((1, true))));
        assert!(copied.contains("✓ copied"));
        assert!(!copied.contains("[1] copy"));
    }
}
