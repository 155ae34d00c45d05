//! Frame layout and pane dispatch. The frame is a fixed vertical stack:
//! title bar, feeling input, devotion picker, response area, toast line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::{App, ToastKind};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{TitleBar, response_view};

const FEELING_PANE_HEIGHT: u16 = 6;
const DEVOTION_PANE_HEIGHT: u16 = 5;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(1),
        Length(FEELING_PANE_HEIGHT),
        Length(DEVOTION_PANE_HEIGHT),
        Min(0),
        Length(1),
    ]);
    let [title_area, feeling_area, devotion_area, response_area, toast_area] =
        layout.areas(frame.area());

    let mut title_bar = TitleBar {
        base_url: app.share_url.clone(),
        status_message: app.status_message.clone(),
        is_loading: app.is_loading,
        spinner_frame,
    };
    title_bar.render(frame, title_area);

    tui.feeling.render(frame, feeling_area);
    tui.devotion.render(frame, devotion_area);

    response_view::render(
        frame,
        response_area,
        app.response.as_ref(),
        &mut tui.response_view,
    );

    draw_toast_line(frame, toast_area, app);
}

fn draw_toast_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.toast {
        Some(toast) => {
            let style = match toast.kind {
                ToastKind::Success => Style::default().fg(Color::Green),
                ToastKind::Error => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            };
            Line::from(Span::styled(format!(" {}", toast.text), style))
        }
        None => Line::from(Span::styled(
            " Tab: switch panes  ·  Ctrl+C: quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(line, area);
}
