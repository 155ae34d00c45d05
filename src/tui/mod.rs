//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter in the future
//! if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (request in flight): draws every ~80ms so the spinner
//!   stays smooth.
//! - **Idle**: sleeps up to 250ms, redrawing on events, terminal resize,
//!   or when a toast / copied indicator expires.

mod clipboard;
mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::Instant;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::api::{DevotionRequest, FeelingRequest, GuidanceApi, HttpClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Toast};
use crate::tui::clipboard::{Clipboard, SystemClipboard};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CopyKey, DevotionEvent, DevotionPicker, FeelingEvent, FeelingInput, ResponseEvent,
    ResponseViewState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which pane receives keyboard input. Tab cycles in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Feeling,
    Devotion,
    Response,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Feeling => Focus::Devotion,
            Focus::Devotion => Focus::Response,
            Focus::Response => Focus::Feeling,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    // Persistent component states
    pub feeling: FeelingInput,
    pub devotion: DevotionPicker,
    pub response_view: ResponseViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Feeling,
            feeling: FeelingInput::new(),
            devotion: DevotionPicker::new(),
            response_view: ResponseViewState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(std::io::stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client: Arc<dyn GuidanceApi> =
        Arc::new(HttpClient::new(config.base_url.clone(), config.timeout));
    let mut app = App::new(client, config.share_url.clone());
    let mut tui = TuiState::new();
    let mut system_clipboard = SystemClipboard::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background request tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync component props with App/TUI state
        tui.feeling.focused = tui.focus == Focus::Feeling;
        tui.feeling.busy = app.is_loading;
        tui.devotion.focused = tui.focus == Focus::Devotion;
        tui.devotion.busy = app.is_loading;
        tui.response_view.focused = tui.focus == Focus::Response;

        // Expire transient indicators; each expiry needs one more frame
        let now = Instant::now();
        if let Some(toast) = &app.toast
            && toast.is_expired(now)
        {
            update(&mut app, Action::DismissToast);
            needs_redraw = true;
        }
        if tui.response_view.expire_copied(now) {
            needs_redraw = true;
        }

        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of focus
            if matches!(tui_event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            if matches!(tui_event, TuiEvent::FocusNext) {
                tui.focus = tui.focus.next();
                continue;
            }

            // Focused-pane dispatch
            match tui.focus {
                Focus::Feeling => {
                    if let Some(FeelingEvent::Submit(text)) =
                        tui.feeling.handle_event(&tui_event)
                    {
                        let effect = update(&mut app, Action::SubmitFeeling(text));
                        if let Effect::SpawnFeeling { seq, request } = effect {
                            spawn_feeling(app.client.clone(), seq, request, tx.clone());
                        }
                    }
                }
                Focus::Devotion => {
                    if let Some(DevotionEvent::Generate(theme)) =
                        tui.devotion.handle_event(&tui_event)
                    {
                        let effect = update(&mut app, Action::GenerateDevotion(theme));
                        if let Effect::SpawnDevotion { seq, request } = effect {
                            spawn_devotion(app.client.clone(), seq, request, tx.clone());
                        }
                    }
                }
                Focus::Response => {
                    let Some(response) = app.response.as_ref() else {
                        continue;
                    };
                    if let Some(response_event) =
                        tui.response_view.handle_event(&tui_event, response)
                    {
                        handle_response_event(
                            response_event,
                            &mut app,
                            &mut tui.response_view,
                            &mut system_clipboard,
                        );
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle completions from background request tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            update(&mut app, action);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Executes a copy/share/bookmark event against the clipboard and raises
/// the matching toast. Extracted from the event loop so the clipboard
/// doubles can exercise it.
fn handle_response_event(
    event: ResponseEvent,
    app: &mut App,
    view: &mut ResponseViewState,
    clipboard: &mut dyn Clipboard,
) {
    match event {
        ResponseEvent::Copy { key, text } => copy_to_clipboard(key, &text, app, view, clipboard),
        ResponseEvent::Share => {
            // No native share target in a terminal; copy the app link.
            let link = app.share_url.clone();
            copy_to_clipboard(CopyKey::Link, &link, app, view, clipboard);
        }
        ResponseEvent::Bookmark => {
            app.toast = Some(Toast::success("Response saved to your bookmarks."));
        }
    }
}

fn copy_to_clipboard(
    key: CopyKey,
    text: &str,
    app: &mut App,
    view: &mut ResponseViewState,
    clipboard: &mut dyn Clipboard,
) {
    match clipboard.set_text(text) {
        Ok(()) => {
            view.mark_copied(key);
            app.toast = Some(Toast::success(match key {
                CopyKey::Link => "Link copied. Share it with someone who needs it.",
                _ => "Copied to clipboard.",
            }));
        }
        Err(e) => {
            warn!("Clipboard copy failed: {e}");
            app.toast = Some(Toast::error("Couldn't copy. Please try again."));
        }
    }
}

/// Spawns the guidance request, reporting back over the action channel
/// with the seq it was issued under.
pub fn spawn_feeling(
    client: Arc<dyn GuidanceApi>,
    seq: u64,
    request: FeelingRequest,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning guidance request (seq {seq})");
    tokio::spawn(async move {
        let result = client.feel(&request).await;
        if tx.send(Action::ResponseArrived { seq, result }).is_err() {
            warn!("Failed to send guidance completion (seq {seq}): receiver dropped");
        }
    });
}

/// Spawns the devotion request, reporting back over the action channel.
pub fn spawn_devotion(
    client: Arc<dyn GuidanceApi>,
    seq: u64,
    request: DevotionRequest,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning devotion request (seq {seq})");
    tokio::spawn(async move {
        let result = client.devotion(&request).await;
        if tx.send(Action::ResponseArrived { seq, result }).is_err() {
            warn!("Failed to send devotion completion (seq {seq}): receiver dropped");
        }
    });
}
