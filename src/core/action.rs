//! # Actions
//!
//! Everything that can happen in the Abide client becomes an `Action`.
//! User submits a feeling? That's `Action::SubmitFeeling`.
//! The backend answers? That's `Action::ResponseArrived`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. No side effects here — I/O is described by the
//! returned `Effect` and executed by the event loop.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes the controller testable without a terminal or a network.

use log::{debug, warn};

use crate::api::{ApiError, ApiResponse, DevotionRequest, FeelingRequest, Theme};
use crate::core::state::{App, Toast};

#[derive(Debug)]
pub enum Action {
    /// Fully composed feeling text (free text + tags) from the input pane.
    SubmitFeeling(String),
    /// Devotion request; `None` lets the backend choose the theme.
    GenerateDevotion(Option<Theme>),
    /// A spawned request finished. `seq` identifies which submission.
    ResponseArrived {
        seq: u64,
        result: Result<ApiResponse, ApiError>,
    },
    DismissToast,
    Quit,
}

/// Side effects requested by `update()`, executed by the event loop.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    SpawnFeeling { seq: u64, request: FeelingRequest },
    SpawnDevotion { seq: u64, request: DevotionRequest },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SubmitFeeling(text) => {
            if app.is_loading {
                debug!("Ignoring SubmitFeeling while a request is in flight");
                return Effect::None;
            }
            app.request_seq += 1;
            app.is_loading = true;
            app.status_message = String::from("Seeking guidance...");
            Effect::SpawnFeeling {
                seq: app.request_seq,
                request: FeelingRequest { text },
            }
        }
        Action::GenerateDevotion(theme) => {
            if app.is_loading {
                debug!("Ignoring GenerateDevotion while a request is in flight");
                return Effect::None;
            }
            app.request_seq += 1;
            app.is_loading = true;
            app.status_message = String::from("Preparing your devotion...");
            Effect::SpawnDevotion {
                seq: app.request_seq,
                request: DevotionRequest { theme },
            }
        }
        Action::ResponseArrived { seq, result } => {
            if seq != app.request_seq {
                // A newer submission superseded this one; the latest wins.
                debug!("Discarding stale completion (seq {seq} != {})", app.request_seq);
                return Effect::None;
            }
            app.is_loading = false;
            app.status_message.clear();
            match result {
                Ok(response) => {
                    app.toast = Some(Toast::success(match &response {
                        _ if response.crisis().is_some() => "Support resources are ready for you.",
                        ApiResponse::Guidance(_) => "Here's your personalized spiritual guidance.",
                        ApiResponse::Devotion(_) => "Your 10-minute devotion plan is ready.",
                    }));
                    app.response = Some(response);
                }
                Err(e) => {
                    // The previous response stays on screen untouched.
                    warn!("Request failed: {e}");
                    app.toast = Some(Toast::error("Something went wrong. Please try again."));
                }
            }
            Effect::None
        }
        Action::DismissToast => {
            app.toast = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
