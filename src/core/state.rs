//! # Application State
//!
//! Core business state for the Abide client. This module contains domain
//! logic only - no TUI-specific types. Presentation state lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── client: Arc<dyn GuidanceApi>   // backend seam
//! ├── response: Option<ApiResponse>  // the single current-response slot
//! ├── is_loading: bool               // a request is in flight
//! ├── request_seq: u64               // fencing counter for completions
//! ├── status_message: String         // status bar text
//! ├── toast: Option<Toast>           // transient notification
//! └── share_url: String              // address copied by Share
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations. Renderers are
//! read-only over `response`; a new completion fully replaces it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::{ApiResponse, GuidanceApi};

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A non-blocking transient notification, expired by the event loop.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    pub raised_at: Instant,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= TOAST_TTL
    }
}

pub struct App {
    pub client: Arc<dyn GuidanceApi>,
    pub response: Option<ApiResponse>,
    pub is_loading: bool,
    /// Sequence number of the most recently issued request. Completions
    /// carrying an older seq are discarded (out-of-order protection).
    pub request_seq: u64,
    pub status_message: String,
    pub toast: Option<Toast>,
    pub share_url: String,
}

impl App {
    pub fn new(client: Arc<dyn GuidanceApi>, share_url: String) -> Self {
        Self {
            client,
            response: None,
            is_loading: false,
            request_seq: 0,
            status_message: String::from("How are you feeling today?"),
            toast: None,
            share_url,
        }
    }
}
