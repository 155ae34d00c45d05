use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Input components follow a props/state split:
/// - Props (public struct fields) are synced from `App` each frame.
/// - Internal state (buffers, cursors) stays private to the component.
/// - They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so components can update presentation
/// caches (scroll offsets, layout) during the render pass, matching
/// Ratatui's `StatefulWidget` pattern.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
///
/// Components never touch `App` or the network: they translate low-level
/// terminal events into one high-level event for the controller.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
