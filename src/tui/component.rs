use ratatui::Frame;
use ratatui::layout::{Rect, Size};

/// A reusable UI component.
///
/// Components receive data via props (struct fields) and render to a `Frame`
/// within a given `Rect`. Panels in the overlay size themselves to their
/// content, so every component also reports the size it wants.
pub trait Component {
    /// The smallest size that shows all content, given an upper bound.
    /// The result never exceeds `max`.
    fn desired_size(&self, max: Size) -> Size;

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
