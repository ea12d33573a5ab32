use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the React pattern:
/// - They receive data via props (struct fields).
/// - They may hold internal state (the input box owns its buffer and cursor).
/// - They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so stateful components can update presentation
/// state (scroll offsets, cached widths) during the render pass.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component whose height depends on the width it is given.
///
/// The layout in `ui.rs` asks for heights first, then hands out areas.
pub trait Measure {
    fn required_height(&self, width: u16) -> u16;
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
