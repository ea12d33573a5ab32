//! Top-level layout: stacks the components for one frame.
//!
//! ```text
//! ┌ Header ───────────────────┐
//! │ (spacer)                  │
//! │ InputBox (3..=5 rows)     │
//! │ SubmitButton              │
//! │ (spacer)                  │
//! │ ResultPanel (if visible)  │
//! │ HistoryPanel (rest)       │
//! └───────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::Session;
use crate::tui::TuiState;
use crate::tui::component::{Component, Measure};
use crate::tui::components::{ButtonState, Header, HistoryPanel, ResultPanel, SubmitButton};

/// Content column never grows past this width, like a centered page.
const MAX_CONTENT_WIDTH: u16 = 90;

pub fn draw_ui(frame: &mut Frame, session: &Session, tui: &mut TuiState, spinner_frame: usize) {
    let area = content_area(frame.area());

    let mut result_panel = session.visible_profile().map(ResultPanel::new);
    let result_height = result_panel
        .as_ref()
        .map(|panel| panel.required_height(area.width))
        .unwrap_or(0);
    let input_height = tui.input_box.required_height(area.width);

    let [
        header_area,
        _,
        input_area,
        button_area,
        _,
        result_area,
        history_area,
    ] = Layout::vertical([
        Constraint::Length(Header::HEIGHT),
        Constraint::Length(1),
        Constraint::Length(input_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(result_height),
        Constraint::Min(0),
    ])
    .areas(area);

    Header.render(frame, header_area);
    tui.input_box.render(frame, input_area);

    let button_state = if session.is_analyzing() {
        ButtonState::Analyzing
    } else if session.can_submit() {
        ButtonState::Enabled
    } else {
        ButtonState::Disabled
    };
    SubmitButton::new(button_state, spinner_frame).render(frame, button_area);

    if let Some(panel) = result_panel.as_mut() {
        panel.render(frame, result_area);
    }

    HistoryPanel::new(&session.history).render(frame, history_area);
}

/// Horizontally centered column, at most `MAX_CONTENT_WIDTH` wide.
fn content_area(area: Rect) -> Rect {
    let width = area.width.min(MAX_CONTENT_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
