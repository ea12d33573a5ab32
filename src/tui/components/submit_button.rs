//! # SubmitButton Component
//!
//! One-line "Analyze Mood" control under the input box.
//!
//! The button never handles events itself; Enter always reaches core, which
//! ignores it when the button is shown disabled. Rendering and guarding read
//! the same `Session::can_submit()`, so they can't disagree.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// Braille spinner frames shown while analyzing
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Enabled,
    Disabled,
    Analyzing,
}

pub struct SubmitButton {
    pub state: ButtonState,
    pub spinner_frame: usize,
}

impl SubmitButton {
    pub fn new(state: ButtonState, spinner_frame: usize) -> Self {
        Self {
            state,
            spinner_frame,
        }
    }

    pub fn label(&self) -> String {
        match self.state {
            ButtonState::Enabled | ButtonState::Disabled => "Analyze Mood".to_string(),
            ButtonState::Analyzing => {
                let spin = SPINNER[self.spinner_frame % SPINNER.len()];
                format!("{spin} Analyzing...")
            }
        }
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = match self.state {
            ButtonState::Enabled => Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            ButtonState::Disabled => Style::default().fg(Color::DarkGray),
            ButtonState::Analyzing => Style::default().fg(Color::Gray),
        };

        let hint = match self.state {
            ButtonState::Enabled => Span::styled("  ⏎ Enter", Style::default().fg(Color::DarkGray)),
            _ => Span::raw(""),
        };

        let line = Line::from(vec![
            Span::styled(format!("[ {} ]", self.label()), style),
            hint,
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(button: &mut SubmitButton) -> String {
        let backend = TestBackend::new(50, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| button.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_enabled_label() {
        let mut button = SubmitButton::new(ButtonState::Enabled, 0);
        let text = rendered(&mut button);
        assert!(text.contains("Analyze Mood"));
        assert!(text.contains("Enter"));
    }

    #[test]
    fn test_disabled_has_no_hint() {
        let mut button = SubmitButton::new(ButtonState::Disabled, 0);
        let text = rendered(&mut button);
        assert!(text.contains("Analyze Mood"));
        assert!(!text.contains("Enter"));
    }

    #[test]
    fn test_analyzing_label_spins() {
        let a = SubmitButton::new(ButtonState::Analyzing, 0).label();
        let b = SubmitButton::new(ButtonState::Analyzing, 1).label();
        assert!(a.ends_with("Analyzing..."));
        assert_ne!(a, b);
        assert_eq!(a, SubmitButton::new(ButtonState::Analyzing, SPINNER.len()).label());
    }
}
