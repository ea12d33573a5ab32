//! # Header Component
//!
//! App title and tagline, centered. Purely presentational.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const TITLE: &str = "Mood Mirror";
pub const TAGLINE: &str = "Reflect, understand, and care for your feelings";

pub struct Header;

impl Header {
    /// Title + tagline
    pub const HEIGHT: u16 = 2;
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(TAGLINE, Style::default().fg(Color::DarkGray))),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_header_renders_title_and_tagline() {
        let backend = TestBackend::new(60, Header::HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| Header.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Mood Mirror"));
        assert!(text.contains("care for your feelings"));
    }
}
