//! # ResultPanel Component
//!
//! The result region: shown only while `Session::result_visible()` holds.
//!
//! ```text
//! ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓  ← tone-colored border
//! ┃ Detected Emotion                    ┃
//! ┃ Anxious                          😰 ┃
//! ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛
//! ╭─────────────────────────────────────╮
//! │ It's okay to feel anxious. ...      │  ← response card
//! ╰─────────────────────────────────────╯
//! ╭─────────────────────────────────────╮
//! │ 🫁 Box Breathing Exercise           │  ← action card
//! │ Breathe in for 4, hold for 4, ...   │
//! ╰─────────────────────────────────────╯
//! ```
//!
//! Card heights depend on how the text wraps, so the panel implements
//! `Measure` and the parent sizes its area from `required_height()`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::mood::{MoodProfile, emoji_for_label};
use crate::tui::component::{Component, Measure};
use crate::tui::theme::tone_color;

/// Borders (2) + horizontal padding (2)
const CARD_H_OVERHEAD: u16 = 4;
/// Top + bottom borders
const CARD_V_OVERHEAD: u16 = 2;
/// "Detected Emotion" + label
const EMOTION_CARD_HEIGHT: u16 = 2 + CARD_V_OVERHEAD;

pub struct ResultPanel {
    pub profile: &'static MoodProfile,
}

impl ResultPanel {
    pub fn new(profile: &'static MoodProfile) -> Self {
        Self { profile }
    }

    fn response_paragraph(&self) -> Paragraph<'static> {
        Paragraph::new(self.profile.response)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
    }

    fn action_paragraph(&self) -> Paragraph<'static> {
        let action = &self.profile.action;
        let lines = vec![
            Line::from(vec![
                Span::raw(action.kind.icon()),
                Span::raw(" "),
                Span::styled(
                    action.title,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                action.description,
                Style::default().fg(Color::Gray),
            )),
        ];
        Paragraph::new(lines).wrap(Wrap { trim: true })
    }

    fn card_height(paragraph: &Paragraph, width: u16) -> u16 {
        let inner = width.saturating_sub(CARD_H_OVERHEAD).max(1);
        paragraph.line_count(inner) as u16 + CARD_V_OVERHEAD
    }

    fn card_block() -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1))
    }

    fn render_emotion_card(&self, frame: &mut Frame, area: Rect) {
        let color = tone_color(self.profile.tone);
        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(color))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [caption_area, label_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Detected Emotion",
                Style::default().fg(Color::DarkGray),
            )),
            caption_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.profile.emotion,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            label_area,
        );
        if let Some(emoji) = emoji_for_label(self.profile.emotion) {
            frame.render_widget(
                Paragraph::new(emoji).alignment(Alignment::Right),
                label_area,
            );
        }
    }
}

impl Measure for ResultPanel {
    fn required_height(&self, width: u16) -> u16 {
        EMOTION_CARD_HEIGHT
            + Self::card_height(&self.response_paragraph(), width)
            + Self::card_height(&self.action_paragraph(), width)
    }
}

impl Component for ResultPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let response = self.response_paragraph();
        let action = self.action_paragraph();
        let response_height = Self::card_height(&response, area.width);
        let action_height = Self::card_height(&action, area.width);

        let [emotion_area, response_area, action_area] = Layout::vertical([
            Constraint::Length(EMOTION_CARD_HEIGHT),
            Constraint::Length(response_height),
            Constraint::Length(action_height),
        ])
        .areas(area);

        self.render_emotion_card(frame, emotion_area);
        frame.render_widget(response.block(Self::card_block()), response_area);
        frame.render_widget(action.block(Self::card_block()), action_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mood::{MoodKey, lookup};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(key: MoodKey, width: u16) -> String {
        let mut panel = ResultPanel::new(lookup(key));
        let height = panel.required_height(width);
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| panel.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_label_response_and_action() {
        let text = rendered(MoodKey::Anxious, 100);
        assert!(text.contains("Detected Emotion"));
        assert!(text.contains("Anxious"));
        assert!(text.contains("Box Breathing Exercise"));
        assert!(text.contains("Your feelings are valid"));
    }

    #[test]
    fn test_prompt_action_renders_title() {
        let text = rendered(MoodKey::Happy, 100);
        assert!(text.contains("Happy"));
        assert!(text.contains("Gratitude Moment"));
    }

    #[test]
    fn test_height_grows_when_narrow() {
        let panel = ResultPanel::new(lookup(MoodKey::Sad));
        assert!(panel.required_height(30) > panel.required_height(120));
    }

    #[test]
    fn test_wide_height_is_minimal() {
        // Response: 1 line, action: title + description = 2 lines
        let panel = ResultPanel::new(lookup(MoodKey::Neutral));
        assert_eq!(
            panel.required_height(200),
            EMOTION_CARD_HEIGHT + (1 + CARD_V_OVERHEAD) + (2 + CARD_V_OVERHEAD)
        );
    }
}
