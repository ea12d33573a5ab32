//! # HistoryPanel Component
//!
//! "Recent History": every entry in the order given, always visible.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Cell, Padding, Paragraph, Row, Table};

use crate::core::history::HistoryEntry;
use crate::tui::component::Component;

pub struct HistoryPanel<'a> {
    pub entries: &'a [HistoryEntry],
}

impl<'a> HistoryPanel<'a> {
    pub fn new(entries: &'a [HistoryEntry]) -> Self {
        Self { entries }
    }
}

impl Component for HistoryPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1))
            .title(Span::styled(
                " Recent History ",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));

        if self.entries.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No check-ins yet",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let rows = self.entries.iter().map(|entry| {
            Row::new(vec![
                Cell::from(Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::Gray)),
                    Span::styled(entry.emotion.clone(), Style::default().fg(Color::White)),
                ])),
                Cell::from(Span::styled(
                    entry.intensity.label(),
                    Style::default().fg(Color::DarkGray),
                )),
                Cell::from(
                    Line::from(Span::styled(
                        entry.date.format("%Y-%m-%d").to_string(),
                        Style::default().fg(Color::Gray),
                    ))
                    .right_aligned(),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Min(12),
                Constraint::Length(10),
                Constraint::Length(10),
            ],
        )
        .block(block);

        frame.render_widget(table, area);
    }
}
