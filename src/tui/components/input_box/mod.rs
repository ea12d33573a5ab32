//! # InputBox Component
//!
//! The multi-line "How are you feeling?" field.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, Ctrl+J / Shift+Enter for newlines)
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit `Submit` on Enter; whether anything happens is core's decision
//! - Show a placeholder while empty
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. Every edit emits
//! `InputEvent::Changed` so the parent can mirror the text into
//! `Session::raw_input`. Submitting does not clear the buffer.

mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler, Measure};
use crate::tui::event::TuiEvent;

use text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, MAX_VISIBLE_LINES, MIN_VISIBLE_LINES, VERTICAL_OVERHEAD,
    cursor_cell, inner_width, next_char_boundary, prev_char_boundary, wrapped_lines,
};

pub const PLACEHOLDER: &str = "How are you feeling today? Share what's on your mind...";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User pressed Enter
    Submit,
    /// Buffer contents changed
    Changed,
    /// Cursor moved without changing the text
    CursorMoved,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// First visible wrapped line
    scroll_offset: u16,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            scroll_offset: 0,
        }
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Keep the cursor row inside the visible window.
    fn update_scroll_offset(&mut self, width: u16) {
        let total = wrapped_lines(&self.buffer, width).len() as u16;
        if total <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let (row, _) = cursor_cell(&self.buffer, self.cursor, width);
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = row + 1 - MAX_VISIBLE_LINES;
        }
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Measure for InputBox {
    /// Height in rows, clamped to [MIN_VISIBLE_LINES, MAX_VISIBLE_LINES] plus borders.
    fn required_height(&self, width: u16) -> u16 {
        let lines = wrapped_lines(&self.buffer, inner_width(width)).len() as u16;
        lines.clamp(MIN_VISIBLE_LINES, MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        self.update_scroll_offset(width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray))
            .padding(Padding::horizontal(1));

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )))
            .wrap(Wrap { trim: true })
        } else {
            let lines: Vec<Line> = wrapped_lines(&self.buffer, width)
                .into_iter()
                .map(Line::from)
                .collect();
            Paragraph::new(lines).scroll((self.scroll_offset, 0))
        };

        frame.render_widget(
            paragraph
                .block(block)
                .style(Style::default().fg(Color::White)),
            area,
        );

        let (row, col) = cursor_cell(&self.buffer, self.cursor, width);
        let x = area.x + CONTENT_OFFSET_X + col;
        let y = area.y + CONTENT_OFFSET_Y + row.saturating_sub(self.scroll_offset);
        frame.set_cursor_position((x, y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                self.insert_str(&normalized);
                Some(InputEvent::Changed)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                InputEvent::Changed
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                InputEvent::Changed
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor != line_start).then(|| {
                    self.cursor = line_start;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor != line_end).then(|| {
                    self.cursor = line_end;
                    InputEvent::CursorMoved
                })
            }
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
