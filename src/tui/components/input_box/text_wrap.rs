//! Pure text wrapping helpers and dimensional constants for the InputBox.
//!
//! Rendering and cursor placement both go through `wrapped_lines` on the
//! whole buffer, so the cursor lands on the row the text was drawn on.

use unicode_width::UnicodeWidthStr;

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// The field never shrinks below this many text rows
pub(super) const MIN_VISIBLE_LINES: u16 = 3;
/// Maximum visible content lines before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 5;
/// Offset from area edge to content: border plus one column of padding
pub(super) const CONTENT_OFFSET_X: u16 = 2;
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

/// Build textwrap options configured for the input box inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Calculate the inner content width after subtracting border/padding overhead.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrap `text` into display lines. A trailing newline yields a trailing
/// empty line so the cursor has somewhere to sit.
pub(super) fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![String::new()];
    }

    let mut lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect();

    if lines.is_empty() {
        lines.push(String::new());
    }
    // textwrap doesn't always produce an empty trailing line for a trailing newline
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }
    lines
}

/// Row and column (in display cells) of byte offset `pos` within the wrapped text.
///
/// Each wrapped line is located in `text` in order; the cursor sits on the
/// last line starting at or before `pos`. Spaces dropped at a soft wrap stay
/// on the line they trail.
pub(super) fn cursor_cell(text: &str, pos: usize, width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }

    let mut row = 0;
    let mut row_start = 0;
    let mut offset = 0;
    for (idx, line) in wrapped_lines(text, width).iter().enumerate() {
        let start = if idx == 0 {
            0
        } else if line.is_empty() {
            text[offset..]
                .find('\n')
                .map_or(text.len(), |i| offset + i + 1)
        } else {
            text[offset..]
                .find(line.as_str())
                .map_or(offset, |i| offset + i)
        };
        if start > pos {
            break;
        }
        row = idx;
        row_start = start;
        offset = start + line.len();
    }

    let col = text[row_start..pos].width() as u16;
    (row as u16, col.min(width))
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
