//! Terminal palette for core `Tone`s.

use ratatui::style::Color;

use crate::core::mood::Tone;

/// Foreground color used for a mood's label and card border.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Amber => Color::Yellow,
        Tone::Red => Color::LightRed,
        Tone::Blue => Color::LightBlue,
        Tone::Green => Color::LightGreen,
        Tone::Gray => Color::Gray,
    }
}
