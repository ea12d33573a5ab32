use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::{debug, warn};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Submit,

    // TUI-local events (handled by the input box)
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
///
/// Terminal read errors are logged and treated as "no event".
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }

    let raw = match event::read() {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Event read failed: {}", e);
            return None;
        }
    };

    match raw {
        Event::Key(key_event) => {
            // Only presses; release/repeat arrive with keyboard enhancement enabled
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code, key_event.modifiers
            );
            map_key(key_event.modifiers, key_event.code)
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        // Ctrl+J inserts newline (ASCII LF; Ctrl+Enter sends this in most terminals)
        (KeyModifiers::CONTROL, KeyCode::Char('j')) => Some(TuiEvent::InputChar('\n')),
        (KeyModifiers::SHIFT, KeyCode::Enter) => Some(TuiEvent::InputChar('\n')),
        (KeyModifiers::CONTROL, _) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_basics() {
        assert_eq!(
            map_key(KeyModifiers::NONE, KeyCode::Char('a')),
            Some(TuiEvent::InputChar('a'))
        );
        assert_eq!(
            map_key(KeyModifiers::SHIFT, KeyCode::Char('A')),
            Some(TuiEvent::InputChar('A'))
        );
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Enter), Some(TuiEvent::Submit));
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Esc), Some(TuiEvent::Quit));
    }

    #[test]
    fn test_map_key_control_chords() {
        assert_eq!(
            map_key(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(TuiEvent::Quit)
        );
        assert_eq!(
            map_key(KeyModifiers::CONTROL, KeyCode::Char('j')),
            Some(TuiEvent::InputChar('\n'))
        );
        assert_eq!(map_key(KeyModifiers::CONTROL, KeyCode::Char('x')), None);
    }

    #[test]
    fn test_shift_enter_is_newline() {
        assert_eq!(
            map_key(KeyModifiers::SHIFT, KeyCode::Enter),
            Some(TuiEvent::InputChar('\n'))
        );
    }
}
