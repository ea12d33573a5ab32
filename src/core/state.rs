//! # Session State
//!
//! Core state for one Mood Mirror session. Domain logic only, no TUI types.
//! Presentation state (cursor position, spinner frame) lives in the `tui` module.
//!
//! ```text
//! Session
//! ├── raw_input: String            // text field contents
//! ├── phase: Phase                 // Idle | Analyzing { ticket } | Shown
//! ├── current_mood: Option<MoodKey>// last classification result
//! ├── next_ticket: u64             // submission counter
//! └── history: Vec<HistoryEntry>   // read-only past check-ins
//! ```
//!
//! `is_analyzing()` and `result_visible()` are derived from `phase`, so they
//! can never both be true, and a visible result always has a mood behind it.
//! State changes only happen through `update(session, action)` in action.rs.

use std::time::Duration;

use crate::core::history::HistoryEntry;
use crate::core::mood::{self, MoodKey, MoodProfile};

/// Default simulated latency before a result is shown.
/// The analyzer owns the delay; `Session` only sees the completion.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(1500);

/// Identifies one submission. Only the completion carrying the latest
/// ticket is applied.
pub type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Analyzing { ticket: Ticket },
    Shown,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub raw_input: String,
    pub phase: Phase,
    pub current_mood: Option<MoodKey>,
    pub next_ticket: Ticket,
    pub history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new(history: Vec<HistoryEntry>) -> Self {
        Self {
            raw_input: String::new(),
            phase: Phase::Idle,
            current_mood: None,
            next_ticket: 0,
            history,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, Phase::Analyzing { .. })
    }

    pub fn result_visible(&self) -> bool {
        self.phase == Phase::Shown && self.current_mood.is_some()
    }

    /// The profile to render, present only while the result is visible.
    pub fn visible_profile(&self) -> Option<&'static MoodProfile> {
        if self.phase == Phase::Shown {
            self.current_mood.map(mood::lookup)
        } else {
            None
        }
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_analyzing() && !self.raw_input.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_session;

    use super::*;

    #[test]
    fn test_session_new_defaults() {
        let session = test_session();
        assert!(session.raw_input.is_empty());
        assert_eq!(session.phase, Phase::Idle);
        assert!(session.current_mood.is_none());
        assert!(!session.is_analyzing());
        assert!(!session.result_visible());
        assert!(session.visible_profile().is_none());
    }

    #[test]
    fn test_can_submit_requires_text() {
        let mut session = test_session();
        assert!(!session.can_submit());

        session.raw_input = "  \n\t ".to_string();
        assert!(!session.can_submit());

        session.raw_input = "ok".to_string();
        assert!(session.can_submit());
    }

    #[test]
    fn test_can_submit_false_while_analyzing() {
        let mut session = test_session();
        session.raw_input = "hello".to_string();
        session.phase = Phase::Analyzing { ticket: 1 };
        assert!(!session.can_submit());
    }

    #[test]
    fn test_mood_hidden_while_analyzing() {
        let mut session = test_session();
        session.current_mood = Some(MoodKey::Sad);
        session.phase = Phase::Analyzing { ticket: 2 };
        assert!(session.is_analyzing());
        assert!(!session.result_visible());
        assert!(session.visible_profile().is_none());
    }
}
