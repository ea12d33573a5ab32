//! # Actions
//!
//! Everything that can happen in Mood Mirror becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! Analyzer finishes? That's `Action::AnalysisComplete { ticket, mood }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what I/O to start.
//! No side effects here. Timers and tasks happen elsewhere.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```
//!
//! ## View state machine
//!
//! ```text
//!            Submit (text non-blank)
//!   Idle ───────────────────────────▶ Analyzing { ticket }
//!                                       │        ▲
//!        AnalysisComplete (ticket ==)   │        │ Submit (text non-blank)
//!                                       ▼        │
//!                                      Shown ────┘
//! ```
//!
//! Submit while analyzing or with blank text is a no-op. Completions whose
//! ticket doesn't match the in-flight one are dropped, so a late timer from
//! an earlier submission can never overwrite a newer result.

use log::{debug, info};

use crate::core::mood::MoodKey;
use crate::core::state::{Phase, Session, Ticket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Input text changed. Carries the full new contents.
    EditInput(String),
    /// User pressed the submit control.
    Submit,
    /// Analyzer finished for the given submission.
    AnalysisComplete { ticket: Ticket, mood: MoodKey },
    Quit,
}

/// Side effect requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start analyzing `text`; report back with the same `ticket`.
    Analyze { ticket: Ticket, text: String },
    Quit,
}

pub fn update(session: &mut Session, action: Action) -> Effect {
    match action {
        Action::EditInput(text) => {
            session.raw_input = text;
            Effect::None
        }
        Action::Submit => {
            if !session.can_submit() {
                debug!(
                    "Submit ignored (analyzing={}, blank={})",
                    session.is_analyzing(),
                    session.raw_input.trim().is_empty()
                );
                return Effect::None;
            }
            session.next_ticket += 1;
            let ticket = session.next_ticket;
            session.phase = Phase::Analyzing { ticket };
            info!("Analysis started (ticket={})", ticket);
            Effect::Analyze {
                ticket,
                text: session.raw_input.clone(),
            }
        }
        Action::AnalysisComplete { ticket, mood } => match session.phase {
            Phase::Analyzing { ticket: current } if current == ticket => {
                info!("Analysis complete (ticket={}): {}", ticket, mood);
                session.current_mood = Some(mood);
                session.phase = Phase::Shown;
                Effect::None
            }
            _ => {
                debug!(
                    "Dropping stale analysis result (ticket={}, phase={:?})",
                    ticket, session.phase
                );
                Effect::None
            }
        },
        Action::Quit => Effect::Quit,
    }
}
