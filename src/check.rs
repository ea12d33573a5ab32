//! # Headless Check-in
//!
//! Runs one submission through the same `update()` state machine the TUI
//! uses, without a terminal. Backs the `--check <TEXT>` flag.

use log::info;
use serde::Serialize;

use crate::analysis::MoodAnalyzer;
use crate::core::action::{Action, Effect, update};
use crate::core::mood::{MoodProfile, emoji_for_label};
use crate::core::state::Session;

/// Result of a headless check-in, as printed by `--check`.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub input: &'a str,
    pub emoji: Option<&'static str>,
    #[serde(flatten)]
    pub profile: &'static MoodProfile,
}

impl<'a> CheckReport<'a> {
    pub fn new(input: &'a str, profile: &'static MoodProfile) -> Self {
        Self {
            input,
            emoji: emoji_for_label(profile.emotion),
            profile,
        }
    }

    /// Plain-text rendering, laid out like the result region of the TUI.
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        out.push_str("Detected Emotion: ");
        out.push_str(self.profile.emotion);
        if let Some(emoji) = self.emoji {
            out.push(' ');
            out.push_str(emoji);
        }
        out.push_str("\n\n");
        out.push_str(self.profile.response);
        out.push_str("\n\n");
        out.push_str(self.profile.action.kind.icon());
        out.push(' ');
        out.push_str(self.profile.action.title);
        out.push('\n');
        out.push_str(self.profile.action.description);
        out.push('\n');
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Submits `text` and waits for the analyzer.
///
/// Returns `None` when the submission is rejected (blank input), mirroring the
/// disabled submit control.
pub async fn run_check(
    session: &mut Session,
    analyzer: &dyn MoodAnalyzer,
    text: &str,
) -> Option<&'static MoodProfile> {
    update(session, Action::EditInput(text.to_string()));
    match update(session, Action::Submit) {
        Effect::Analyze { ticket, text } => {
            info!("Headless check-in via {} analyzer", analyzer.name());
            let mood = analyzer.analyze(&text).await;
            update(session, Action::AnalysisComplete { ticket, mood });
            session.visible_profile()
        }
        Effect::None | Effect::Quit => None,
    }
}
