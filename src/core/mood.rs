//! # Mood Table
//!
//! The five moods Mood Mirror recognizes and the canned payload shown for each.
//!
//! ```text
//! MoodKey ──lookup()──▶ &'static MoodProfile
//!                        ├── emotion: "Anxious"
//!                        ├── tone: Tone::Amber
//!                        ├── response: "It's okay to feel anxious..."
//!                        └── action: CopingAction { kind, title, description }
//! ```
//!
//! The table is closed over `MoodKey`, so `lookup()` can never miss.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five emotion categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKey {
    Anxious,
    Stressed,
    Sad,
    Happy,
    Neutral,
}

impl MoodKey {
    pub const ALL: [MoodKey; 5] = [
        MoodKey::Anxious,
        MoodKey::Stressed,
        MoodKey::Sad,
        MoodKey::Happy,
        MoodKey::Neutral,
    ];

    /// Lowercase key as used in config and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            MoodKey::Anxious => "anxious",
            MoodKey::Stressed => "stressed",
            MoodKey::Sad => "sad",
            MoodKey::Happy => "happy",
            MoodKey::Neutral => "neutral",
        }
    }
}

impl fmt::Display for MoodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color family for a mood. Adapters map this to their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Amber,
    Red,
    Blue,
    Green,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Breathing,
    Prompt,
}

impl ActionKind {
    pub fn icon(self) -> &'static str {
        match self {
            ActionKind::Breathing => "🫁",
            ActionKind::Prompt => "💭",
        }
    }
}

/// A suggested coping exercise or reflection prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopingAction {
    pub kind: ActionKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// Full display payload for a mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodProfile {
    pub key: MoodKey,
    /// Display label, e.g. "Anxious"
    pub emotion: &'static str,
    pub tone: Tone,
    pub response: &'static str,
    pub action: CopingAction,
}

static ANXIOUS: MoodProfile = MoodProfile {
    key: MoodKey::Anxious,
    emotion: "Anxious",
    tone: Tone::Amber,
    response: "It's okay to feel anxious. Your feelings are valid, and they're temporary.",
    action: CopingAction {
        kind: ActionKind::Breathing,
        title: "Box Breathing Exercise",
        description: "Breathe in for 4, hold for 4, out for 4, hold for 4. Repeat 3 times.",
    },
};

static STRESSED: MoodProfile = MoodProfile {
    key: MoodKey::Stressed,
    emotion: "Stressed",
    tone: Tone::Red,
    response: "Stress is your body's way of signaling. Let's take a moment to reset.",
    action: CopingAction {
        kind: ActionKind::Breathing,
        title: "4-7-8 Breathing",
        description: "Breathe in for 4 counts, hold for 7, exhale slowly for 8. Feel the tension release.",
    },
};

static SAD: MoodProfile = MoodProfile {
    key: MoodKey::Sad,
    emotion: "Sad",
    tone: Tone::Blue,
    response: "Sadness is a natural emotion. It's okay to feel this way and take time for yourself.",
    action: CopingAction {
        kind: ActionKind::Prompt,
        title: "Gentle Reflection",
        description: "What's one small thing that brought you comfort recently? It can be anything.",
    },
};

static HAPPY: MoodProfile = MoodProfile {
    key: MoodKey::Happy,
    emotion: "Happy",
    tone: Tone::Green,
    response: "That's wonderful! Savoring positive moments helps build resilience.",
    action: CopingAction {
        kind: ActionKind::Prompt,
        title: "Gratitude Moment",
        description: "Take a moment to appreciate what made you feel this way. What contributed to this feeling?",
    },
};

static NEUTRAL: MoodProfile = MoodProfile {
    key: MoodKey::Neutral,
    emotion: "Neutral",
    tone: Tone::Gray,
    response: "Finding balance is important. Neutrality can be a peaceful state.",
    action: CopingAction {
        kind: ActionKind::Prompt,
        title: "Check-in",
        description: "How does your body feel right now? Notice any sensations without judgment.",
    },
};

/// Returns the display payload for a mood.
pub fn lookup(key: MoodKey) -> &'static MoodProfile {
    match key {
        MoodKey::Anxious => &ANXIOUS,
        MoodKey::Stressed => &STRESSED,
        MoodKey::Sad => &SAD,
        MoodKey::Happy => &HAPPY,
        MoodKey::Neutral => &NEUTRAL,
    }
}

/// Picks the result emoji by exact display label.
///
/// Matches on the label rather than the key so any label outside the table
/// (e.g. a history entry's "Calm") simply gets no emoji.
pub fn emoji_for_label(label: &str) -> Option<&'static str> {
    match label {
        "Happy" => Some("😊"),
        "Anxious" => Some("😰"),
        "Stressed" => Some("😣"),
        "Sad" => Some("😢"),
        "Neutral" => Some("😐"),
        _ => None,
    }
}
