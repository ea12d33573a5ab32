//! Past check-ins shown in the "Recent History" panel.
//!
//! Entries are supplied once at startup (built-in defaults or `[[history]]`
//! in the config file) and never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

impl Intensity {
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryEntry {
    /// Calendar date, `YYYY-MM-DD` in TOML/JSON
    pub date: NaiveDate,
    /// Free-form label; not restricted to the five classifier moods
    pub emotion: String,
    pub intensity: Intensity,
}

impl HistoryEntry {
    fn new(year: i32, month: u32, day: u32, emotion: &str, intensity: Intensity) -> Option<Self> {
        Some(Self {
            date: NaiveDate::from_ymd_opt(year, month, day)?,
            emotion: emotion.to_string(),
            intensity,
        })
    }
}

/// Built-in history used when the config file doesn't provide one.
/// Newest first.
pub fn default_history() -> Vec<HistoryEntry> {
    [
        HistoryEntry::new(2026, 1, 16, "Calm", Intensity::Moderate),
        HistoryEntry::new(2026, 1, 15, "Anxious", Intensity::High),
        HistoryEntry::new(2026, 1, 14, "Happy", Intensity::Moderate),
        HistoryEntry::new(2026, 1, 13, "Neutral", Intensity::Low),
    ]
    .into_iter()
    .flatten()
    .collect()
}
