//! Keyword-based mood detection.
//!
//! A stand-in for a real analysis backend: four case-insensitive substring
//! alternations tried in priority order, first match wins.

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use regex::Regex;

use super::analyzer::MoodAnalyzer;
use crate::core::mood::MoodKey;

/// Patterns in priority order. Anything unmatched is `Neutral`.
const PATTERNS: [(MoodKey, &str); 4] = [
    (MoodKey::Anxious, r"(?i)anxious|worried|nervous|uneasy"),
    (MoodKey::Stressed, r"(?i)stress|overwhelm|pressure|busy"),
    (MoodKey::Sad, r"(?i)sad|down|low|unhappy|depressed"),
    (MoodKey::Happy, r"(?i)happy|joy|excited|great|good|wonderful"),
];

/// Compiled once, used for every classification.
static COMPILED: OnceLock<Vec<(MoodKey, Regex)>> = OnceLock::new();

fn compiled_patterns() -> &'static [(MoodKey, Regex)] {
    COMPILED.get_or_init(|| {
        PATTERNS
            .iter()
            .map(|(key, pattern)| {
                let regex = Regex::new(pattern).expect("mood pattern must compile");
                (*key, regex)
            })
            .collect()
    })
}

/// Maps free text to a mood. Total and deterministic.
pub fn classify(text: &str) -> MoodKey {
    compiled_patterns()
        .iter()
        .find(|(_, regex)| regex.is_match(text))
        .map(|(key, _)| *key)
        .unwrap_or(MoodKey::Neutral)
}

/// `classify()` behind a fixed simulated delay.
pub struct KeywordAnalyzer {
    delay: Duration,
}

impl KeywordAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl MoodAnalyzer for KeywordAnalyzer {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn analyze(&self, text: &str) -> MoodKey {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let mood = classify(text);
        debug!("Keyword analyzer: {} chars -> {}", text.chars().count(), mood);
        mood
    }
}
