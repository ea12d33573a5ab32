//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::analysis::MoodAnalyzer;
use crate::core::history::default_history;
use crate::core::mood::MoodKey;
use crate::core::state::Session;

/// An analyzer that always answers with the same mood, immediately.
pub struct FixedAnalyzer(pub MoodKey);

#[async_trait]
impl MoodAnalyzer for FixedAnalyzer {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn analyze(&self, _text: &str) -> MoodKey {
        self.0
    }
}

/// Creates a test Session with the default history.
pub fn test_session() -> Session {
    Session::new(default_history())
}
