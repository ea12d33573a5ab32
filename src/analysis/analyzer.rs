use async_trait::async_trait;

use crate::core::mood::MoodKey;

/// Turns free text into a mood.
///
/// The state machine only sees this trait, so the keyword matcher can be
/// swapped for a real inference backend without touching `core`.
/// Implementations own any latency they introduce.
#[async_trait]
pub trait MoodAnalyzer: Send + Sync {
    /// Returns the name of the analyzer.
    fn name(&self) -> &str;

    /// Classifies `text`. Never called with blank input.
    async fn analyze(&self, text: &str) -> MoodKey;
}
