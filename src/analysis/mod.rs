pub mod analyzer;
pub mod keyword;

pub use analyzer::MoodAnalyzer;
pub use keyword::{KeywordAnalyzer, classify};
