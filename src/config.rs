//! Configuration types for parsing and reporting.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how raw export text becomes a corpus
//! - [`ReportConfig`] - table sizes and sentiment thresholds for reports
//! - [`SentimentThresholds`] - compound-score cut-offs for labels
//!
//! Data tables (stop words, emoji set, sentiment scorer) are injected into
//! [`Aggregator`](crate::analysis::Aggregator) directly rather than living
//! here.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{ParserConfig, ReportConfig};
//! use chatlens::parser::ChatParser;
//!
//! let parser = ChatParser::with_config(
//!     ParserConfig::new().with_join_continuation_lines(true),
//! );
//!
//! let report_config = ReportConfig::new()
//!     .with_top_emojis(5)
//!     .with_top_words(50);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for turning export text into a [`ChatCorpus`](crate::ChatCorpus).
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new().with_join_continuation_lines(true);
/// assert!(config.join_continuation_lines);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Append non-matching lines to the previous record instead of dropping
    /// them (default: false)
    pub join_continuation_lines: bool,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether continuation lines are joined to the preceding record.
    #[must_use]
    pub fn with_join_continuation_lines(mut self, join: bool) -> Self {
        self.join_continuation_lines = join;
        self
    }
}

/// Compound-score thresholds for sentiment labels.
///
/// A score strictly above `positive` is Positive, strictly below `negative`
/// is Negative, anything else is Neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentThresholds {
    /// Scores above this are Positive (default: 0.05)
    pub positive: f64,

    /// Scores below this are Negative (default: -0.05)
    pub negative: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self {
            positive: 0.05,
            negative: -0.05,
        }
    }
}

impl SentimentThresholds {
    /// Creates thresholds with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates symmetric thresholds `(-margin, margin)`.
    pub fn symmetric(margin: f64) -> Self {
        Self {
            positive: margin.abs(),
            negative: -margin.abs(),
        }
    }
}

/// Configuration for [`AggregateReport`](crate::analysis::AggregateReport) building.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ReportConfig;
///
/// let config = ReportConfig::new().with_top_emojis(3);
/// assert_eq!(config.top_emojis, 3);
/// assert_eq!(config.top_words, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of emojis in the frequency table (default: 10)
    pub top_emojis: usize,

    /// Number of words in the word-cloud frequency table (default: 100)
    pub top_words: usize,

    /// Sentiment label thresholds
    pub sentiment: SentimentThresholds,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_emojis: 10,
            top_words: 100,
            sentiment: SentimentThresholds::default(),
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size of the emoji frequency table.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Sets the size of the word frequency table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the sentiment thresholds.
    #[must_use]
    pub fn with_sentiment(mut self, thresholds: SentimentThresholds) -> Self {
        self.sentiment = thresholds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_default() {
        let config = ParserConfig::default();
        assert!(!config.join_continuation_lines);
    }

    #[test]
    fn test_report_config_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.top_emojis, 10);
        assert_eq!(config.top_words, 100);
        assert!((config.sentiment.positive - 0.05).abs() < f64::EPSILON);
        assert!((config.sentiment.negative + 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_config_builder() {
        let config = ReportConfig::new()
            .with_top_emojis(3)
            .with_top_words(7)
            .with_sentiment(SentimentThresholds::symmetric(0.2));
        assert_eq!(config.top_emojis, 3);
        assert_eq!(config.top_words, 7);
        assert!((config.sentiment.positive - 0.2).abs() < f64::EPSILON);
        assert!((config.sentiment.negative + 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_symmetric_uses_magnitude() {
        let t = SentimentThresholds::symmetric(-0.1);
        assert!(t.positive > 0.0);
        assert!(t.negative < 0.0);
    }

    #[test]
    fn test_config_serde() {
        let config = ReportConfig::new().with_top_emojis(5);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ReportConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
