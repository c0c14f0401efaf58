//! The assembled result of every aggregate query.

use serde::Serialize;

use super::activity::{DayBucket, HourBucket};
use super::sentiment::SentimentCounts;
use super::stats::BasicStats;
use super::words::WordCount;
use crate::core::filter::FilterConfig;

/// Occurrences of one emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: char,
    pub count: usize,
}

/// Read-only snapshot of the aggregates of one (possibly filtered) corpus.
///
/// Produced by [`Aggregator::report`](super::Aggregator::report). A new
/// filter means a new report; reports are never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    /// Filter the corpus was narrowed with before aggregation.
    pub filter: FilterConfig,
    pub stats: BasicStats,
    pub top_words: Vec<WordCount>,
    pub top_emojis: Vec<EmojiCount>,
    pub sentiment: SentimentCounts,
    /// Observed hours only, ascending.
    pub hourly: Vec<HourBucket>,
    /// Busiest hour, earliest on ties; `None` for an empty corpus.
    pub peak_hour: Option<HourBucket>,
    /// Monday to Sunday, zero-filled.
    pub daily: Vec<DayBucket>,
}

impl AggregateReport {
    /// Returns `true` if the report covers no records.
    pub fn is_empty(&self) -> bool {
        self.stats.total_messages == 0
    }
}
