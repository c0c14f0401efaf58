//! Aggregate queries over a [`ChatCorpus`].
//!
//! Every query is independent and side-effect free: it borrows a corpus and
//! returns a fresh value. [`Aggregator`] holds the injected data tables and
//! thresholds so queries share one configuration.
//!
//! | Query | Method |
//! |-------|--------|
//! | Message, author and word totals | [`basic_stats`](Aggregator::basic_stats) |
//! | Word-cloud token stream | [`word_cloud_tokens`](Aggregator::word_cloud_tokens) |
//! | Most frequent words | [`word_frequencies`](Aggregator::word_frequencies) |
//! | Most frequent emoji | [`emoji_frequency`](Aggregator::emoji_frequency) |
//! | Sentiment labels | [`sentiment_counts`](Aggregator::sentiment_counts) |
//! | Activity by hour | [`hourly_histogram`](Aggregator::hourly_histogram) |
//! | Activity by weekday | [`daily_histogram`](Aggregator::daily_histogram) |
//!
//! # Example
//!
//! ```rust
//! use chatlens::analysis::{Aggregator, SentimentLabel};
//! use chatlens::parser::ChatParser;
//!
//! let corpus = ChatParser::new().parse_str(
//!     "12/5/23, 4:30 PM - Alice: I love this! 😊\n\
//!      12/5/23, 4:35 PM - Bob: This is terrible and awful",
//! );
//!
//! let aggregator = Aggregator::new();
//! let emojis = aggregator.emoji_frequency(&corpus);
//! assert_eq!(emojis[0].emoji, '😊');
//! assert_eq!(emojis[0].count, 1);
//!
//! let scores = aggregator.sentiment_scores(&corpus);
//! assert_eq!(scores[1].label, SentimentLabel::Negative);
//! ```

pub mod activity;
pub mod emoji;
pub mod report;
pub mod sentiment;
pub mod stats;
pub mod stopwords;
pub mod words;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

pub use activity::{DailyHistogram, DayBucket, HourBucket, HourlyHistogram};
pub use emoji::EmojiSet;
pub use report::{AggregateReport, EmojiCount};
pub use sentiment::{PolarityScorer, SentimentCounts, SentimentLabel, SentimentScore, VaderScorer};
pub use stats::{AuthorCount, BasicStats};
pub use stopwords::StopWords;
pub use words::WordCount;

use crate::config::ReportConfig;
use crate::core::filter::{FilterConfig, apply_filters};
use crate::corpus::ChatCorpus;

/// Counts items and orders them by descending count.
///
/// Ties keep the order in which items were first seen.
pub(crate) fn rank_by_count<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Copy,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(item, counts.len());
                counts.push((item, 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Runs aggregate queries with shared tables and thresholds.
///
/// Defaults: NLTK English stop words, Unicode emoji set, VADER scorer and
/// [`ReportConfig::default`].
pub struct Aggregator {
    config: ReportConfig,
    stop_words: StopWords,
    emoji_set: EmojiSet,
    scorer: Box<dyn PolarityScorer>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self {
            config: ReportConfig::default(),
            stop_words: StopWords::english(),
            emoji_set: EmojiSet::unicode(),
            scorer: Box::new(VaderScorer::new()),
        }
    }
}

impl fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregator")
            .field("config", &self.config)
            .field("stop_words", &self.stop_words.len())
            .field("emoji_set", &self.emoji_set)
            .finish_non_exhaustive()
    }
}

impl Aggregator {
    /// Creates an aggregator with the default tables.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    #[must_use]
    pub fn with_emoji_set(mut self, emoji_set: EmojiSet) -> Self {
        self.emoji_set = emoji_set;
        self
    }

    /// Replaces the polarity scorer.
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl PolarityScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn basic_stats(&self, corpus: &ChatCorpus) -> BasicStats {
        BasicStats::of(corpus)
    }

    /// Lower-cased message tokens with stop words removed, duplicates kept.
    pub fn word_cloud_tokens(&self, corpus: &ChatCorpus) -> Vec<String> {
        words::word_cloud_tokens(corpus, &self.stop_words)
    }

    /// The `top_words` most frequent word-cloud tokens.
    pub fn word_frequencies(&self, corpus: &ChatCorpus) -> Vec<WordCount> {
        words::top_words(&self.word_cloud_tokens(corpus), self.config.top_words)
    }

    /// Emoji characters of one message, in order.
    pub fn emojis_in(&self, message: &str) -> String {
        self.emoji_set.filter(message)
    }

    /// The `top_emojis` most frequent emoji, ties in first-seen order.
    pub fn emoji_frequency(&self, corpus: &ChatCorpus) -> Vec<EmojiCount> {
        let emojis = corpus
            .iter()
            .flat_map(|record| record.message.chars())
            .filter(|&c| self.emoji_set.contains(c));

        rank_by_count(emojis)
            .into_iter()
            .take(self.config.top_emojis)
            .map(|(emoji, count)| EmojiCount { emoji, count })
            .collect()
    }

    /// Compound score and label per record, in corpus order.
    pub fn sentiment_scores(&self, corpus: &ChatCorpus) -> Vec<SentimentScore> {
        corpus
            .iter()
            .map(|record| {
                let compound = self.scorer.compound(&record.message);
                SentimentScore {
                    compound,
                    label: SentimentLabel::classify(compound, &self.config.sentiment),
                }
            })
            .collect()
    }

    /// Records per sentiment label; sums to the record count.
    pub fn sentiment_counts(&self, corpus: &ChatCorpus) -> SentimentCounts {
        self.sentiment_scores(corpus)
            .into_iter()
            .map(|score| score.label)
            .collect()
    }

    pub fn hourly_histogram(&self, corpus: &ChatCorpus) -> HourlyHistogram {
        HourlyHistogram::from_records(corpus)
    }

    pub fn daily_histogram(&self, corpus: &ChatCorpus) -> DailyHistogram {
        DailyHistogram::from_records(corpus)
    }

    /// Runs every query over `corpus` as is.
    pub fn report(&self, corpus: &ChatCorpus) -> AggregateReport {
        self.build_report(corpus, FilterConfig::default())
    }

    /// Narrows `corpus` with `filter`, then runs every query.
    pub fn report_filtered(&self, corpus: &ChatCorpus, filter: &FilterConfig) -> AggregateReport {
        let view = apply_filters(corpus, filter);
        debug!(
            total = corpus.len(),
            selected = view.len(),
            author = %filter.author,
            "applied filters"
        );
        self.build_report(&view, filter.clone())
    }

    fn build_report(&self, corpus: &ChatCorpus, filter: FilterConfig) -> AggregateReport {
        let hourly = self.hourly_histogram(corpus);
        AggregateReport {
            filter,
            stats: self.basic_stats(corpus),
            top_words: self.word_frequencies(corpus),
            top_emojis: self.emoji_frequency(corpus),
            sentiment: self.sentiment_counts(corpus),
            hourly: hourly.observed(),
            peak_hour: hourly.peak(),
            daily: self.daily_histogram(corpus).buckets(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SentimentThresholds;
    use crate::parser::ChatParser;

    fn corpus(text: &str) -> ChatCorpus {
        ChatParser::new().parse_str(text)
    }

    #[test]
    fn test_rank_by_count_stable() {
        let ranked = rank_by_count(['x', 'y', 'y', 'z', 'x', 'w']);
        assert_eq!(ranked, vec![('x', 2), ('y', 2), ('z', 1), ('w', 1)]);
    }

    #[test]
    fn test_emoji_frequency_top_n() {
        let c = corpus(
            "1/1/24, 9:00 AM - A: 😂😂 🎉\n\
             1/1/24, 9:01 AM - B: 🎉 ❤ 😂\n\
             1/1/24, 9:02 AM - A: 👍",
        );
        let aggregator = Aggregator::new().with_config(ReportConfig::new().with_top_emojis(3));
        let top = aggregator.emoji_frequency(&c);
        assert_eq!(
            top,
            vec![
                EmojiCount { emoji: '😂', count: 3 },
                EmojiCount { emoji: '🎉', count: 2 },
                EmojiCount { emoji: '❤', count: 1 },
            ]
        );
    }

    #[test]
    fn test_emojis_in_message() {
        assert_eq!(Aggregator::new().emojis_in("I love this! 😊"), "😊");
    }

    #[test]
    fn test_sentiment_with_injected_scorer() {
        let c = corpus(
            "1/1/24, 9:00 AM - A: good\n\
             1/1/24, 9:01 AM - A: bad\n\
             1/1/24, 9:02 AM - A: meh",
        );
        let aggregator = Aggregator::new().with_scorer(|text: &str| match text {
            "good" => 0.6,
            "bad" => -0.6,
            _ => 0.0,
        });
        let counts = aggregator.sentiment_counts(&c);
        assert_eq!((counts.positive, counts.neutral, counts.negative), (1, 1, 1));

        let strict = aggregator
            .with_config(ReportConfig::new().with_sentiment(SentimentThresholds::symmetric(0.7)));
        assert_eq!(strict.sentiment_counts(&c).neutral, 3);
    }

    #[test]
    fn test_custom_stop_words() {
        let c = corpus("1/1/24, 9:00 AM - A: the lol cat");
        let tokens = Aggregator::new()
            .with_stop_words(StopWords::from_words(["lol"]))
            .word_cloud_tokens(&c);
        assert_eq!(tokens, vec!["the", "cat"]);
    }

    #[test]
    fn test_report_filtered_records_filter() {
        let c = corpus(
            "1/1/24, 9:00 AM - Alice: hello there\n\
             1/1/24, 10:00 AM - Bob: hi",
        );
        let filter = FilterConfig::new().with_author("Bob");
        let report = Aggregator::new().report_filtered(&c, &filter);
        assert_eq!(report.filter, filter);
        assert_eq!(report.stats.total_messages, 1);
        assert_eq!(report.hourly, vec![HourBucket { hour: 10, count: 1 }]);
        assert_eq!(report.peak_hour, Some(HourBucket { hour: 10, count: 1 }));
        assert_eq!(report.daily.len(), 7);
    }

    #[test]
    fn test_empty_corpus_report() {
        let report = Aggregator::new().report(&ChatCorpus::default());
        assert!(report.is_empty());
        assert!(report.top_words.is_empty());
        assert!(report.top_emojis.is_empty());
        assert_eq!(report.sentiment.total(), 0);
        assert!(report.hourly.is_empty());
        assert_eq!(report.peak_hour, None);
        assert!(report.daily.iter().all(|d| d.count == 0));
    }
}
