//! Integration tests for the full parse -> filter -> aggregate pipeline

use chatlens::analysis::{DayBucket, EmojiCount, HourBucket};
use chatlens::prelude::*;
use std::fs;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();

fn fixtures_dir() -> &'static str {
    "tests/fixtures"
}

/// A week of chat between three people, with the usual export noise.
const GROUP_CHAT: &str = "\
Messages and calls are end-to-end encrypted. No one outside of this chat can read them.
8/1/24, 9:15 AM - Alice created group \"Weekend\"
8/1/24, 9:15 AM - Alice: Good morning everyone! ☀️
8/1/24, 9:17 AM - Bob: Morning! I love this group 😊
8/1/24, 9:20 AM - Carol: This is terrible and awful, my train is late again
second line of Carol's rant
9/1/24, 6:45 PM - Bob: Pizza tonight? 🍕🍕
9/1/24, 6:46 PM - Alice: Yes!! 🍕
10/1/2024, 11:05 PM - Carol: note: bring plates
31/2/24, 11:06 PM - Bob: this row has an impossible date
13/1/24, 12:30 PM - Alice: Happy weekend 😊🎉
14/1/24, 12:00 AM - Bob: <Media omitted>
";

fn ensure_fixtures() {
    INIT.call_once(|| {
        let dir = fixtures_dir();
        if !Path::new(dir).exists() {
            fs::create_dir_all(dir).unwrap();
        }
        fs::write(format!("{dir}/group_chat.txt"), GROUP_CHAT).unwrap();
        fs::write(format!("{dir}/group_chat_crlf.txt"), GROUP_CHAT.replace('\n', "\r\n")).unwrap();
    });
}

fn group_corpus() -> ChatCorpus {
    ensure_fixtures();
    ChatParser::new()
        .parse(Path::new(&format!("{}/group_chat.txt", fixtures_dir())))
        .unwrap()
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_parse_group_chat() {
    let corpus = group_corpus();

    assert_eq!(corpus.len(), 8);
    assert_eq!(corpus.authors(), vec!["Alice", "Bob", "Carol"]);
    assert_eq!(corpus.author_choices(), vec!["All", "Alice", "Bob", "Carol"]);

    let first = &corpus.records()[0];
    assert_eq!(first.author, "Alice");
    assert_eq!(first.message, "Good morning everyone! ☀️");
    assert_eq!(first.timestamp.to_string(), "2024-01-08 09:15:00");

    // Four-digit year and colon inside the message
    let plates = &corpus.records()[5];
    assert_eq!(plates.message, "note: bring plates");
    assert_eq!(plates.timestamp.to_string(), "2024-01-10 23:05:00");

    // Midnight is hour zero
    assert_eq!(corpus.records()[7].hour(), 0);
}

#[test]
fn test_parse_example_line() {
    let corpus = ChatParser::new().parse_str("12/5/23, 4:30 PM - Alice: Good morning!");
    assert_eq!(corpus.len(), 1);
    let record = &corpus.records()[0];
    assert_eq!(record.timestamp.to_string(), "2023-05-12 16:30:00");
    assert_eq!(record.author, "Alice");
    assert_eq!(record.message, "Good morning!");
}

#[test]
fn test_not_a_chat_line() {
    assert!(ChatParser::new().parse_str("not a chat line").is_empty());
}

#[test]
fn test_crlf_export_matches_lf_export() {
    ensure_fixtures();
    let crlf = ChatParser::new()
        .parse(Path::new(&format!("{}/group_chat_crlf.txt", fixtures_dir())))
        .unwrap();
    assert_eq!(crlf, group_corpus());
}

#[test]
fn test_parse_is_deterministic() {
    let parser = ChatParser::new();
    assert_eq!(parser.parse_str(GROUP_CHAT), parser.parse_str(GROUP_CHAT));
}

#[test]
fn test_join_multiline_keeps_rant_together() {
    let parser = ChatParser::with_config(ParserConfig::new().with_join_continuation_lines(true));
    let corpus = parser.parse_str(GROUP_CHAT);
    assert_eq!(corpus.len(), 8);
    assert!(corpus.records()[2].message.ends_with("\nsecond line of Carol's rant"));
}

// =========================================================================
// Filtering
// =========================================================================

#[test]
fn test_filter_all_is_identity() {
    let corpus = group_corpus();
    let all = apply_filters(&corpus, &FilterConfig::new().with_author("All"));
    assert_eq!(all, corpus);
}

#[test]
fn test_filter_unknown_author_is_empty() {
    let corpus = group_corpus();
    let report = Aggregator::new().report_filtered(&corpus, &FilterConfig::new().with_author("Dave"));
    assert!(report.is_empty());
    assert_eq!(report.sentiment.total(), 0);
    assert_eq!(report.daily.len(), 7);
}

#[test]
fn test_filter_author_and_dates() -> chatlens::Result<()> {
    let corpus = group_corpus();
    let filter = FilterConfig::new()
        .with_author("Bob")
        .with_date_from("2024-01-09")?
        .with_date_to("2024-01-13")?;
    let view = apply_filters(&corpus, &filter);
    assert_eq!(view.len(), 1);
    assert_eq!(view.records()[0].message, "Pizza tonight? 🍕🍕");
    Ok(())
}

// =========================================================================
// Aggregation
// =========================================================================

#[test]
fn test_basic_stats() {
    let stats = Aggregator::new().basic_stats(&group_corpus());
    assert_eq!(stats.total_messages, 8);
    assert_eq!(stats.unique_authors, 3);
    assert_eq!(stats.total_words, 4 + 6 + 10 + 3 + 2 + 3 + 3 + 2);
    assert_eq!(stats.per_author[0].author, "Alice");
    assert_eq!(stats.per_author[0].messages, 3);
}

#[test]
fn test_emoji_table() {
    let aggregator = Aggregator::new();
    let top = aggregator.emoji_frequency(&group_corpus());
    assert_eq!(top[0], EmojiCount { emoji: '🍕', count: 3 });
    assert_eq!(top[1], EmojiCount { emoji: '😊', count: 2 });
    assert!(top.len() <= 10);

    let single = ChatParser::new().parse_str("1/1/24, 9:00 AM - A: I love this! 😊");
    assert_eq!(
        aggregator.emoji_frequency(&single),
        vec![EmojiCount { emoji: '😊', count: 1 }]
    );
    assert!(!aggregator.word_cloud_tokens(&single).contains(&"this".to_string()));
}

#[test]
fn test_sentiment_labels() {
    let corpus = group_corpus();
    let aggregator = Aggregator::new();
    let scores = aggregator.sentiment_scores(&corpus);
    assert_eq!(scores.len(), corpus.len());

    // "This is terrible and awful, my train is late again"
    assert_eq!(scores[2].label, SentimentLabel::Negative);
    // "Morning! I love this group 😊"
    assert_eq!(scores[1].label, SentimentLabel::Positive);

    let counts = aggregator.sentiment_counts(&corpus);
    assert_eq!(counts.total(), corpus.len());

    let terrible = ChatParser::new().parse_str("1/1/24, 9:00 AM - A: This is terrible and awful");
    assert_eq!(aggregator.sentiment_counts(&terrible).negative, 1);
}

#[test]
fn test_activity_histograms() {
    let corpus = group_corpus();
    let aggregator = Aggregator::new();

    let hourly = aggregator.hourly_histogram(&corpus).observed();
    assert!(hourly.iter().all(|b| b.hour < 24));
    assert!(hourly.windows(2).all(|w| w[0].hour < w[1].hour));
    assert_eq!(hourly[0], HourBucket { hour: 0, count: 1 });

    let daily = aggregator.daily_histogram(&corpus).buckets();
    assert_eq!(daily.len(), 7);
    // 8 January 2024 was a Monday
    assert_eq!(daily[0], DayBucket { day: "Monday", count: 3 });
    assert_eq!(daily[3], DayBucket { day: "Thursday", count: 0 });
    assert_eq!(daily[6], DayBucket { day: "Sunday", count: 1 });
}

#[test]
fn test_report_recomputed_per_filter() {
    let corpus = group_corpus();
    let aggregator = Aggregator::new();

    let everyone = aggregator.report(&corpus);
    let alice = aggregator.report_filtered(&corpus, &FilterConfig::new().with_author("Alice"));

    assert_eq!(everyone.stats.total_messages, 8);
    assert_eq!(alice.stats.total_messages, 3);
    assert_eq!(alice.stats.unique_authors, 1);
    assert_eq!(alice.filter.author, AuthorFilter::Author("Alice".into()));
    assert_eq!(everyone.peak_hour, Some(HourBucket { hour: 9, count: 3 }));
    // Alice's hours all tie at one message; the earliest wins
    assert_eq!(alice.peak_hour, Some(HourBucket { hour: 9, count: 1 }));
    // The source corpus is untouched
    assert_eq!(corpus.len(), 8);
}
