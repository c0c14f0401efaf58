//! Headline numbers for a corpus.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::rank_by_count;
use crate::corpus::ChatCorpus;

/// Messages sent by one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorCount {
    pub author: String,
    pub messages: usize,
}

/// Record, author and word totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BasicStats {
    /// Number of records.
    pub total_messages: usize,
    /// Number of distinct authors.
    pub unique_authors: usize,
    /// Whitespace-separated tokens over all messages.
    pub total_words: usize,
    /// Earliest timestamp, `None` for an empty corpus.
    pub first: Option<NaiveDateTime>,
    /// Latest timestamp, `None` for an empty corpus.
    pub last: Option<NaiveDateTime>,
    /// Messages per author, most active first.
    pub per_author: Vec<AuthorCount>,
}

impl BasicStats {
    /// Computes the stats of `corpus`.
    pub fn of(corpus: &ChatCorpus) -> Self {
        let per_author: Vec<AuthorCount> = rank_by_count(corpus.iter().map(|r| r.author.as_str()))
            .into_iter()
            .map(|(author, messages)| AuthorCount {
                author: author.to_string(),
                messages,
            })
            .collect();
        let span = corpus.time_span();

        Self {
            total_messages: corpus.len(),
            unique_authors: per_author.len(),
            total_words: corpus.iter().map(|r| r.word_count()).sum(),
            first: span.map(|(first, _)| first),
            last: span.map(|(_, last)| last),
            per_author,
        }
    }

    /// Mean words per message, `0.0` for an empty corpus.
    pub fn words_per_message(&self) -> f64 {
        if self.total_messages == 0 {
            return 0.0;
        }
        self.total_words as f64 / self.total_messages as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ChatParser;

    #[test]
    fn test_basic_stats() {
        let corpus = ChatParser::new().parse_str(
            "2/1/24, 9:00 AM - Bob: one two\n\
             1/1/24, 9:00 AM - Alice: three\n\
             3/1/24, 9:00 AM - Alice: four  five\tsix",
        );
        let stats = BasicStats::of(&corpus);

        assert_eq!(stats.total_messages, 3);
        assert_eq!(stats.unique_authors, 2);
        assert_eq!(stats.total_words, 6);
        assert_eq!(stats.first.unwrap().to_string(), "2024-01-01 09:00:00");
        assert_eq!(stats.last.unwrap().to_string(), "2024-01-03 09:00:00");
        assert_eq!(stats.per_author[0].author, "Alice");
        assert_eq!(stats.per_author[0].messages, 2);
        assert!((stats.words_per_message() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_author_ties_keep_first_appearance() {
        let corpus = ChatParser::new().parse_str(
            "1/1/24, 9:00 AM - Zed: a\n\
             1/1/24, 9:01 AM - Amy: b",
        );
        let authors: Vec<String> = BasicStats::of(&corpus)
            .per_author
            .into_iter()
            .map(|a| a.author)
            .collect();
        assert_eq!(authors, vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_empty_corpus() {
        let stats = BasicStats::of(&ChatCorpus::default());
        assert_eq!(stats, BasicStats::default());
        assert_eq!(stats.words_per_message(), 0.0);
    }
}
