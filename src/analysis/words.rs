//! Word-cloud token stream.

use serde::Serialize;

use super::StopWords;
use super::rank_by_count;
use crate::corpus::ChatCorpus;

/// Occurrences of one word-cloud token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Lower-cased, whitespace-split tokens of every message, minus stop words.
///
/// Duplicates are retained; order follows the corpus.
pub fn word_cloud_tokens(corpus: &ChatCorpus, stop_words: &StopWords) -> Vec<String> {
    corpus
        .iter()
        .flat_map(|record| {
            record
                .message
                .to_lowercase()
                .split_whitespace()
                .filter(|token| !stop_words.contains(token))
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// The `limit` most frequent tokens, ties in first-seen order.
pub fn top_words(tokens: &[String], limit: usize) -> Vec<WordCount> {
    rank_by_count(tokens.iter().map(String::as_str))
        .into_iter()
        .take(limit)
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ChatParser;

    #[test]
    fn test_stop_words_removed_exactly() {
        let corpus = ChatParser::new().parse_str("1/1/24, 9:00 AM - A: I love this! 😊");
        let tokens = word_cloud_tokens(&corpus, &StopWords::english());
        assert_eq!(tokens, vec!["love", "this!", "😊"]);
        assert!(!tokens.iter().any(|t| t == "this"));
    }

    #[test]
    fn test_lowercase_and_duplicates() {
        let corpus = ChatParser::new().parse_str(
            "1/1/24, 9:00 AM - A: Pizza PIZZA\n\
             1/1/24, 9:01 AM - B: the pizza",
        );
        let tokens = word_cloud_tokens(&corpus, &StopWords::english());
        assert_eq!(tokens, vec!["pizza", "pizza", "pizza"]);
    }

    #[test]
    fn test_top_words_ranking() {
        let tokens: Vec<String> = ["b", "a", "a", "c", "b", "d"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let top = top_words(&tokens, 3);
        let words: Vec<(&str, usize)> = top.iter().map(|w| (w.word.as_str(), w.count)).collect();
        assert_eq!(words, vec![("b", 2), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_empty() {
        let tokens = word_cloud_tokens(&ChatCorpus::default(), &StopWords::english());
        assert!(tokens.is_empty());
        assert!(top_words(&tokens, 10).is_empty());
    }
}
