//! Stop-word tables for the word-cloud token stream.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::ChatlensError;

/// The NLTK English stop-word list.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// A set of words excluded from the word-cloud stream.
///
/// Membership is exact: tokens are lower-cased before lookup but punctuation
/// is kept, so `"this!"` is not a stop word even though `"this"` is.
///
/// # Example
///
/// ```rust
/// use chatlens::analysis::StopWords;
///
/// let english = StopWords::english();
/// assert!(english.contains("the"));
/// assert!(!english.contains("coffee"));
///
/// let custom = StopWords::from_words(["lol", "ok"]);
/// assert!(custom.contains("lol"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The NLTK English list.
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOP_WORDS.iter().copied())
    }

    /// An empty table: nothing is filtered.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds a table from words; each is lower-cased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Parses a word list: one word per line, blank lines and `#` comments
    /// ignored.
    pub fn parse(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Loads a word list file in the [`parse`](Self::parse) layout.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file cannot be read, or
    /// [`ChatlensError::InvalidFormat`] if it lists no words.
    pub fn from_file(path: &Path) -> Result<Self, ChatlensError> {
        let content = fs::read_to_string(path)?;
        let table = Self::parse(&content);
        if table.is_empty() {
            return Err(ChatlensError::invalid_format(
                "stop words",
                format!("{} contains no words", path.display()),
            ));
        }
        Ok(table)
    }

    /// Adds more words to the table.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(Self::from_words(words).words);
        self
    }

    /// Returns `true` if `token` is in the table.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
