//! Ordered collection of parsed chat records.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::record::ChatRecord;

/// Sentinel author choice meaning "no author filter".
pub const ALL_AUTHORS: &str = "All";

/// The records of one chat export, in order of appearance in the source.
///
/// Order of appearance is not guaranteed to be chronological: exports can
/// contain clock jumps. Nothing in the crate sorts a corpus.
///
/// # Example
///
/// ```
/// use chatlens::parser::ChatParser;
///
/// let corpus = ChatParser::new().parse_str(
///     "12/5/23, 4:30 PM - Alice: Hi\n12/5/23, 4:31 PM - Bob: Hey\n12/5/23, 4:32 PM - Alice: :)",
/// );
///
/// assert_eq!(corpus.len(), 3);
/// assert_eq!(corpus.authors(), vec!["Alice", "Bob"]);
/// assert_eq!(corpus.author_choices(), vec!["All", "Alice", "Bob"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatCorpus {
    records: Vec<ChatRecord>,
}

impl ChatCorpus {
    /// Creates a corpus from records already in source order.
    pub fn new(records: Vec<ChatRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the corpus has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChatRecord> {
        self.records.iter()
    }

    /// Returns the records as a slice.
    pub fn records(&self) -> &[ChatRecord] {
        &self.records
    }

    /// Consumes the corpus and returns its records.
    pub fn into_records(self) -> Vec<ChatRecord> {
        self.records
    }

    /// Distinct authors in order of first appearance.
    pub fn authors(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(ChatRecord::author)
            .filter(|author| seen.insert(*author))
            .collect()
    }

    /// Author choices for a selection control: [`ALL_AUTHORS`] followed by
    /// [`authors`](Self::authors).
    pub fn author_choices(&self) -> Vec<&str> {
        std::iter::once(ALL_AUTHORS)
            .chain(self.authors())
            .collect()
    }

    /// Earliest and latest timestamp, or `None` for an empty corpus.
    pub fn time_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first = self.records.iter().map(ChatRecord::timestamp).min()?;
        let last = self.records.iter().map(ChatRecord::timestamp).max()?;
        Some((first, last))
    }
}

impl From<Vec<ChatRecord>> for ChatCorpus {
    fn from(records: Vec<ChatRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<ChatRecord> for ChatCorpus {
    fn from_iter<I: IntoIterator<Item = ChatRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ChatCorpus {
    type Item = ChatRecord;
    type IntoIter = std::vec::IntoIter<ChatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChatCorpus {
    type Item = &'a ChatRecord;
    type IntoIter = std::slice::Iter<'a, ChatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
