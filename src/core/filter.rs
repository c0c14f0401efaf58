//! Narrow a corpus by author and date range.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for deriving a filtered view of a [`ChatCorpus`].
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Author | [`with_author`](FilterConfig::with_author) | Records from one author, or `"All"` |
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//!
//! # Examples
//!
//! ## Filter by Author
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::parser::ChatParser;
//!
//! let corpus = ChatParser::new().parse_str(
//!     "1/1/24, 9:00 AM - Alice: Hello\n\
//!      1/1/24, 9:01 AM - Bob: Hi there\n\
//!      1/1/24, 9:02 AM - Alice: How are you?",
//! );
//!
//! let alice = apply_filters(&corpus, &FilterConfig::new().with_author("Alice"));
//! assert_eq!(alice.len(), 2);
//!
//! // "All" is the whole corpus
//! let all = apply_filters(&corpus, &FilterConfig::new().with_author("All"));
//! assert_eq!(all, corpus);
//! ```
//!
//! ## Filter by Date Range
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::parser::ChatParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let corpus = ChatParser::new().parse_str(
//!     "1/1/24, 9:00 AM - Alice: Old\n\
//!      15/6/24, 9:00 AM - Alice: New",
//! );
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(&corpus, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered.records()[0].message, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Author matching is exact (case-sensitive)
//! - Date bounds are inclusive: start of day for `from`, end of day for `to`
//! - Multiple filters are combined with AND logic
//! - The source corpus is never modified

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::corpus::{ALL_AUTHORS, ChatCorpus};
use crate::error::ChatlensError;
use crate::record::ChatRecord;

/// Author selection: everyone, or exactly one author.
///
/// Parses from the author selector string, where `"All"` selects everyone.
///
/// ```
/// use chatlens::core::filter::AuthorFilter;
///
/// assert_eq!("All".parse::<AuthorFilter>().unwrap(), AuthorFilter::All);
/// assert_eq!(
///     "Bob".parse::<AuthorFilter>().unwrap(),
///     AuthorFilter::Author("Bob".into())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuthorFilter {
    /// Every author.
    #[default]
    All,
    /// One author, matched exactly.
    Author(String),
}

impl AuthorFilter {
    /// Returns `true` if the record's author passes this filter.
    pub fn matches(&self, author: &str) -> bool {
        match self {
            Self::All => true,
            Self::Author(name) => name == author,
        }
    }

    /// Returns `true` for [`AuthorFilter::All`].
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The selector string: `"All"` or the author name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_AUTHORS,
            Self::Author(name) => name,
        }
    }
}

impl From<&str> for AuthorFilter {
    fn from(s: &str) -> Self {
        if s == ALL_AUTHORS {
            Self::All
        } else {
            Self::Author(s.to_string())
        }
    }
}

impl From<String> for AuthorFilter {
    fn from(s: String) -> Self {
        if s == ALL_AUTHORS {
            Self::All
        } else {
            Self::Author(s)
        }
    }
}

impl From<AuthorFilter> for String {
    fn from(filter: AuthorFilter) -> Self {
        match filter {
            AuthorFilter::All => ALL_AUTHORS.to_string(),
            AuthorFilter::Author(name) => name,
        }
    }
}

impl FromStr for AuthorFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for AuthorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for filtering records by author and date.
///
/// Filters are combined with AND logic: a record must match all active
/// filters to be included in the result.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::FilterConfig;
///
/// # fn main() -> chatlens::Result<()> {
/// // Filter by author only
/// let by_author = FilterConfig::new().with_author("Alice");
///
/// // Filter by date range
/// let by_date = FilterConfig::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
///
/// // Combined filters
/// let combined = FilterConfig::new()
///     .with_author("Alice")
///     .with_date_from("2024-06-01")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Include only records from this author.
    pub author: AuthorFilter,

    /// Include only records on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this timestamp.
    pub before: Option<NaiveDateTime>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; every record passes through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author filter. `"All"` clears it.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<AuthorFilter>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the start date filter (inclusive, from 00:00:00).
    ///
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let date = parse_date(date_str)?;
        self.after = Some(date.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date filter (inclusive, up to 23:59:59).
    ///
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        let date = parse_date(date_str)?;
        // Exports have minute precision, so 23:59:59 covers the whole day
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        self.before = Some(date.and_time(end_of_day));
        Ok(self)
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_author_filter() || self.has_date_filter()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if a single author is selected.
    pub fn has_author_filter(&self) -> bool {
        !self.author.is_all()
    }

    /// Returns `true` if the record passes every active filter.
    pub fn matches(&self, record: &ChatRecord) -> bool {
        if !self.author.matches(&record.author) {
            return false;
        }
        if self.after.is_some_and(|after| record.timestamp < after) {
            return false;
        }
        if self.before.is_some_and(|before| record.timestamp > before) {
            return false;
        }
        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Derives the subset of `corpus` matching `config`.
///
/// Record order is preserved. The source corpus is left untouched; with no
/// active filter the result equals the input.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::{FilterConfig, apply_filters};
/// use chatlens::parser::ChatParser;
///
/// let corpus = ChatParser::new().parse_str("1/1/24, 9:00 AM - Alice: Hello");
///
/// let nobody = apply_filters(&corpus, &FilterConfig::new().with_author("Zed"));
/// assert!(nobody.is_empty());
/// assert_eq!(corpus.len(), 1);
/// ```
pub fn apply_filters(corpus: &ChatCorpus, config: &FilterConfig) -> ChatCorpus {
    if !config.is_active() {
        return corpus.clone();
    }

    corpus
        .iter()
        .filter(|record| config.matches(record))
        .cloned()
        .collect()
}

/// Shorthand for an author-only filter.
pub fn filter_by_author(corpus: &ChatCorpus, author: &str) -> ChatCorpus {
    apply_filters(corpus, &FilterConfig::new().with_author(author))
}
