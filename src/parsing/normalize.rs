//! Canonical timestamps for extracted rows.
//!
//! Dates are day/month/year with a 2- or 4-digit year; times use a 12-hour
//! clock with an AM/PM marker. Anything else (3-digit years, 31 February,
//! hour 13 PM) does not parse and the row is dropped.

use chrono::NaiveDateTime;

use super::extract::RawRecord;
use crate::record::ChatRecord;

/// `strftime` layout for exports with a 4-digit year.
pub const LONG_YEAR_FORMAT: &str = "%d/%m/%Y %I:%M %p";

/// `strftime` layout for exports with a 2-digit year.
pub const SHORT_YEAR_FORMAT: &str = "%d/%m/%y %I:%M %p";

/// Parses an export date and time into a [`NaiveDateTime`].
///
/// Returns `None` if the pair doesn't fit the fixed layout.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::parse_timestamp;
/// use chrono::NaiveDate;
///
/// let ts = parse_timestamp("12/5/23", "4:30 PM").unwrap();
/// assert_eq!(
///     ts,
///     NaiveDate::from_ymd_opt(2023, 5, 12).unwrap().and_hms_opt(16, 30, 0).unwrap()
/// );
///
/// assert!(parse_timestamp("31/2/2024", "9:00 AM").is_none());
/// ```
pub fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    // chrono's %Y happily reads "23" as year 23, so pick the layout by width
    let year = date.rsplit('/').next()?;
    let format = match year.len() {
        2 => SHORT_YEAR_FORMAT,
        4 => LONG_YEAR_FORMAT,
        _ => return None,
    };

    NaiveDateTime::parse_from_str(&format!("{date} {time}"), format).ok()
}

/// Converts [`RawRecord`]s into [`ChatRecord`]s.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::{LineExtractor, RecordNormalizer};
///
/// let text = "12/5/23, 4:30 PM - Alice: Hi\n40/5/23, 4:31 PM - Bob: bad date";
/// let extractor = LineExtractor::new();
/// let records: Vec<_> = RecordNormalizer::new()
///     .normalize_all(extractor.extract(text))
///     .collect();
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].author, "Alice");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordNormalizer;

impl RecordNormalizer {
    /// Creates a normalizer for the fixed timestamp layout.
    pub fn new() -> Self {
        Self
    }

    /// Normalizes one row, or `None` if its timestamp doesn't parse.
    pub fn normalize(&self, raw: &RawRecord<'_>) -> Option<ChatRecord> {
        let timestamp = parse_timestamp(raw.date, raw.time)?;
        Some(ChatRecord::new(timestamp, raw.author, raw.message))
    }

    /// Normalizes a sequence of rows, keeping the relative order of survivors.
    pub fn normalize_all<'a, I>(&self, rows: I) -> impl Iterator<Item = ChatRecord> + use<'a, I>
    where
        I: IntoIterator<Item = RawRecord<'a>>,
    {
        let normalizer = *self;
        rows.into_iter()
            .filter_map(move |raw| normalizer.normalize(&raw))
    }
}
