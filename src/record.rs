//! A single extracted chat message.
//!
//! [`ChatRecord`] is what survives extraction and timestamp normalization:
//! every record carries a valid wall-clock timestamp, a non-empty author and
//! a non-empty message body.
//!
//! # Example
//!
//! ```
//! use chatlens::ChatRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 5, 12)
//!     .unwrap()
//!     .and_hms_opt(16, 30, 0)
//!     .unwrap();
//! let record = ChatRecord::new(ts, "Alice", "Good morning!");
//!
//! assert_eq!(record.author(), "Alice");
//! assert_eq!(record.hour(), 16);
//! assert_eq!(record.word_count(), 2);
//! ```

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// One message of a chat export.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Wall-clock time as written in the export |
/// | `author` | `String` | Display name before the first `": "` |
/// | `message` | `String` | Everything after the author separator |
///
/// Exports carry no timezone, so the timestamp is kept naive. Hour-of-day
/// and weekday are read straight from it.
///
/// # Serialization
///
/// ```
/// use chatlens::ChatRecord;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 5, 0).unwrap();
/// let record = ChatRecord::new(ts, "Bob", "Hi");
/// let json = serde_json::to_string(&record)?;
///
/// assert!(json.contains("2024-01-15T09:05:00"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    /// When the message was sent, as written in the export.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author.
    pub author: String,

    /// Message body. Only contains newlines when continuation lines are joined.
    pub message: String,
}

impl ChatRecord {
    /// Creates a record from its three parts.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            message: message.into(),
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Hour of day (0-23) the message was sent.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Weekday the message was sent.
    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    /// Number of whitespace-separated tokens in the message.
    pub fn word_count(&self) -> usize {
        self.message.split_whitespace().count()
    }
}
