//! Fixed-pattern line extraction.
//!
//! One export line looks like:
//!
//! ```text
//! 12/5/23, 4:30 PM - Alice: Good morning!
//! ```
//!
//! The pattern is searched anywhere in a line, the same way a "find all"
//! over the whole text would. Lines that don't match are not errors; they are
//! simply not yielded.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Pattern for one export line: `<d/m/y>, <h:mm AM|PM> - <author>: <message>`.
///
/// Capture groups: date, time, author, message. The author group is lazy, so
/// only the first `": "` separates author from message.
pub const CHAT_LINE_PATTERN: &str =
    r"(?R)(\d{1,2}/\d{1,2}/\d{2,4}), (\d{1,2}:\d{2} (?:AM|PM)) - (.*?): (.+)";

/// The timestamp and separator that open every event line, messages and
/// system events alike: `<d/m/y>, <h:mm AM|PM> - `.
pub const HEADER_PATTERN: &str = r"(?R)\d{1,2}/\d{1,2}/\d{2,4}, \d{1,2}:\d{2} (?:AM|PM) - ";

static CHAT_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CHAT_LINE_PATTERN).expect("chat line pattern is valid"));

static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"));

/// The four string fields of a matched line, borrowed from the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// Date as written, e.g. `12/5/23`
    pub date: &'a str,
    /// Time as written, e.g. `4:30 PM`
    pub time: &'a str,
    /// Author name
    pub author: &'a str,
    /// Message body
    pub message: &'a str,
}

impl<'a> RawRecord<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let record = Self {
            date: caps.get(1)?.as_str(),
            time: caps.get(2)?.as_str(),
            author: caps.get(3)?.as_str(),
            message: caps.get(4)?.as_str(),
        };

        // An empty author matches the pattern but is not a chat message
        if record.author.is_empty() {
            return None;
        }
        Some(record)
    }
}

/// Applies [`CHAT_LINE_PATTERN`] to export text.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::LineExtractor;
///
/// let text = "12/5/23, 4:30 PM - Alice: Good morning!\nnot a chat line";
/// let extractor = LineExtractor::new();
/// let records: Vec<_> = extractor.extract(text).collect();
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].author, "Alice");
/// assert_eq!(records[0].message, "Good morning!");
/// ```
#[derive(Debug, Clone)]
pub struct LineExtractor {
    regex: &'static Regex,
}

impl LineExtractor {
    /// Creates an extractor for the fixed export pattern.
    pub fn new() -> Self {
        Self {
            regex: &*CHAT_LINE_REGEX,
        }
    }

    /// Lazily yields one [`RawRecord`] per matching line, in source order.
    pub fn extract<'a>(&'a self, text: &'a str) -> impl Iterator<Item = RawRecord<'a>> + 'a {
        text.lines().filter_map(move |line| self.extract_line(line))
    }

    /// Matches a single physical line.
    pub fn extract_line<'a>(&self, line: &'a str) -> Option<RawRecord<'a>> {
        let caps = self.regex.captures(line)?;
        RawRecord::from_captures(&caps)
    }

    /// Returns `true` if the line would yield a record.
    pub fn is_match(&self, line: &str) -> bool {
        self.extract_line(line).is_some()
    }

    /// Returns `true` if the line carries an event header, whether or not it
    /// is a chat message. `12/5/23, 4:31 PM - Alice left` has a header but
    /// yields no record.
    pub fn has_header(&self, line: &str) -> bool {
        HEADER_REGEX.is_match(line)
    }
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self::new()
    }
}
