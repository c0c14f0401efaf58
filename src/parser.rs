//! Export text to [`ChatCorpus`].
//!
//! [`ChatParser`] runs the [`LineExtractor`] and [`RecordNormalizer`] over a
//! whole export. Parsing text never fails: lines that don't match the export
//! pattern and rows whose timestamp doesn't parse are dropped and only show
//! up in [`ParseStats`] and debug logs. Reading a file can fail with I/O or
//! encoding errors.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatlens::parser::ChatParser;
//! use std::path::Path;
//!
//! let corpus = ChatParser::new().parse(Path::new("WhatsApp Chat.txt"))?;
//! println!("{} messages from {} people", corpus.len(), corpus.authors().len());
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ParserConfig;
use crate::corpus::ChatCorpus;
use crate::error::ChatlensError;
use crate::parsing::{LineExtractor, RawRecord, RecordNormalizer};
use crate::record::ChatRecord;

/// Line accounting for one parse run.
///
/// Every physical line lands in exactly one bucket, so the counters always
/// sum to `lines`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Physical lines in the input.
    pub lines: usize,
    /// Lines that became a record.
    pub records: usize,
    /// Lines matching the pattern whose timestamp didn't parse.
    pub bad_timestamps: usize,
    /// Lines appended to a previous record (only with continuation joining).
    pub joined: usize,
    /// Lines that didn't match and weren't joined.
    pub skipped: usize,
}

impl ParseStats {
    /// Lines that did not produce their own record.
    pub fn dropped(&self) -> usize {
        self.bad_timestamps + self.skipped
    }
}

/// Parser for the fixed `d/m/y, h:mm AM - author: message` export layout.
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParserConfig,
    extractor: LineExtractor,
    normalizer: RecordNormalizer,
}

impl ChatParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses export text already in memory.
    pub fn parse_str(&self, content: &str) -> ChatCorpus {
        self.parse_str_with_stats(content).0
    }

    /// Parses export text and reports what happened to every line.
    ///
    /// ```rust
    /// use chatlens::parser::ChatParser;
    ///
    /// let text = "12/5/23, 4:30 PM - Alice: Hi\nnot a chat line\n99/5/23, 4:31 PM - Bob: bad";
    /// let (corpus, stats) = ChatParser::new().parse_str_with_stats(text);
    ///
    /// assert_eq!(corpus.len(), 1);
    /// assert_eq!(stats.lines, 3);
    /// assert_eq!(stats.skipped, 1);
    /// assert_eq!(stats.bad_timestamps, 1);
    /// ```
    pub fn parse_str_with_stats(&self, content: &str) -> (ChatCorpus, ParseStats) {
        let (records, stats) = if self.config.join_continuation_lines {
            self.parse_joined(content)
        } else {
            self.parse_rows(content)
        };

        debug!(
            lines = stats.lines,
            records = stats.records,
            bad_timestamps = stats.bad_timestamps,
            joined = stats.joined,
            skipped = stats.skipped,
            "parsed chat export"
        );

        (ChatCorpus::new(records), stats)
    }

    /// One record per matching line; everything else is dropped.
    fn parse_rows(&self, content: &str) -> (Vec<ChatRecord>, ParseStats) {
        let rows: Vec<RawRecord<'_>> = self.extractor.extract(content).collect();
        let records: Vec<ChatRecord> = self.normalizer.normalize_all(rows.iter().copied()).collect();

        let lines = content.lines().count();
        let stats = ParseStats {
            lines,
            records: records.len(),
            bad_timestamps: rows.len() - records.len(),
            joined: 0,
            skipped: lines - rows.len(),
        };
        (records, stats)
    }

    /// Like [`parse_rows`](Self::parse_rows), but headerless lines are
    /// appended to the record before them.
    fn parse_joined(&self, content: &str) -> (Vec<ChatRecord>, ParseStats) {
        let mut stats = ParseStats::default();
        let mut records: Vec<ChatRecord> = Vec::new();
        // Whether continuation lines may attach to `records.last_mut()`.
        // Any event that didn't become a record (bad timestamp, system
        // event) must not donate its tail to the record before it.
        let mut can_join = false;

        for line in content.lines() {
            stats.lines += 1;

            if let Some(raw) = self.extractor.extract_line(line) {
                if let Some(record) = self.normalizer.normalize(&raw) {
                    records.push(record);
                    stats.records += 1;
                    can_join = true;
                } else {
                    stats.bad_timestamps += 1;
                    can_join = false;
                }
                continue;
            }

            if self.extractor.has_header(line) {
                stats.skipped += 1;
                can_join = false;
                continue;
            }

            if can_join && !line.trim().is_empty() {
                if let Some(last) = records.last_mut() {
                    last.message.push('\n');
                    last.message.push_str(line);
                    stats.joined += 1;
                    continue;
                }
            }

            stats.skipped += 1;
        }

        (records, stats)
    }

    /// Parses raw bytes, which must be UTF-8.
    pub fn parse_bytes(&self, bytes: Vec<u8>) -> Result<ChatCorpus, ChatlensError> {
        let content =
            String::from_utf8(bytes).map_err(|e| ChatlensError::input_encoding(e, None))?;
        Ok(self.parse_str(&content))
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// - [`ChatlensError::Io`] if the file cannot be read
    /// - [`ChatlensError::Utf8`] if the file is not UTF-8
    pub fn parse(&self, path: &Path) -> Result<ChatCorpus, ChatlensError> {
        self.parse_with_stats(path).map(|(corpus, _)| corpus)
    }

    /// Reads and parses an export file, returning line accounting as well.
    pub fn parse_with_stats(&self, path: &Path) -> Result<(ChatCorpus, ParseStats), ChatlensError> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| ChatlensError::input_encoding(e, Some(path.to_path_buf())))?;
        Ok(self.parse_str_with_stats(&content))
    }

    /// Convenience wrapper around [`parse`](Self::parse) accepting a `&str` path.
    pub fn parse_file(&self, path: &str) -> Result<ChatCorpus, ChatlensError> {
        self.parse(Path::new(path))
    }
}
