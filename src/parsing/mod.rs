//! Line extraction and timestamp normalization.
//!
//! These are the two leaf stages of the pipeline:
//!
//! - [`extract`] - matches the fixed export line pattern and yields borrowed
//!   [`RawRecord`]s
//! - [`normalize`] - turns the date/time strings of a [`RawRecord`] into a
//!   canonical timestamp, dropping rows that don't parse
//!
//! [`ChatParser`](crate::parser::ChatParser) composes both.

pub mod extract;
pub mod normalize;

pub use extract::{CHAT_LINE_PATTERN, HEADER_PATTERN, LineExtractor, RawRecord};
pub use normalize::{RecordNormalizer, parse_timestamp};
