//! # Chatlens
//!
//! A Rust library for turning an exported chat log into descriptive
//! statistics: message counts, word-cloud terms, emoji usage, sentiment and
//! activity over time.
//!
//! ## Overview
//!
//! Chatlens reads the plain-text export layout
//!
//! ```text
//! 12/5/23, 4:30 PM - Alice: Good morning!
//! ```
//!
//! and runs a linear pipeline over it:
//!
//! ```text
//! read file -> extract lines -> normalize timestamps -> filter -> aggregate -> report
//! ```
//!
//! Lines that don't fit the layout are skipped, never fatal.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let corpus = ChatParser::new().parse_file("WhatsApp Chat.txt")?;
//!
//!     // Narrow to one author, like picking a name in a sidebar
//!     let filter = FilterConfig::new().with_author("Alice");
//!     let report = Aggregator::new().report_filtered(&corpus, &filter);
//!
//!     println!("{}", to_text(&report));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - line extraction ([`LineExtractor`](parsing::LineExtractor))
//!   and timestamp normalization ([`RecordNormalizer`](parsing::RecordNormalizer))
//! - [`parser`] - [`ChatParser`](parser::ChatParser), the composed parser
//! - [`record`], [`corpus`] - [`ChatRecord`] and [`ChatCorpus`]
//! - [`core`] - filtering ([`core::filter`]) and writers ([`core::output`])
//! - [`analysis`] - [`Aggregator`](analysis::Aggregator) and its queries
//! - [`format`] - [`ReportFormat`](format::ReportFormat) and [`ExportFormat`](format::ExportFormat)
//! - [`config`] - parser and report configuration
//! - [`cli`], [`logging`] - binary support (requires `cli` feature)
//! - [`error`] - unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod parser;
pub mod parsing;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use corpus::ChatCorpus;
pub use error::{ChatlensError, Result};
pub use record::ChatRecord;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Data model
    pub use crate::{ChatCorpus, ChatRecord};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{ChatParser, ParseStats};

    // Configuration
    pub use crate::config::{ParserConfig, ReportConfig, SentimentThresholds};

    // Filtering
    pub use crate::core::filter::{AuthorFilter, FilterConfig, apply_filters};

    // Aggregation
    pub use crate::analysis::{
        AggregateReport, Aggregator, EmojiSet, PolarityScorer, SentimentLabel, StopWords,
        VaderScorer,
    };

    // Output (file writers and string converters)
    pub use crate::core::output::{to_text, write_text};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{ExportFormat, ReportFormat};
}
