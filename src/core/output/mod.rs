//! Report and export writers.
//!
//! Reports (an [`AggregateReport`](crate::analysis::AggregateReport)):
//! - [`write_text`] / [`to_text`] - terminal dashboard
//! - [`write_json`] / [`to_json`] - pretty JSON - requires `json-output` feature
//!
//! Exports (a [`ChatCorpus`](crate::ChatCorpus)):
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON record per line - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::analysis::Aggregator;
//! use chatlens::core::output::{to_text, write_csv, write_json};
//! use chatlens::parser::ChatParser;
//!
//! let corpus = ChatParser::new().parse_file("chat.txt")?;
//! let report = Aggregator::new().report(&corpus);
//!
//! println!("{}", to_text(&report));
//! write_json(&report, "report.json")?;
//! write_csv(&corpus, "messages.csv")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::{to_text, write_text};
