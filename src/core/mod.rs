//! Filtering and output.
//!
//! This module contains:
//! - [`filter`] - narrowing a corpus by author and date
//! - [`output`] - report and export writers (text, JSON, CSV, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatlens::core::{
//!     FilterConfig, apply_filters,
//!     to_text, write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod filter;
pub mod output;

pub use filter::{AuthorFilter, FilterConfig, apply_filters};

pub use output::{to_text, write_text};
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
