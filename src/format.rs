//! Report and export format types.
//!
//! These types don't depend on CLI frameworks, so library users can pick a
//! writer by value or by file extension.
//!
//! - [`ReportFormat`] renders an [`AggregateReport`]
//! - [`ExportFormat`] serializes a parsed [`ChatCorpus`]
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::format::{ExportFormat, ReportFormat, export_to_string, report_to_string};
//! use chatlens::analysis::Aggregator;
//! use chatlens::parser::ChatParser;
//!
//! let corpus = ChatParser::new().parse_str("12/5/23, 4:30 PM - Alice: Good morning!");
//! let report = Aggregator::new().report(&corpus);
//!
//! let json = report_to_string(&report, ReportFormat::Json)?;
//! let csv = export_to_string(&corpus, ExportFormat::Csv)?;
//!
//! // Or detect the format from an extension
//! assert_eq!(ExportFormat::from_path("messages.jsonl")?, ExportFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::AggregateReport;
use crate::corpus::ChatCorpus;
use crate::error::ChatlensError;

fn extension_of(path: &str) -> String {
    path.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// How an [`AggregateReport`] is rendered.
///
/// # Example
///
/// ```rust
/// use chatlens::format::ReportFormat;
/// use std::str::FromStr;
///
/// let format = ReportFormat::from_str("json").unwrap();
/// assert_eq!(format, ReportFormat::Json);
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Terminal dashboard (default)
    #[default]
    Text,

    /// Pretty-printed JSON document
    Json,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json"]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text/plain",
            ReportFormat::Json => "application/json",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// ```rust
    /// use chatlens::format::ReportFormat;
    ///
    /// assert_eq!(ReportFormat::from_path("report.JSON").unwrap(), ReportFormat::Json);
    /// assert!(ReportFormat::from_path("report.csv").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatlensError> {
        let ext = extension_of(path);

        match ext.as_str() {
            "txt" | "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ChatlensError::invalid_format(
                "report",
                format!("Unknown file extension: '.{ext}'. Expected one of: txt, json"),
            )),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// How a parsed [`ChatCorpus`] is exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExportFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON Lines - one record per line
    Jsonl,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "jsonl", "ndjson"]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self, ChatlensError> {
        let ext = extension_of(path);

        match ext.as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            _ => Err(ChatlensError::invalid_format(
                "export",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, jsonl"),
            )),
        }
    }

    #[allow(dead_code)]
    fn feature(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv-output",
            ExportFormat::Jsonl => "json-output",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}

#[allow(dead_code)]
fn missing_feature(kind: &'static str, format: impl fmt::Debug, feature: &str) -> ChatlensError {
    ChatlensError::invalid_format(
        kind,
        format!("Format {format:?} requires the '{feature}' feature to be enabled"),
    )
}

/// Writes a report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_report(
    report: &AggregateReport,
    path: &str,
    format: ReportFormat,
) -> Result<(), ChatlensError> {
    match format {
        ReportFormat::Text => crate::core::output::write_text(report, path),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::core::output::write_json(report, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature("report", format, "json-output")),
    }
}

/// Renders a report to a string in the specified format.
pub fn report_to_string(
    report: &AggregateReport,
    format: ReportFormat,
) -> Result<String, ChatlensError> {
    match format {
        ReportFormat::Text => Ok(crate::core::output::to_text(report)),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::core::output::to_json(report),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature("report", format, "json-output")),
    }
}

/// Writes a corpus export to a file in the specified format.
#[allow(unused_variables)]
pub fn write_export(
    corpus: &ChatCorpus,
    path: &str,
    format: ExportFormat,
) -> Result<(), ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::write_csv(corpus, path),
        #[cfg(feature = "json-output")]
        ExportFormat::Jsonl => crate::core::output::write_jsonl(corpus, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature("export", format, format.feature())),
    }
}

/// Serializes a corpus export to a string in the specified format.
#[allow(unused_variables)]
pub fn export_to_string(corpus: &ChatCorpus, format: ExportFormat) -> Result<String, ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::to_csv(corpus),
        #[cfg(feature = "json-output")]
        ExportFormat::Jsonl => crate::core::output::to_jsonl(corpus),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature("export", format, format.feature())),
    }
}
