//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Report format options
//!
//! [`Args`] converts into the library's plain configuration types, so the
//! binary stays a thin shell around [`ChatParser`](crate::parser::ChatParser)
//! and [`Aggregator`](crate::analysis::Aggregator).
//!
//! ```rust
//! use chatlens::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "chat.txt", "--user", "Alice", "-f", "json"]);
//! let filter = args.filter_config().unwrap();
//! assert!(filter.has_author_filter());
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{ParserConfig, ReportConfig};
use crate::core::filter::FilterConfig;
use crate::error::ChatlensError;

/// Parse a chat export and print a statistics dashboard: message counts,
/// word cloud terms, emoji usage, sentiment and activity over time.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens \"WhatsApp Chat.txt\"
    chatlens chat.txt --user Alice
    chatlens chat.txt --after 2024-01-01 --before 2024-06-30
    chatlens chat.txt -f json -o report.json
    chatlens chat.txt --export messages.csv
    chatlens chat.txt --list-users")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Only analyse messages from this author ("All" for everyone)
    #[arg(short, long, value_name = "NAME", default_value = "All")]
    pub user: String,

    /// Only analyse messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only analyse messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Also export the filtered messages (.csv or .jsonl)
    #[arg(long, value_name = "FILE")]
    pub export: Option<String>,

    /// Number of emoji in the usage table
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_emojis: usize,

    /// Number of words in the word cloud table
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// Replace the English stop-word list (one word per line)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Append lines without a timestamp to the previous message
    #[arg(long)]
    pub join_multiline: bool,

    /// Print the selectable authors and exit
    #[arg(long)]
    pub list_users: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parser settings from the flags.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_join_continuation_lines(self.join_multiline)
    }

    /// Report table sizes from the flags.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_top_emojis(self.top_emojis)
            .with_top_words(self.top_words)
    }

    /// Author and date filters from the flags.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] for a malformed `--after` or
    /// `--before`.
    pub fn filter_config(&self) -> Result<FilterConfig, ChatlensError> {
        let mut filter = FilterConfig::new().with_author(self.user.as_str());
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        Ok(filter)
    }
}

/// Report format options.
///
/// # Example
///
/// ```rust
/// use chatlens::cli::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal dashboard (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        crate::format::ReportFormat::from(*self).extension()
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json"]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::ReportFormat {
    fn from(format: OutputFormat) -> crate::format::ReportFormat {
        match format {
            OutputFormat::Text => crate::format::ReportFormat::Text,
            OutputFormat::Json => crate::format::ReportFormat::Json,
        }
    }
}
