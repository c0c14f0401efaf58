//! JSON report writer.

use std::fs::File;
use std::io::Write;

use crate::analysis::AggregateReport;
use crate::error::Result;

/// Writes the report as pretty-printed JSON.
///
/// # Format
/// ```json
/// {
///   "filter": { "author": "All", "after": null, "before": null },
///   "stats": { "total_messages": 2, ... },
///   "top_words": [{ "word": "morning!", "count": 1 }],
///   "top_emojis": [{ "emoji": "😊", "count": 1 }],
///   "sentiment": { "positive": 1, "neutral": 1, "negative": 0 },
///   "hourly": [{ "hour": 16, "count": 2 }],
///   "daily": [{ "day": "Monday", "count": 0 }, ...]
/// }
/// ```
pub fn write_json(report: &AggregateReport, output_path: &str) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Same as [`write_json`] but returns the JSON as a string.
pub fn to_json(report: &AggregateReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
