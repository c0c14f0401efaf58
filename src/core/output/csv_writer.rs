//! CSV corpus export.

use std::fs::File;
use std::io::Write;

use crate::corpus::ChatCorpus;
use crate::error::{ChatlensError, Result};

/// Column names of the export.
pub const CSV_HEADER: [&str; 3] = ["Timestamp", "Author", "Message"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn write_records<W: Write>(corpus: &ChatCorpus, sink: W) -> Result<W> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(CSV_HEADER)?;
    for record in corpus {
        writer.write_record([
            record.timestamp.format(TIMESTAMP_FORMAT).to_string().as_str(),
            record.author.as_str(),
            record.message.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ChatlensError::Io(e.into_error()))
}

/// Writes the corpus to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Author`, `Message`
/// - Timestamps: `YYYY-MM-DD HH:MM:SS`
/// - Encoding: UTF-8
pub fn write_csv(corpus: &ChatCorpus, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(corpus, file)?.flush()?;
    Ok(())
}

/// Same as [`write_csv`] but returns the CSV as a string.
pub fn to_csv(corpus: &ChatCorpus) -> Result<String> {
    let bytes = write_records(corpus, Vec::new())?;
    Ok(String::from_utf8(bytes)?)
}
