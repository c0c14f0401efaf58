//! JSON Lines (JSONL) corpus export.
//!
//! One record per line, in corpus order:
//!
//! ```jsonl
//! {"timestamp":"2023-05-12T16:30:00","author":"Alice","message":"Good morning!"}
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::corpus::ChatCorpus;
use crate::error::Result;

fn write_lines<W: Write>(corpus: &ChatCorpus, writer: &mut W) -> Result<()> {
    for record in corpus {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes the corpus as JSON Lines.
pub fn write_jsonl(corpus: &ChatCorpus, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(corpus, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Same as [`write_jsonl`] but returns the lines as a string.
pub fn to_jsonl(corpus: &ChatCorpus) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(corpus, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
