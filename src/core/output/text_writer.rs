//! Plain-text dashboard rendering of a report.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::analysis::AggregateReport;
use crate::error::Result;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const BAR_WIDTH: usize = 30;
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn bar(count: usize, max: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    // At least one block for any non-zero count
    let width = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(width)
}

/// Report wrapper whose `Display` output is the dashboard.
struct Dashboard<'a>(&'a AggregateReport);

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        write_header(f, report)?;
        write_stats(f, report)?;
        write_words(f, report)?;
        write_emojis(f, report)?;
        write_sentiment(f, report)?;
        write_hourly(f, report)?;
        write_daily(f, report)
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")
}

fn write_header(f: &mut fmt::Formatter<'_>, report: &AggregateReport) -> fmt::Result {
    writeln!(f, "📊 Chat report for {}", report.filter.author)?;
    if let Some(after) = report.filter.after {
        writeln!(f, "   from {}", after.format(DATETIME_FORMAT))?;
    }
    if let Some(before) = report.filter.before {
        writeln!(f, "   until {}", before.format(DATETIME_FORMAT))?;
    }
    writeln!(f, "{RULE}")
}

fn write_stats(f: &mut fmt::Formatter<'_>, report: &AggregateReport) -> fmt::Result {
    let stats = &report.stats;
    write_section(f, "🔢 Basic Stats")?;
    writeln!(f, "   Total Messages: {}", stats.total_messages)?;
    writeln!(f, "   Unique Users:   {}", stats.unique_authors)?;
    writeln!(f, "   Total Words:    {}", stats.total_words)?;
    writeln!(f, "   Words/Message:  {:.1}", stats.words_per_message())?;
    if let (Some(first), Some(last)) = (stats.first, stats.last) {
        writeln!(
            f,
            "   Period:         {} → {}",
            first.format(DATETIME_FORMAT),
            last.format(DATETIME_FORMAT)
        )?;
    }
    for author in &stats.per_author {
        writeln!(f, "   • {}: {}", author.author, author.messages)?;
    }
    Ok(())
}

fn write_words(f: &mut fmt::Formatter<'_>, report: &AggregateReport) -> fmt::Result {
    write_section(f, "☁️ Top Words")?;
    if report.top_words.is_empty() {
        writeln!(f, "   (none)")?;
    }
    for word in &report.top_words {
        writeln!(f, "   {:<20} {}", word.word, word.count)?;
    }
    Ok(())
}

fn write_emojis(f: &mut fmt::Formatter<'_>, report: &AggregateReport) -> fmt::Result {
    write_section(f, "😄 Emoji Usage")?;
    if report.top_emojis.is_empty() {
        writeln!(f, "   (none)")?;
    }
    for emoji in &report.top_emojis {
        writeln!(f, "   {}  {}", emoji.emoji, emoji.count)?;
    }
    Ok(())
}

fn write_sentiment(f: &mut fmt::Formatter<'_>, report: &AggregateReport) -> fmt::Result {
    write_section(f, "🧠 Sentiment")?;
    let entries = report.sentiment.entries();
    let max = entries.iter().map(|e| e.1).max().unwrap_or(0);
    for (label, count) in entries {
        writeln!(f, "   {:<9} {:>6} {}", label, count, bar(count, max))?;
    }
    Ok(())
}

fn write_hourly(f: &mut fmt::Formatter<'_>, report: &AggregateReport) -> fmt::Result {
    write_section(f, "🕐 Messages by Hour")?;
    if report.hourly.is_empty() {
        writeln!(f, "   (none)")?;
    }
    let max = report.hourly.iter().map(|b| b.count).max().unwrap_or(0);
    for bucket in &report.hourly {
        writeln!(
            f,
            "   {:02}:00 {:>6} {}",
            bucket.hour,
            bucket.count,
            bar(bucket.count, max)
        )?;
    }
    if let Some(peak) = report.peak_hour {
        writeln!(f, "   Busiest hour: {:02}:00 ({} messages)", peak.hour, peak.count)?;
    }
    Ok(())
}

fn write_daily(f: &mut fmt::Formatter<'_>, report: &AggregateReport) -> fmt::Result {
    write_section(f, "📆 Messages by Day")?;
    let max = report.daily.iter().map(|b| b.count).max().unwrap_or(0);
    for bucket in &report.daily {
        writeln!(
            f,
            "   {:<9} {:>6} {}",
            bucket.day,
            bucket.count,
            bar(bucket.count, max)
        )?;
    }
    Ok(())
}

/// Renders the report as a terminal dashboard.
///
/// Sections: basic stats, top words, emoji usage, sentiment, activity by
/// hour, activity by weekday.
pub fn to_text(report: &AggregateReport) -> String {
    Dashboard(report).to_string()
}

/// Writes the dashboard text to a file.
pub fn write_text(report: &AggregateReport, output_path: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    write!(writer, "{}", Dashboard(report))?;
    writer.flush()?;
    Ok(())
}
