//! # chatlens CLI
//!
//! Command-line dashboard for the chatlens library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{info, warn};

use chatlens::ChatlensError;
use chatlens::analysis::{Aggregator, StopWords};
use chatlens::cli::Args;
use chatlens::core::{AuthorFilter, apply_filters};
use chatlens::format::{ExportFormat, report_to_string, write_export, write_report};
use chatlens::logging;
use chatlens::parser::ChatParser;

macro_rules! status {
    ($to_stderr:expr, $($arg:tt)*) => {
        if $to_stderr {
            eprintln!($($arg)*);
        } else {
            println!($($arg)*);
        }
    };
}

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    logging::init(args.verbose);

    // Progress goes to stderr whenever stdout carries data
    let quiet = args.output.is_none() || args.list_users;

    // Validate flags before touching the input
    let filter = args.filter_config()?;
    let export_format = args
        .export
        .as_deref()
        .map(ExportFormat::from_path)
        .transpose()?;
    let stop_words = match args.stop_words {
        Some(ref path) => StopWords::from_file(path)?,
        None => StopWords::english(),
    };

    status!(quiet, "🔍 chatlens v{}", env!("CARGO_PKG_VERSION"));
    status!(quiet, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    status!(quiet, "📂 Input:   {}", args.input.display());
    status!(quiet, "👤 User:    {}", filter.author);
    if let Some(ref after) = args.after {
        status!(quiet, "📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        status!(quiet, "📅 Before:  {}", before);
    }
    if args.join_multiline {
        status!(quiet, "🧵 Mode:    Joining multi-line messages");
    }
    status!(quiet, "");

    // Step 1: Parse
    status!(quiet, "⏳ Parsing chat export...");
    let parse_start = Instant::now();
    let parser = ChatParser::with_config(args.parser_config());
    let (corpus, parse_stats) = parser.parse_with_stats(&args.input)?;
    let parse_time = parse_start.elapsed();
    status!(
        quiet,
        "   Found {} messages from {} authors ({:.2}s)",
        corpus.len(),
        corpus.authors().len(),
        parse_time.as_secs_f64()
    );
    if parse_stats.dropped() > 0 {
        status!(quiet, "   Skipped {} unmatched lines", parse_stats.dropped());
    }
    info!(
        records = parse_stats.records,
        dropped = parse_stats.dropped(),
        "parsed {}",
        args.input.display()
    );

    if args.list_users {
        for author in corpus.author_choices() {
            println!("{author}");
        }
        return Ok(());
    }

    if let AuthorFilter::Author(ref name) = filter.author {
        if !corpus.authors().contains(&name.as_str()) {
            warn!(author = %name, "author not found in chat; report will be empty");
        }
    }

    // Step 2: Aggregate
    status!(quiet, "📊 Computing statistics...");
    let aggregate_start = Instant::now();
    let aggregator = Aggregator::new()
        .with_config(args.report_config())
        .with_stop_words(stop_words);
    let report = aggregator.report_filtered(&corpus, &filter);
    status!(
        quiet,
        "   {} messages selected ({:.2}s)",
        report.stats.total_messages,
        aggregate_start.elapsed().as_secs_f64()
    );

    // Step 3: Optional export of the selected messages
    if let (Some(path), Some(format)) = (args.export.as_deref(), export_format) {
        status!(quiet, "💾 Exporting {}...", format);
        let view = apply_filters(&corpus, &filter);
        write_export(&view, path, format)?;
        status!(quiet, "   Exported {} messages to {}", view.len(), path);
    }

    // Step 4: Report
    match args.output {
        Some(ref path) => {
            write_report(&report, path, args.format.into())?;
            status!(quiet, "");
            status!(quiet, "✅ Done! Report saved to {}", path);
        }
        None => {
            status!(quiet, "");
            println!("{}", report_to_string(&report, args.format.into())?);
        }
    }

    let total_time = total_start.elapsed();
    status!(quiet, "");
    status!(quiet, "⚡ Total time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}
