//! Tests for report and export writers (text, JSON, CSV, JSONL)

use chatlens::analysis::{AggregateReport, Aggregator};
use chatlens::core::filter::FilterConfig;
use chatlens::core::output::{
    to_csv, to_json, to_jsonl, to_text, write_csv, write_json, write_jsonl, write_text,
};
use chatlens::format::{
    ExportFormat, ReportFormat, export_to_string, report_to_string, write_export, write_report,
};
use chatlens::parser::ChatParser;
use chatlens::{ChatCorpus, ChatRecord};
use std::fs;
use tempfile::tempdir;

fn sample_corpus() -> ChatCorpus {
    ChatParser::new().parse_str(
        "12/5/23, 4:30 PM - Alice: Good morning! 😊\n\
         12/5/23, 4:31 PM - Bob: Pizza; later? \"maybe\"\n\
         13/5/23, 9:05 AM - Alice: This is terrible and awful",
    )
}

fn sample_report() -> AggregateReport {
    Aggregator::new().report(&sample_corpus())
}

// ============================================================================
// CSV Export Tests
// ============================================================================

mod csv_writer_tests {
    use super::*;

    #[test]
    fn test_csv_header_and_rows() {
        let csv = to_csv(&sample_corpus()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Timestamp;Author;Message"));
        assert_eq!(
            lines.next(),
            Some("2023-05-12 16:30:00;Alice;Good morning! 😊")
        );
    }

    #[test]
    fn test_csv_quotes_delimiter_in_message() {
        let csv_text = to_csv(&sample_corpus()).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(csv_text.as_bytes());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][1], "Bob");
        assert_eq!(&rows[1][2], "Pizza; later? \"maybe\"");
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messages.csv");
        let path_str = path.to_str().unwrap();

        write_csv(&sample_corpus(), path_str).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, to_csv(&sample_corpus()).unwrap());
    }

    #[test]
    fn test_csv_empty_corpus_has_header_only() {
        let csv = to_csv(&ChatCorpus::default()).unwrap();
        assert_eq!(csv.trim_end(), "Timestamp;Author;Message");
    }
}

// ============================================================================
// JSONL Export Tests
// ============================================================================

mod jsonl_writer_tests {
    use super::*;

    #[test]
    fn test_jsonl_one_record_per_line() {
        let jsonl = to_jsonl(&sample_corpus()).unwrap();
        let records: Vec<ChatRecord> = jsonl
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records, sample_corpus().into_records());
    }

    #[test]
    fn test_jsonl_field_names() {
        let jsonl = to_jsonl(&sample_corpus()).unwrap();
        let first: serde_json::Value = serde_json::from_str(jsonl.lines().next().unwrap()).unwrap();
        assert_eq!(first["timestamp"], "2023-05-12T16:30:00");
        assert_eq!(first["author"], "Alice");
        assert_eq!(first["message"], "Good morning! 😊");
    }

    #[test]
    fn test_write_jsonl_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messages.jsonl");

        write_jsonl(&sample_corpus(), path.to_str().unwrap()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_jsonl_empty_corpus() {
        assert!(to_jsonl(&ChatCorpus::default()).unwrap().is_empty());
    }
}

// ============================================================================
// JSON Report Tests
// ============================================================================

mod json_writer_tests {
    use super::*;

    #[test]
    fn test_json_report_sections() {
        let json: serde_json::Value = serde_json::from_str(&to_json(&sample_report()).unwrap()).unwrap();

        assert_eq!(json["filter"]["author"], "All");
        assert_eq!(json["stats"]["total_messages"], 3);
        assert_eq!(json["stats"]["unique_authors"], 2);
        assert_eq!(json["top_emojis"][0]["emoji"], "😊");
        assert_eq!(json["top_emojis"][0]["count"], 1);
        assert_eq!(json["daily"].as_array().unwrap().len(), 7);
        assert_eq!(json["daily"][0]["day"], "Monday");
        assert_eq!(json["peak_hour"]["hour"], 16);
        assert_eq!(json["peak_hour"]["count"], 2);

        let sentiment = &json["sentiment"];
        let total = sentiment["positive"].as_u64().unwrap()
            + sentiment["neutral"].as_u64().unwrap()
            + sentiment["negative"].as_u64().unwrap();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_json_report_records_filter() {
        let filter = FilterConfig::new().with_author("Bob");
        let report = Aggregator::new().report_filtered(&sample_corpus(), &filter);
        let json: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();

        assert_eq!(json["filter"]["author"], "Bob");
        assert_eq!(json["stats"]["total_messages"], 1);
        assert!(json["peak_hour"].is_object());
    }

    #[test]
    fn test_write_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_json(&sample_report(), path.to_str().unwrap()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&content).is_ok());
    }
}

// ============================================================================
// Text Dashboard Tests
// ============================================================================

mod text_writer_tests {
    use super::*;

    #[test]
    fn test_text_sections_in_order() {
        let text = to_text(&sample_report());
        let sections = [
            "🔢 Basic Stats",
            "☁️ Top Words",
            "😄 Emoji Usage",
            "🧠 Sentiment",
            "🕐 Messages by Hour",
            "📆 Messages by Day",
        ];
        let positions: Vec<usize> = sections.iter().map(|s| text.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("Total Messages: 3"));
        assert!(text.contains("Busiest hour: 16:00 (2 messages)"));
    }

    #[test]
    fn test_text_empty_report() {
        let report = Aggregator::new().report(&ChatCorpus::default());
        let text = to_text(&report);
        assert!(text.contains("Total Messages: 0"));
        assert!(text.contains("(none)"));
        assert!(text.contains("Sunday"));
        assert!(text.contains("Words/Message:  0.0"));
        assert!(!text.contains("Busiest hour"));
    }

    #[test]
    fn test_write_text_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");

        write_text(&sample_report(), path.to_str().unwrap()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), to_text(&sample_report()));
    }
}

// ============================================================================
// Format Dispatch Tests
// ============================================================================

mod format_tests {
    use super::*;

    #[test]
    fn test_report_dispatch_matches_writers() {
        let report = sample_report();
        assert_eq!(report_to_string(&report, ReportFormat::Text).unwrap(), to_text(&report));
        assert_eq!(report_to_string(&report, ReportFormat::Json).unwrap(), to_json(&report).unwrap());
    }

    #[test]
    fn test_export_dispatch_matches_writers() {
        let corpus = sample_corpus();
        assert_eq!(export_to_string(&corpus, ExportFormat::Csv).unwrap(), to_csv(&corpus).unwrap());
        assert_eq!(
            export_to_string(&corpus, ExportFormat::Jsonl).unwrap(),
            to_jsonl(&corpus).unwrap()
        );
    }

    #[test]
    fn test_export_format_from_path() {
        assert_eq!(ExportFormat::from_path("out.csv").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path("dir/OUT.JSONL").unwrap(), ExportFormat::Jsonl);
        assert!(ExportFormat::from_path("out.xlsx").unwrap_err().is_invalid_format());
        assert!(ExportFormat::from_path("no_extension").is_err());
    }

    #[test]
    fn test_write_via_dispatch() {
        let dir = tempdir().unwrap();
        let report_path = dir.path().join("report.json");
        let export_path = dir.path().join("export.jsonl");

        write_report(&sample_report(), report_path.to_str().unwrap(), ReportFormat::Json).unwrap();
        write_export(&sample_corpus(), export_path.to_str().unwrap(), ExportFormat::Jsonl).unwrap();

        assert!(report_path.exists());
        assert_eq!(fs::read_to_string(&export_path).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        let err = write_report(&sample_report(), path.to_str().unwrap(), ReportFormat::Text).unwrap_err();
        assert!(err.is_io());
    }
}
