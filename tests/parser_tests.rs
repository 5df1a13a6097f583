use std::io::Write;

use chrono::NaiveDate;
use hitpath::ingest::{read_log, TimeWindow};
use hitpath::parser::{parse_line, parse_log_timestamp};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> i64 {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
        .and_utc()
        .timestamp()
}

#[test]
fn test_parse_line_extracts_path_and_timestamp() {
    let line = r#"192.168.0.7 - - [01/Mar/2021:09:15:00 +0000] "GET /api/v1/users HTTP/1.1" 200 512"#;

    let record = parse_line(line).unwrap();

    assert_eq!(record.path, "/api/v1/users");
    assert_eq!(record.timestamp, ts(2021, 3, 1, 9, 15, 0));
}

#[test]
fn test_parse_line_rejects_short_lines() {
    assert!(parse_line("").is_none());
    assert!(parse_line("just a few words here").is_none());
}

#[test]
fn test_parse_line_rejects_bad_timestamp() {
    let line = r#"192.168.0.7 - - [soon] "GET /api HTTP/1.1" 200 512 trailing"#;
    assert!(parse_line(line).is_none());
}

#[test]
fn test_parse_log_timestamp_requires_bracket_layout() {
    assert_eq!(
        parse_log_timestamp("[01/Mar/2021:09:15:00"),
        Some(ts(2021, 3, 1, 9, 15, 0))
    );
    assert!(parse_log_timestamp("2021-03-01 09:15:00").is_none());
}

fn write_sample_log() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"10.0.0.1 - - [01/Mar/2021:10:00:00 +0000] "GET /a HTTP/1.1" 200 100"#
    )
    .unwrap();
    writeln!(
        file,
        r#"10.0.0.2 - - [01/Mar/2021:11:00:00 +0000] "GET /a/b HTTP/1.1" 200 100"#
    )
    .unwrap();
    writeln!(file, "short line").unwrap();
    writeln!(
        file,
        r#"10.0.0.3 - - [01/Mar/2021:12:00:00 +0000] "GET /c HTTP/1.1" 404 0"#
    )
    .unwrap();
    file
}

#[test]
fn test_read_log_unbounded_window() {
    let file = write_sample_log();

    let (records, stats) = read_log(file.path(), &TimeWindow::unbounded()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].path, "/a");
    assert_eq!(records[1].path, "/a/b");
    assert_eq!(records[2].path, "/c");

    assert_eq!(stats.lines_read, 4);
    assert_eq!(stats.lines_parsed, 3);
    assert_eq!(stats.lines_skipped, 1);
    assert_eq!(stats.lines_filtered, 0);
}

#[test]
fn test_read_log_window_filters_inclusively() {
    let file = write_sample_log();

    // Keep 10:00 through 11:00; the 12:00 hit falls outside.
    let window = TimeWindow {
        from: Some(ts(2021, 3, 1, 10, 0, 0)),
        to: Some(ts(2021, 3, 1, 11, 0, 0)),
    };

    let (records, stats) = read_log(file.path(), &window).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(stats.lines_filtered, 1);
}

#[test]
fn test_read_log_missing_file_is_fatal() {
    let result = read_log("/no/such/file.log", &TimeWindow::unbounded());
    assert!(result.is_err());
}

#[test]
fn test_window_parse_round_trip() {
    let window = TimeWindow::parse(Some("20210301100000"), Some("20210301110000")).unwrap();

    assert_eq!(window.from, Some(ts(2021, 3, 1, 10, 0, 0)));
    assert_eq!(window.to, Some(ts(2021, 3, 1, 11, 0, 0)));
}
