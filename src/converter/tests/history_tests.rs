//! History stores

use tempfile::tempdir;

use crate::converter::{describe_conversion, ConversionRecord, HistoryStore, JsonLinesHistory, MemoryHistory};
use crate::coordinate::FormatTag;

fn record(input: &str, timestamp_millis: i64) -> ConversionRecord {
    ConversionRecord::new("DD to DM", input, "out", timestamp_millis)
}

fn inputs(store: &dyn HistoryStore) -> Vec<String> {
    store.records().unwrap().into_iter().map(|r| r.input).collect()
}

#[test]
fn test_describe_conversion() {
    let record = describe_conversion("45.5", "45° 30.000'", FormatTag::DD, FormatTag::DM);
    assert_eq!(record.conversion_type, "DD to DM");
    assert_eq!(record.input, "45.5");
    assert_eq!(record.output, "45° 30.000'");
    assert!(record.timestamp_millis > 0);

    let record = describe_conversion("3.1, 101.7", "47N 411519 343074", FormatTag::DD, FormatTag::MrsoGdm2000);
    assert_eq!(record.conversion_type, "DD to MRSO_GDM2000");
}

#[test]
fn test_memory_history_is_newest_first() {
    let mut store = MemoryHistory::new();
    store.append(record("a", 1000)).unwrap();
    store.append(record("b", 3000)).unwrap();
    store.append(record("c", 2000)).unwrap();
    assert_eq!(inputs(&store), vec!["b", "c", "a"]);
}

#[test]
fn test_equal_timestamps_keep_latest_append_first() {
    let mut store = MemoryHistory::new();
    store.append(record("first", 5)).unwrap();
    store.append(record("second", 5)).unwrap();
    assert_eq!(inputs(&store), vec!["second", "first"]);
}

#[test]
fn test_memory_history_clear() {
    let mut store = MemoryHistory::new();
    store.append(record("a", 1)).unwrap();
    store.clear().unwrap();
    assert!(store.records().unwrap().is_empty());
}

#[test]
fn test_json_lines_history_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.jsonl");

    let mut store = JsonLinesHistory::new(&path);
    assert!(store.records().unwrap().is_empty());

    store.append(record("a", 10)).unwrap();
    store.append(record("b", 20)).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.lines().all(|line| line.starts_with('{')));

    // A second handle over the same file sees the same log
    let reopened = JsonLinesHistory::new(&path);
    let records = reopened.records().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], record("b", 20));
    assert_eq!(records[1], record("a", 10));
}

#[test]
fn test_json_lines_history_clear() {
    let dir = tempdir().unwrap();
    let mut store = JsonLinesHistory::new(dir.path().join("history.jsonl"));
    store.append(record("a", 1)).unwrap();
    store.clear().unwrap();
    assert!(store.records().unwrap().is_empty());

    store.append(record("b", 2)).unwrap();
    assert_eq!(inputs(&store), vec!["b"]);
}

#[test]
fn test_corrupt_history_line_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.jsonl");
    std::fs::write(&path, "not json\n").unwrap();
    assert!(JsonLinesHistory::new(&path).records().is_err());
}
