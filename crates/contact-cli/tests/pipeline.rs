//! Integration tests for the convert pipeline.

use std::fs;
use std::io::Cursor;

use contact_cli::output::{render_json, write_json};
use contact_cli::pipeline::{SkippedRow, convert_file, merge_rows};
use contact_ingest::{CsvRowSource, IngestError, IngestOptions};
use contact_model::RowError;
use contact_transform::{ExtractOptions, SlashSplitMode};
use serde_json::Value;

const EXPORT: &str = "\
fullname,eid,email Student,phone Student,group,group,invisible,see_all
John Doe,1234,johndoe@example.com :),11987654321,Sala 1,Sala 2,,yes
Mary Jane,5678,mary@example.com/not-an-email,,Sala 3 / Noturno,,no,
John Doe,1234,john.doe@example.com,11912345678,\"Sala 2, Sala 4\",,yes,no
,,,,,,,
Nobody,,nobody@example.com,,Sala 1,,,
";

fn source(contents: &str) -> CsvRowSource<Cursor<String>> {
    CsvRowSource::from_reader(
        Cursor::new(contents.to_string()),
        "export.csv",
        IngestOptions::default(),
    )
    .expect("open export")
}

#[test]
fn merges_duplicates_and_normalizes_groups() {
    let report = merge_rows(source(EXPORT), ExtractOptions::default()).expect("merge rows");

    assert_eq!(report.stats.rows, 4);
    assert_eq!(report.stats.created, 2);
    assert_eq!(report.stats.merged, 1);
    assert_eq!(report.stats.skipped, 1);
    assert_eq!(
        report.skipped,
        vec![SkippedRow {
            line: 6,
            reason: RowError::EmptyIdentifier
        }]
    );

    let eids: Vec<&str> = report.records.iter().map(|r| r.eid.as_str()).collect();
    assert_eq!(eids, vec!["1234", "5678"]);

    let john = &report.records[0];
    assert_eq!(john.full_name, "John Doe");
    assert!(!john.invisible);
    assert!(john.see_all);
    assert_eq!(john.groups, vec!["Sala 1", "Sala 2", "Sala 4"]);
    let kinds: Vec<&str> = john.addresses.iter().map(|a| a.kind.as_str()).collect();
    assert_eq!(kinds, vec!["email", "phone", "email", "phone"]);
    assert_eq!(john.addresses[0].address, "johndoe@example.com");
    assert_eq!(john.addresses[2].address, "john.doe@example.com");
    assert!(john.addresses.iter().all(|a| a.tags == vec!["Student"]));
    assert_eq!(report.address_count(), 5);

    let mary = &report.records[1];
    assert!(!mary.invisible);
    assert!(!mary.see_all);
    assert_eq!(mary.groups, vec!["Noturno", "Sala 3"]);
    assert_eq!(mary.addresses.len(), 1);
    assert_eq!(mary.addresses[0].address, "mary@example.com");
}

#[test]
fn legacy_slash_split_matches_default_for_invalid_whole_values() {
    let legacy = merge_rows(
        source(EXPORT),
        ExtractOptions::new().with_slash_split(SlashSplitMode::Legacy),
    )
    .expect("merge rows");
    let default = merge_rows(source(EXPORT), ExtractOptions::default()).expect("merge rows");
    assert_eq!(legacy.records, default.records);
}

#[test]
fn ingest_errors_abort_the_run() {
    let rows = vec![
        Ok(contact_model::InputRow::new(2).with("eid", "1")),
        Err(IngestError::MissingHeader("broken.csv".to_string())),
    ];
    let result = merge_rows(rows, ExtractOptions::default());
    assert!(matches!(result, Err(IngestError::MissingHeader(_))));
}

#[test]
fn converts_file_to_tab_indented_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("input.csv");
    let output = dir.path().join("out").join("output.json");
    fs::write(&input, EXPORT).expect("write export");

    let report = convert_file(&input, IngestOptions::default(), ExtractOptions::default())
        .expect("convert export");
    write_json(&output, &report.records).expect("write json");

    let text = fs::read_to_string(&output).expect("read output");
    assert!(text.starts_with("[\n\t{\n\t\t\"fullname\""));
    let json: Value = serde_json::from_str(&text).expect("parse output");
    let records = json.as_array().expect("array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["eid"], "1234");
    assert_eq!(records[0]["see_all"], true);
    assert_eq!(records[0]["groups"][2], "Sala 4");
    assert_eq!(records[1]["addresses"][0]["type"], "email");
    assert_eq!(records[1]["addresses"][0]["tags"][0], "Student");
}

#[test]
fn render_matches_written_bytes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = dir.path().join("output.json");
    let report = merge_rows(source(EXPORT), ExtractOptions::default()).expect("merge rows");
    write_json(&output, &report.records).expect("write json");
    let rendered = render_json(&report.records).expect("render");
    assert_eq!(fs::read(&output).expect("read output"), rendered);
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = convert_file(
        &dir.path().join("absent.csv"),
        IngestOptions::default(),
        ExtractOptions::default(),
    );
    assert!(matches!(result, Err(IngestError::Open { .. })));
}
