use chrono::{NaiveDate, NaiveDateTime};
use configuration::InputSchema;
use loader::{LoaderError, load_readings, load_readings_from_bytes};
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/libre_export.xlsx")
}

fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, day)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

#[test]
fn reads_first_sheet_with_text_and_native_timestamps() {
    let set = load_readings(&fixture(), &InputSchema::default()).unwrap();
    let readings = set.as_slice();

    // The scan record without a historic value is skipped.
    assert_eq!(readings.len(), 4);

    assert_eq!(readings[0].timestamp(), at(1, 8, 0));
    assert_eq!(readings[0].glucose(), 90.0);
    assert_eq!(readings[1].timestamp(), at(2, 8, 0));
    assert_eq!(readings[1].glucose(), 110.0);
    assert_eq!(readings[2].timestamp(), at(1, 8, 15));
    assert_eq!(readings[3].timestamp(), at(1, 23, 59));
    assert_eq!(readings[3].glucose(), 45.0);
}

#[test]
fn named_sheet_is_selected() {
    let schema = InputSchema {
        sheet: Some("Readings".to_string()),
        ..InputSchema::default()
    };
    assert_eq!(load_readings(&fixture(), &schema).unwrap().len(), 4);
}

#[test]
fn absent_sheet_is_an_input_format_error() {
    let schema = InputSchema {
        sheet: Some("Sheet1".to_string()),
        ..InputSchema::default()
    };
    let err = load_readings(&fixture(), &schema).unwrap_err();
    assert!(matches!(err, LoaderError::MissingSheet(ref name) if name == "Sheet1"));
}

#[test]
fn sheet_without_expected_headers_is_rejected() {
    let schema = InputSchema {
        sheet: Some("Notes".to_string()),
        ..InputSchema::default()
    };
    let err = load_readings(&fixture(), &schema).unwrap_err();
    assert!(matches!(err, LoaderError::MissingColumn { .. }));
}

#[test]
fn uploaded_bytes_load_like_the_file() {
    let bytes = std::fs::read(fixture()).unwrap();
    let from_bytes = load_readings_from_bytes(bytes, &InputSchema::default()).unwrap();
    let from_path = load_readings(&fixture(), &InputSchema::default()).unwrap();
    assert_eq!(from_bytes, from_path);
}

#[test]
fn non_workbook_upload_is_rejected() {
    let err = load_readings_from_bytes(b"timestamp,glucose\n".to_vec(), &InputSchema::default())
        .unwrap_err();
    assert!(matches!(err, LoaderError::Workbook(_)));
}
