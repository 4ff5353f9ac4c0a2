//! Integration tests for the slip codec CLI.
//!
//! These tests run the actual binary over fixture CSVs and verify the
//! emitted codes with the library's own validators.

use assert_cmd::Command;
use predicates::prelude::*;
use slip_codec::{validate_crc, validate_slip_checksum};
use std::fs;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given input file and return stdout
fn run_codec(input_file: &str) -> String {
    let mut cmd = Command::cargo_bin("slip-codec").unwrap();
    let assert = cmd.arg(input_file).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Split an output row into its four fields.
///
/// No output field ever contains a comma, so a plain split is enough.
fn split_row(row: &str) -> Vec<String> {
    row.split(',').map(|s| s.to_string()).collect()
}

#[test]
fn test_sample_records_encode_and_verify() {
    let output = run_codec(&test_data_path("records.csv"));
    let rows: Vec<&str> = output.lines().skip(1).collect();

    assert_eq!(rows.len(), 4);

    for row in rows {
        let fields = split_row(row);
        assert_eq!(fields.len(), 4);

        let slip_code = &fields[1];
        assert_eq!(slip_code.len(), 44);
        assert!(slip_code.chars().all(|c| c.is_ascii_digit()));
        assert!(validate_slip_checksum(slip_code), "bad checksum in {}", row);

        // Display grouping: 44 digits plus 3 dots and 4 spaces.
        assert_eq!(fields[2].len(), 51);

        assert!(fields[3].contains("6304"));
        assert!(validate_crc(&fields[3]), "bad CRC in {}", row);
    }
}

#[test]
fn test_invalid_rows_are_skipped() {
    let output = run_codec(&test_data_path("records_mixed.csv"));
    let rows: Vec<&str> = output.lines().skip(1).collect();

    // Only the two structurally valid rows survive.
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("1010101010,"));
    assert!(rows[1].starts_with("2020202020,"));
}

#[test]
fn test_output_is_deterministic() {
    let first = run_codec(&test_data_path("records.csv"));
    let second = run_codec(&test_data_path("records.csv"));

    assert_eq!(first, second);
}

#[test]
fn test_output_file_argument() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("encoded.csv");

    let mut cmd = Command::cargo_bin("slip-codec").unwrap();
    cmd.arg(test_data_path("records.csv"))
        .arg(out_path.to_str().unwrap())
        .assert()
        .success();

    let written = fs::read_to_string(&out_path).unwrap();
    let streamed = run_codec(&test_data_path("records.csv"));
    assert_eq!(written, streamed);
}

#[test]
fn test_output_has_correct_header() {
    let output = run_codec(&test_data_path("records.csv"));
    assert!(output.starts_with("slip_number,slip_code,slip_code_display,pix_payload"));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("slip-codec").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("slip-codec").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}
