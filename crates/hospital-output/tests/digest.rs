//! Integration tests for the text digest.

use std::fs;

use hospital_model::{HospitalRecord, NOT_AVAILABLE, ReportOptions};
use hospital_output::{read_directory, render_digest, write_digest, write_directory};

fn record(idx: usize) -> HospitalRecord {
    HospitalRecord {
        hospital_name: format!("Hospital {idx}"),
        city: NOT_AVAILABLE.to_string(),
        district: "Salem".to_string(),
        state: "Tamil Nadu".to_string(),
        contact: format!("98765432{idx:02}"),
        email: NOT_AVAILABLE.to_string(),
        specialties: "General Medicine".to_string(),
    }
}

#[test]
fn test_digest_text_matches_expected_layout() {
    let dir = tempfile::tempdir().unwrap();
    let workbook = dir.path().join("cleaned.xlsx");
    let records: Vec<_> = (1..=7).map(record).collect();
    write_directory(&workbook, &records).unwrap();

    let options = ReportOptions {
        limit: 2,
        ..ReportOptions::default()
    };
    let text = render_digest(&read_directory(&workbook).unwrap(), &options);

    insta::assert_snapshot!(text, @r"
    Found 7 hospitals supporting CMCHIS.
    Displaying the first 2 results:

    Hospital Name: Hospital 1
    District, State: Salem, Tamil Nadu
    Specialist: General Medicine
    Contact Number: 9876543201
    Email: Not Available
    ------------------------------
    Hospital Name: Hospital 2
    District, State: Salem, Tamil Nadu
    Specialist: General Medicine
    Contact Number: 9876543202
    Email: Not Available
    ------------------------------

    ... and 5 more hospitals.
    ");
}

#[test]
fn test_write_digest_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let workbook = dir.path().join("cleaned.xlsx");
    let output = dir.path().join("results.txt");
    let records: Vec<_> = (1..=3).map(record).collect();
    write_directory(&workbook, &records).unwrap();

    let summary = write_digest(&workbook, &output, &ReportOptions::default()).unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.listed, 3);
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("Found 3 hospitals supporting CMCHIS.\n"));
    assert!(!text.contains("more hospitals"));
}

#[test]
fn test_write_digest_for_empty_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let workbook = dir.path().join("cleaned.xlsx");
    let output = dir.path().join("results.txt");
    write_directory(&workbook, &[]).unwrap();

    let options = ReportOptions {
        scheme: "PMJAY".to_string(),
        ..ReportOptions::default()
    };
    let summary = write_digest(&workbook, &output, &options).unwrap();

    assert_eq!(summary.total, 0);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "No hospitals found under PMJAY insurance."
    );
}
