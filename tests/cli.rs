use std::fs::read_to_string;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

use exonmerge::merge::MergeSummary;

fn exonmerge() -> Command {
    let mut cmd = Command::cargo_bin("exonmerge").unwrap();
    cmd.env("RUST_LOG", "info");
    cmd
}

#[test]
fn test_merge_reports_count() {
    let tmpdir = TempDir::new().unwrap();
    let output = tmpdir.path().join("cds.fasta");

    exonmerge()
        .arg("tests/data/exons.fasta")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 2 merged records"))
        .stderr(predicate::str::contains(
            "cds.GPLIN_000008400.t1 length 116 not a multiple of 3",
        ));

    let written = read_to_string(&output).unwrap();
    assert!(written.starts_with(">cds.GPLIN_000008300.t1 merged from 11 exons\n"));
}

#[test]
fn test_summary_file() {
    let tmpdir = TempDir::new().unwrap();
    let output = tmpdir.path().join("cds.fasta");
    let summary_path = tmpdir.path().join("summary.json");

    exonmerge()
        .arg("--line-width")
        .arg("0")
        .arg("--summary")
        .arg(&summary_path)
        .arg("tests/data/exons.fasta")
        .arg(&output)
        .assert()
        .success();

    let summary: MergeSummary =
        serde_json::from_str(&read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(summary.records, 2);
    assert_eq!(summary.exons, 12);
    assert_eq!(summary.warnings.len(), 1);

    // unwrapped output: header and sequence line per record
    assert_eq!(read_to_string(&output).unwrap().lines().count(), 4);
}

#[test]
fn test_gap_fails() {
    let mut input = NamedTempFile::new().unwrap();
    write!(input, ">b.1\nCCC\n>b.2\nGGG\n>b.4\nTTT\n").unwrap();
    let tmpdir = TempDir::new().unwrap();

    exonmerge()
        .arg(input.path())
        .arg(tmpdir.path().join("cds.fasta"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected b.3 but got b.4"));
}

#[test]
fn test_malformed_identifier_fails() {
    let mut input = NamedTempFile::new().unwrap();
    write!(input, ">cds_GPLIN1\nCCC\n").unwrap();
    let tmpdir = TempDir::new().unwrap();

    exonmerge()
        .arg(input.path())
        .arg(tmpdir.path().join("cds.fasta"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cds_GPLIN1"));
}

#[test]
fn test_custom_delimiter() {
    let mut input = NamedTempFile::new().unwrap();
    write!(input, ">tx_1\nATG\n>tx_2\nTAA\n").unwrap();
    let tmpdir = TempDir::new().unwrap();
    let output = tmpdir.path().join("cds.fasta");

    exonmerge()
        .arg("--delimiter")
        .arg("_")
        .arg(input.path())
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        read_to_string(&output).unwrap(),
        ">tx merged from 2 exons\nATGTAA\n"
    );
}

#[test]
fn test_missing_arguments() {
    exonmerge().arg("only-input.fasta").assert().failure();
}
