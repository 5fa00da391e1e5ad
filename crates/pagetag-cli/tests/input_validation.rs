//! Input-validation paths that must fail before any rendering backend is
//! touched: missing files, bad scale factors, unsupported table formats.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("pagetag").unwrap()
}

fn temp_file(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

#[test]
fn codes_missing_file_fails_with_message() {
    cmd()
        .args(["codes", "/nonexistent/batch.pdf"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn codes_zero_scale_is_rejected_before_opening() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = temp_file(&dir, "batch.pdf", b"not really a pdf");
    cmd()
        .args(["codes", pdf.to_str().unwrap(), "--scale", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("scale factor"));
}

#[test]
fn codes_negative_scale_is_rejected_before_opening() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = temp_file(&dir, "batch.pdf", b"not really a pdf");
    cmd()
        .args(["codes", pdf.to_str().unwrap(), "--scale=-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scale factor"));
}

#[test]
fn merge_missing_document_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let table = temp_file(&dir, "manifest.csv", b"name,qty\nwidget,2\n");
    cmd()
        .args([
            "merge",
            "/nonexistent/batch.pdf",
            table.to_str().unwrap(),
            "-o",
            dir.path().join("out.csv").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn merge_missing_table_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = temp_file(&dir, "batch.pdf", b"not really a pdf");
    cmd()
        .args([
            "merge",
            pdf.to_str().unwrap(),
            "/nonexistent/manifest.xlsx",
            "-o",
            dir.path().join("out.csv").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn merge_unsupported_table_format_is_rejected() {
    // The table is read before the document is opened, so the codec error
    // surfaces even though the PDF is garbage.
    let dir = tempfile::tempdir().unwrap();
    let pdf = temp_file(&dir, "batch.pdf", b"not really a pdf");
    let table = temp_file(&dir, "manifest.txt", b"name,qty\n");
    cmd()
        .args([
            "merge",
            pdf.to_str().unwrap(),
            table.to_str().unwrap(),
            "-o",
            dir.path().join("out.csv").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unsupported table format"));
}

#[test]
fn info_missing_file_fails_with_message() {
    cmd()
        .args(["info", "/nonexistent/batch.pdf"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
}
