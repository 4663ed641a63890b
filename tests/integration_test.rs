//! Integration tests for the invoice payments CLI.
//!
//! These tests run the actual binary over CSV fixtures written to a temp dir.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const INVOICES: &str = "reference,type,amount
INV-1,standard,10
INV-2,commercial,100.00
INV-3,standard,0
";

/// Writes the two input files and returns their paths.
fn write_inputs(dir: &TempDir, invoices: &str, payments: &str) -> (PathBuf, PathBuf) {
    let invoices_path = dir.path().join("invoices.csv");
    let payments_path = dir.path().join("payments.csv");
    fs::write(&invoices_path, invoices).unwrap();
    fs::write(&payments_path, payments).unwrap();
    (invoices_path, payments_path)
}

/// Run the binary over the given inputs and return stdout
fn run_processor(invoices: &str, payments: &str) -> String {
    let dir = TempDir::new().unwrap();
    let (invoices_path, payments_path) = write_inputs(&dir, invoices, payments);

    let mut cmd = Command::cargo_bin("invoice-payments").unwrap();
    let assert = cmd
        .arg(&invoices_path)
        .arg(&payments_path)
        .assert()
        .success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_payment_sequence() {
    let payments = "reference,amount
INV-1,2
INV-1,20
INV-1,8
INV-1,1
INV-2,40
INV-3,5
INV-9,1
";

    let output = run_processor(INVOICES, payments);
    let expected = "reference,amount,result,message
INV-1,2,applied,invoice is now partially paid
INV-1,20,rejected,the payment is greater than the partial amount remaining
INV-1,8,applied,\"final partial payment received, invoice is now fully paid\"
INV-1,1,rejected,invoice was already fully paid
INV-2,40,applied,invoice is now partially paid
INV-3,5,rejected,no payment needed
INV-9,1,error,There is no invoice matching this payment
";

    let output_lines: Vec<_> = output.lines().collect();
    let expected_lines: Vec<_> = expected.lines().collect();
    assert_eq!(output_lines, expected_lines);
}

#[test]
fn test_first_payment_over_amount() {
    let output = run_processor(INVOICES, "reference,amount\nINV-1,10.50\n");
    assert!(output.contains("INV-1,10.50,rejected,the payment is greater than the invoice amount"));
}

#[test]
fn test_malformed_payment_rows_are_skipped() {
    let output = run_processor(INVOICES, "reference,amount\nINV-1,\nINV-1,ten\nINV-1,10\n");
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "INV-1,10,applied,invoice is now fully paid");
}

#[test]
fn test_negative_payment_rows_are_skipped() {
    let output = run_processor(
        INVOICES,
        "reference,amount\nINV-1,-79228162514264337593543950335\nINV-1,1\n",
    );
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "reference,amount,result,message",
            "INV-1,1,applied,invoice is now partially paid",
        ]
    );
}

#[test]
fn test_unknown_invoice_type_aborts() {
    let dir = TempDir::new().unwrap();
    let (invoices_path, payments_path) = write_inputs(
        &dir,
        "reference,type,amount\nINV-1,municipal,10\n",
        "reference,amount\nINV-1,1\n",
    );

    Command::cargo_bin("invoice-payments")
        .unwrap()
        .arg(&invoices_path)
        .arg(&payments_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown invoice type 'municipal'"));
}

#[test]
fn test_missing_argument() {
    Command::cargo_bin("invoice-payments")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file argument"));
}

#[test]
fn test_nonexistent_file() {
    Command::cargo_bin("invoice-payments")
        .unwrap()
        .arg("does-not-exist.csv")
        .arg("also-missing.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
