//! Integration tests for the taxi-unify CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Test helper to get the CLI binary
fn unify_cmd() -> Command {
    let mut cmd = Command::cargo_bin("taxi-unify").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Writes a GPS log with one row per (lon, lat) pair
fn write_log(dir: &Path, name: &str, points: &[(&str, &str)]) {
    let body: String = points
        .iter()
        .map(|(lon, lat)| format!("10001,2007-02-20 00:02:27,{},{},7,116,0\n", lon, lat))
        .collect();
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn test_help() {
    unify_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-files"))
        .stdout(predicate::str::contains("--batch-size"));
}

#[test]
fn test_successful_run() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Taxi_070220");
    fs::create_dir(&input).unwrap();
    write_log(&input, "Taxi_1", &[("121.423167", "31.165233"), ("120.000000", "32.000000")]);
    write_log(&input, "Taxi_2", &[("119.999999", "31.0"), ("121.5", "abc")]);
    fs::write(input.join("Taxi_3"), "").unwrap();
    let output = dir.path().join("out.csv");

    unify_cmd()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Files found: 3"))
        .stdout(predicate::str::contains("Processed: 3 / 3 files (100.0%)"))
        .stdout(predicate::str::contains("Rows removed (invalid values): 1"))
        .stdout(predicate::str::contains("[120.000000, 121.423167]"))
        .stdout(predicate::str::contains("0.00 MiB"))
        .stdout(predicate::str::contains("File generated successfully"));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "lon,lat\n121.423167,31.165233\n120.0,32.0\n"
    );
}

#[test]
fn test_truncation_warning() {
    let dir = tempdir().unwrap();
    for i in 0..4 {
        write_log(dir.path(), &format!("Taxi_{}", i), &[("121.0", "31.0")]);
    }
    let output = dir.path().join("out.csv");

    unify_cmd()
        .arg("--input")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .args(["--max-files", "2", "--batch-size", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using only the first 2 files"))
        .stdout(predicate::str::contains("Processed: 2 / 2 files (100.0%)"));

    assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 3);
}

#[test]
fn test_corrupt_file_reported() {
    let dir = tempdir().unwrap();
    write_log(dir.path(), "Taxi_a", &[("121.0", "31.0")]);
    fs::write(dir.path().join("Taxi_b"), [0xffu8, 0xfe, 0x00, 0x9f, b'\n']).unwrap();
    let output = dir.path().join("out.csv");

    unify_cmd()
        .arg("--input")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error reading Taxi_b"));
}

#[test]
fn test_missing_directory_fails() {
    let dir = tempdir().unwrap();

    unify_cmd()
        .arg("--input")
        .arg(dir.path().join("missing"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERR]"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_no_data_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Taxi_1"), "a,b\n").unwrap();

    unify_cmd()
        .arg("--input")
        .arg(dir.path())
        .arg("--output")
        .arg(dir.path().join("out.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not read any data"));
}

#[test]
fn test_zero_batch_size_rejected() {
    unify_cmd().args(["--batch-size", "0"]).assert().failure();
}

#[test]
fn test_only_first_failures_listed() {
    let dir = tempdir().unwrap();
    write_log(dir.path(), "Taxi_0", &[("121.0", "31.0")]);
    for i in 1..=7 {
        fs::write(dir.path().join(format!("Taxi_{}", i)), [0xffu8, 0xfe, b'\n']).unwrap();
    }
    let output = dir.path().join("out.csv");

    let assert = unify_cmd()
        .arg("--input")
        .arg(dir.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files with errors: 7"));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.matches("Error reading").count(), 5);
    assert!(stdout.contains("Error reading Taxi_5"));
    assert!(!stdout.contains("Error reading Taxi_6"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "lon,lat\n121.0,31.0\n");
}
