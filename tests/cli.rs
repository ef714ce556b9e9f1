//! End-to-end tests of the `gas-compare` binary.

use std::{env, fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const REPORT: &str = "\
Collected 4 test(s) from cairo_iterators package
Running 4 test(s) from tests/
[PASS] cairo_iterators_integrationtest::test_sum::benchmark_sum_iterator_small (l1_gas: ~10, l1_data_gas: ~2, l2_gas: ~100)
[PASS] cairo_iterators_integrationtest::test_sum::benchmark_sum_loop_small (l1_gas: ~10, l1_data_gas: ~2, l2_gas: ~150)
[PASS] cairo_iterators_integrationtest::test_map::benchmark_map_iterator_large (l1_gas: ~10, l1_data_gas: ~2, l2_gas: ~1234567)
[PASS] cairo_iterators_integrationtest::test_misc::test_helper (l1_gas: ~1, l1_data_gas: ~1, l2_gas: ~1)
Tests: 4 passed, 0 failed, 0 skipped, 0 ignored, 0 filtered out
";

fn gas_compare() -> Command {
  let mut cmd = Command::cargo_bin("gas-compare").expect("gas-compare binary");
  cmd.env("RUST_LOG", "off");
  cmd
}

/// Writes an executable `snforge` shell script into a fresh directory.
#[cfg(unix)]
fn fake_snforge(script: &str) -> TempDir {
  use std::os::unix::fs::PermissionsExt;

  let dir = tempdir().unwrap();
  let path = dir.path().join("snforge");
  fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
  fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

  dir
}

/// `PATH` with `dir` searched first.
fn path_with(dir: &Path) -> std::ffi::OsString {
  let mut paths = vec![dir.to_path_buf()];
  paths.extend(env::split_paths(&env::var_os("PATH").unwrap_or_default()));

  env::join_paths(paths).unwrap()
}

fn row(cols: [&str; 5]) -> String {
  format!("{:<12} {:<20} {:<20} {:<20} {:<15}", cols[0], cols[1], cols[2], cols[3], cols[4])
}

#[test]
fn piped_report() {
  gas_compare()
    .write_stdin(REPORT)
    .assert()
    .success()
    .stdout(predicate::str::contains(
      "GAS COST COMPARISON: Iterator vs Traditional Loop",
    ))
    .stdout(predicate::str::contains("\nMAP\n"))
    .stdout(predicate::str::contains("\nSUM\n"))
    .stdout(predicate::str::contains(row(["Small", "100", "150", "+50", "+33.3%"])))
    .stdout(predicate::str::contains(row(["Large", "1,234,567", "N/A", "N/A", "N/A"])))
    .stdout(predicate::str::contains("Average Gas Costs (across all 1 comparisons):"))
    .stdout(predicate::str::contains("HELPER").not());
}

#[test]
fn input_file() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("gas-report.txt");
  fs::write(&path, REPORT).unwrap();

  gas_compare()
    .arg("--input")
    .arg(&path)
    .assert()
    .success()
    .stdout(predicate::str::contains(row(["Small", "100", "150", "+50", "+33.3%"])));
}

#[test]
fn dash_reads_stdin() {
  gas_compare()
    .args(["-i", "-"])
    .write_stdin(REPORT)
    .assert()
    .success()
    .stdout(predicate::str::contains("\nSUM\n"));
}

#[test]
fn no_results_fails() {
  gas_compare()
    .write_stdin("Compiling cairo_iterators\n[FAIL] pkg::benchmark_sum_loop_small\n")
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("No test results found!"));
}

#[test]
fn missing_input_file_fails() {
  gas_compare()
    .args(["--input", "/nonexistent/gas-report.txt"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("gas-report.txt"));
}

#[test]
fn only_unrelated_tests_still_prints_report() {
  gas_compare()
    .write_stdin("[PASS] pkg::test_helper (l1_gas: ~1, l1_data_gas: ~1, l2_gas: ~1)\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("SUMMARY"))
    .stdout(predicate::str::contains("Average Gas Costs").not());
}

#[cfg(unix)]
#[test]
fn failing_snforge_aborts_with_its_stderr() {
  let bin = fake_snforge("echo 'error: could not compile cairo_iterators' >&2\nexit 2");

  gas_compare()
    .arg("--run")
    .env("PATH", path_with(bin.path()))
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("error: could not compile cairo_iterators"));
}

#[cfg(unix)]
#[test]
fn snforge_report_is_rendered() {
  let dir = tempdir().unwrap();
  let report = dir.path().join("gas-report.txt");
  fs::write(&report, REPORT).unwrap();
  let bin = fake_snforge(&format!("cat '{}'", report.display()));

  gas_compare()
    .arg("--run")
    .env("PATH", path_with(bin.path()))
    .assert()
    .success()
    .stdout(predicate::str::contains(row(["Small", "100", "150", "+50", "+33.3%"])));
}

#[test]
fn run_conflicts_with_input() {
  gas_compare().args(["--run", "--input", "-"]).assert().failure();
}
