//! Tests for CLI argument parsing and non-interactive runs of the binary

use assert_cmd::Command;
use clap::Parser;
use predicates::prelude::*;
use refolio::cli::Cli;
use std::path::{Path, PathBuf};

#[path = "common/mod.rs"]
mod common;

use common::{assert_absent, assert_exists, create_base_dir, write_csv};

fn refolio() -> Command {
    Command::cargo_bin("refolio").unwrap()
}

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["refolio"]);

    assert!(cli.base_dir.is_none());
    assert!(cli.csv.is_none());
    assert!(!cli.dry_run, "Default dry_run should be false");
    assert!(!cli.no_confirm, "Default no_confirm should be false");
    assert!(cli.report.is_none());
    assert_eq!(cli.log_level(), "warn");
}

#[test]
fn test_cli_all_flags() {
    let cli = Cli::parse_from([
        "refolio",
        "-b",
        "/data/entregables",
        "-c",
        "fix.csv",
        "--dry-run",
        "--no-confirm",
        "--report",
        "out.json",
        "-vv",
    ]);

    assert_eq!(cli.base_dir, Some(PathBuf::from("/data/entregables")));
    assert_eq!(cli.csv, Some(PathBuf::from("fix.csv")));
    assert!(cli.dry_run);
    assert!(cli.no_confirm);
    assert_eq!(cli.report, Some(PathBuf::from("out.json")));
    assert_eq!(cli.log_level(), "debug");
}

#[test]
fn test_cli_long_flags() {
    let cli = Cli::parse_from(["refolio", "--base-dir", "/base", "--csv", "/abs/fix.csv", "--verbose"]);

    assert_eq!(cli.base_dir, Some(PathBuf::from("/base")));
    assert_eq!(cli.log_level(), "info");
}

#[test]
fn test_cli_csv_path_resolution() {
    let relative = Cli::parse_from(["refolio", "-c", "fix.csv"]);
    assert_eq!(
        relative.csv_path(Path::new("/base")),
        Some(PathBuf::from("/base/fix.csv"))
    );

    let absolute = Cli::parse_from(["refolio", "-c", "/other/fix.csv"]);
    assert_eq!(
        absolute.csv_path(Path::new("/base")),
        Some(PathBuf::from("/other/fix.csv"))
    );

    let none = Cli::parse_from(["refolio"]);
    assert!(none.csv_path(Path::new("/base")).is_none());
}

#[test]
fn test_binary_renames_without_confirmation() {
    let base = create_base_dir(&["2017/04/egreso/20170413.pdf"]);
    write_csv(
        base.path(),
        "fix.csv",
        "path,folio,folio_correcto\n2017/04/egreso,20170413,17040075\n",
    );

    refolio()
        .arg("--base-dir")
        .arg(base.path())
        .arg("--no-confirm")
        .assert()
        .success()
        .stdout(predicate::str::contains("[RENAMED] 20170413.pdf -> 17040075.pdf"));

    assert_exists(base.path(), &["2017/04/egreso/17040075.pdf"]);
    assert_absent(base.path(), &["2017/04/egreso/20170413.pdf"]);
}

#[test]
fn test_binary_dry_run_changes_nothing() {
    let base = create_base_dir(&["docs/a.pdf"]);
    write_csv(base.path(), "fix.csv", "path,folio,folio_correcto\ndocs,a,b\n");

    refolio()
        .arg("--base-dir")
        .arg(base.path())
        .args(["--csv", "fix.csv", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert_exists(base.path(), &["docs/a.pdf"]);
    assert_absent(base.path(), &["docs/b.pdf"]);
}

#[test]
fn test_binary_writes_json_report() {
    let base = create_base_dir(&["docs/a.pdf", "docs/b.pdf"]);
    write_csv(base.path(), "fix.csv", "path,folio,folio_correcto\ndocs,a,b\n");
    let report_path = base.path().join("report.json");

    refolio()
        .arg("--base-dir")
        .arg(base.path())
        .arg("--no-confirm")
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["summary"]["moved"], 0);
    assert_eq!(json["summary"]["skipped"], 1);
    assert_eq!(json["entries"][0]["detail"], "conflict");
}

#[test]
fn test_binary_does_not_ask_when_nothing_is_ready() {
    let base = create_base_dir(&["docs/a.pdf", "docs/b.pdf"]);
    write_csv(base.path(), "fix.csv", "path,folio,folio_correcto\ndocs,a,b\n");

    // No --no-confirm: a confirmation prompt would fail without a terminal
    refolio()
        .arg("--base-dir")
        .arg(base.path())
        .args(["--csv", "fix.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to rename."))
        .stdout(predicate::str::contains("Apply 0").not());

    assert_exists(base.path(), &["docs/a.pdf", "docs/b.pdf"]);
}

#[test]
fn test_binary_reports_skipped_rows() {
    let base = create_base_dir(&["docs/a.pdf"]);
    write_csv(
        base.path(),
        "fix.csv",
        "path,folio,folio_correcto\ndocs,a,b\ndocs,,c\n",
    );

    refolio()
        .arg("--base-dir")
        .arg(base.path())
        .arg("--no-confirm")
        .assert()
        .success()
        .stdout(predicate::str::contains("correction row(s)"))
        .stdout(predicate::str::contains("(1 skipped)"));
}

#[test]
fn test_binary_fails_on_missing_base_dir() {
    let base = create_base_dir(&[]);

    refolio()
        .arg("--base-dir")
        .arg(base.path().join("does-not-exist"))
        .arg("--no-confirm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("base directory does not exist"));
}

#[test]
fn test_binary_fails_without_csv_files() {
    let base = create_base_dir(&["docs/a.pdf"]);

    refolio()
        .arg("--base-dir")
        .arg(base.path())
        .arg("--no-confirm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no .csv files found"));
}

#[test]
fn test_binary_fails_on_schema_error() {
    let base = create_base_dir(&["docs/a.pdf"]);
    write_csv(base.path(), "fix.csv", "carpeta,folio,nuevo\ndocs,a,b\n");

    refolio()
        .arg("--base-dir")
        .arg(base.path())
        .arg("--no-confirm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required column(s): path, folio_correcto"));

    assert_exists(base.path(), &["docs/a.pdf"]);
}

#[test]
fn test_binary_requires_csv_choice_when_ambiguous() {
    let base = create_base_dir(&[]);
    write_csv(base.path(), "a.csv", "path,folio,folio_correcto\n");
    write_csv(base.path(), "b.csv", "path,folio,folio_correcto\n");

    refolio()
        .arg("--base-dir")
        .arg(base.path())
        .arg("--no-confirm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("a.csv, b.csv"));
}

#[test]
fn test_binary_with_no_valid_rows_succeeds() {
    let base = create_base_dir(&[]);
    write_csv(base.path(), "fix.csv", "path,folio,folio_correcto\ndocs,,b\n");

    refolio()
        .arg("--base-dir")
        .arg(base.path())
        .arg("--no-confirm")
        .assert()
        .success()
        .stdout(predicate::str::contains("No valid rows"))
        .stdout(predicate::str::contains("Row 2: incomplete data; skipped"));
}
