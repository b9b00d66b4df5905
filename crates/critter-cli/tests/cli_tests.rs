//! Integration tests for the `acnh` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the range
//! subcommands, catalog updates via `add`, and the `now` snapshot through the
//! actual binary.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the acnh.json fixture.
fn catalog_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/acnh.json")
}

/// Helper: a scratch catalog path unique to one test, removed up front.
fn scratch_catalog(name: &str) -> std::path::PathBuf {
    let file_name = format!("acnh-test-{}-{}.json", name, std::process::id());
    let path = std::env::temp_dir().join(file_name);
    let _ = std::fs::remove_file(&path);
    path
}

fn acnh() -> Command {
    let mut cmd = Command::cargo_bin("acnh").unwrap();
    cmd.env_remove("ACNH_CATALOG").env_remove("ACNH_TIMEZONE");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("command should run");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// Range subcommands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn hours_prints_half_open_overnight_range() {
    acnh()
        .args(["hours", "9PM-3AM"])
        .assert()
        .success()
        .stdout("[21,22,23,0,1]\n");
}

#[test]
fn hours_comma_separated() {
    acnh()
        .args(["hours", "10PM-2AM, 8AM-10AM"])
        .assert()
        .success()
        .stdout("[22,23,0,1,8,9]\n");
}

#[test]
fn hours_invalid_token_fails() {
    acnh()
        .args(["hours", "7-9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse hours"))
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn months_wraparound_range() {
    acnh()
        .args(["months", "dec-February"])
        .assert()
        .success()
        .stdout("[11,0,1]\n");
}

#[test]
fn months_all_except() {
    acnh()
        .args(["months", "All except July, August"])
        .assert()
        .success()
        .stdout("[0,1,2,3,4,5,8,9,10,11]\n");
}

#[test]
fn months_unknown_month_fails() {
    acnh()
        .args(["months", "fhrblig"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown month"));
}

#[test]
fn range_is_inclusive() {
    acnh()
        .args(["range", "22-4"])
        .assert()
        .success()
        .stdout("[22,23,0,1,2,3,4]\n");
}

#[test]
fn range_with_modulus() {
    acnh()
        .args(["range", "10-1", "--modulus", "12"])
        .assert()
        .success()
        .stdout("[10,11,0,1]\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Now subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn now_text_output_for_fixed_time() {
    acnh()
        .args(["--catalog", catalog_path(), "now", "--month", "0", "--hour", "22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bugs:"))
        .stdout(predicate::str::contains(
            "Tarantula (8000 bells, On the ground): Available now until 4AM",
        ))
        .stdout(predicate::str::contains(
            "Common butterfly (160 bells, Flying): Available starting at 4AM",
        ))
        .stdout(predicate::str::contains(
            "Sea bass (400 bells, Sea, shadow 5): Available all day",
        ))
        .stdout(predicate::str::contains("Octopus (1200 bells): Available all day"));
}

#[test]
fn now_filters_out_of_season() {
    acnh()
        .args(["--catalog", catalog_path(), "now", "--month", "6", "--hour", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sea bass"))
        .stdout(predicate::str::contains("Tarantula").not())
        .stdout(predicate::str::contains("Octopus").not());
}

#[test]
fn now_json_output() {
    let snapshot = stdout_json(acnh().args([
        "--catalog",
        catalog_path(),
        "now",
        "--month",
        "11",
        "--hour",
        "10",
        "--json",
    ]));

    assert_eq!(snapshot["month"], 11);
    assert_eq!(snapshot["hour"], 10);
    let tarantula = &snapshot["bugs"][0];
    assert_eq!(tarantula["name"], "Tarantula");
    assert_eq!(tarantula["availability"]["available_now"], false);
    assert_eq!(tarantula["availability"]["available_at"], 19);
    assert_eq!(snapshot["fishes"][0]["shadow_size"], "5");
    assert!(snapshot["sea_creatures"][0].get("location").is_none());
}

#[test]
fn now_missing_catalog_fails() {
    acnh()
        .args(["--catalog", "/nonexistent/acnh.json", "now", "--month", "0", "--hour", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn now_rejects_out_of_range_hour() {
    acnh()
        .args(["--catalog", catalog_path(), "now", "--month", "0", "--hour", "24"])
        .assert()
        .failure();
}

#[test]
fn now_unknown_timezone_fails() {
    acnh()
        .args(["--catalog", catalog_path(), "--timezone", "Mars/Base", "now"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Add subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn add_creates_catalog_and_appends() {
    let path = scratch_catalog("add");
    let path_str = path.to_str().unwrap();

    acnh()
        .args([
            "--catalog",
            path_str,
            "add",
            "--kind",
            "fish",
            "--name",
            "Coelacanth",
            "--price",
            "15000",
            "--hours",
            "all",
            "--months",
            "all",
            "--location",
            "Sea (rainy days)",
            "--shadow-size",
            "6",
        ])
        .assert()
        .success();

    acnh()
        .args([
            "--catalog",
            path_str,
            "add",
            "--kind",
            "bug",
            "--name",
            "Mole cricket",
            "--price",
            "500",
            "--hours",
            "all",
            "--months",
            "Nov-May",
            "--location",
            "Underground",
        ])
        .assert()
        .success();

    let catalog: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(catalog["fishes"][0]["name"], "Coelacanth");
    assert_eq!(catalog["fishes"][0]["hours"].as_array().unwrap().len(), 24);
    assert_eq!(
        catalog["bugs"][0]["months"],
        serde_json::json!([10, 11, 0, 1, 2, 3, 4])
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn add_rejects_bad_price_and_leaves_catalog_untouched() {
    let path = scratch_catalog("bad-price");
    let path_str = path.to_str().unwrap();

    acnh()
        .args([
            "--catalog",
            path_str,
            "add",
            "--kind",
            "bug",
            "--name",
            "Ant",
            "--price",
            "lots",
            "--hours",
            "all",
            "--months",
            "all",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid price"));

    assert!(!path.exists());
}

#[test]
fn add_rejects_unknown_kind() {
    acnh()
        .args([
            "add",
            "--kind",
            "bird",
            "--name",
            "Owl",
            "--price",
            "1",
            "--hours",
            "all",
            "--months",
            "all",
        ])
        .assert()
        .failure();
}
