//! Integration tests for the marshrut CLI
//!
//! These tests run the marshrut binary and verify flag handling, exit
//! codes and the structured error envelope.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;

/// Get a Command for marshrut
fn marshrut() -> Command {
    cargo_bin_cmd!("marshrut")
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    marshrut()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: marshrut"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_version_flag() {
    marshrut()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("marshrut"));
}

#[test]
fn test_subcommand_help() {
    marshrut()
        .args(["route", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Find a route between two stations",
        ))
        .stdout(predicate::str::contains("--algo"));
}

#[test]
fn test_no_command_prints_blurb() {
    marshrut()
        .assert()
        .success()
        .stdout(predicate::str::contains("marshrut"))
        .stdout(predicate::str::contains("route planner"));
}

// ============================================================================
// Exit code tests
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    marshrut()
        .args(["--format", "invalid", "stats"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    marshrut()
        .args(["--format", "json", "stats", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_duplicate_format_json_usage_error() {
    marshrut()
        .args(["--format", "json", "--format", "human", "stats"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"duplicate_format\""));
}

#[test]
fn test_unknown_command_exit_code_2() {
    marshrut().arg("nonexistent").assert().code(2);
}

#[test]
fn test_unknown_command_json_usage_error() {
    marshrut()
        .args(["--format", "json", "nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_route_argument_exit_code_2() {
    marshrut().args(["route", "Teatralna"]).assert().code(2);
}

// ============================================================================
// Station resolution errors
// ============================================================================

#[test]
fn test_unknown_station_exit_code_3() {
    marshrut()
        .args(["route", "Hogwarts", "Lisova"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("station not found: Hogwarts"));
}

#[test]
fn test_unknown_station_json_envelope() {
    marshrut()
        .args(["--format", "json", "route", "Hogwarts", "Lisova"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"station_not_found\""))
        .stderr(predicate::str::contains("\"code\":3"));
}

#[test]
fn test_quiet_suppresses_human_error_output() {
    marshrut()
        .args(["--quiet", "route", "Hogwarts", "Lisova"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unknown_station_in_compare() {
    marshrut()
        .args(["compare", "Teatralna", "Narnia"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("station not found: Narnia"));
}
