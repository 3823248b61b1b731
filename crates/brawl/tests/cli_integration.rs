//! CLI integration tests for the brawl command-line interface.
//!
//! These tests cover help output and argument parsing. None of them reach
//! the real API: commands that would need the network are pointed at an
//! unreachable address or fail before sending.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the brawl binary with no token in the environment.
fn brawl() -> Command {
    let mut cmd = Command::cargo_bin("brawl").unwrap();
    cmd.env_remove("BRAWL_API_TOKEN");
    cmd.env_remove("BRAWL_API_URL");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_displays() {
    brawl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Brawl Stars"));
}

#[test]
fn test_version_displays() {
    brawl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("brawl"));
}

#[test]
fn test_help_lists_subcommands() {
    brawl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("player"))
        .stdout(predicate::str::contains("club"))
        .stdout(predicate::str::contains("rankings"))
        .stdout(predicate::str::contains("brawlers"))
        .stdout(predicate::str::contains("events"));
}

#[test]
fn test_rankings_help_lists_paging() {
    brawl()
        .args(["rankings", "players", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--limit"))
        .stdout(predicate::str::contains("--before"))
        .stdout(predicate::str::contains("--after"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Argument Validation Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_subcommand_fails() {
    brawl().assert().failure();
}

#[test]
fn test_player_requires_tag() {
    brawl()
        .args(["player", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<TAG>"));
}

#[test]
fn test_brawler_id_must_be_numeric() {
    brawl()
        .args(["--token", "x", "brawlers", "show", "shelly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_token_reported() {
    brawl()
        .args(["events"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BRAWL_API_TOKEN"));
}

#[test]
fn test_unreachable_server_fails() {
    brawl()
        .args([
            "--token",
            "x",
            "--base-url",
            "http://127.0.0.1:9",
            "player",
            "show",
            "#2Q0VVCJ2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP error"));
}
