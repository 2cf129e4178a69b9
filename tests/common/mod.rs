//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get a lotscan command
pub fn lotscan() -> Command {
    Command::new(cargo::cargo_bin!("lotscan"))
}

/// Helper to get a lotscan command wired to a temp data file
pub fn lotscan_with(data_file: &std::path::Path) -> Command {
    let mut cmd = lotscan();
    cmd.env("LOTSCAN_DATA_FILE", data_file);
    cmd
}

/// Path of the data file inside a temp dir
pub fn data_file(tmp: &TempDir) -> PathBuf {
    tmp.path().join("part_data.json")
}

/// Helper to register a mapping
pub fn add_part(tmp: &TempDir, digits: &str, digit: &str, part: &str, revision: &str) {
    lotscan_with(&data_file(tmp))
        .args([
            "part", "add", "--digits", digits, "--digit", digit, "--part", part, "--revision",
            revision,
        ])
        .assert()
        .success();
}
