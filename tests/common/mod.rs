//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;

/// Helper to get a hafind command with a clean environment
pub fn hafind() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("hafind"));
    cmd.env_remove("HA_URL").env_remove("HA_TOKEN");
    cmd
}
