// tests/common.rs

use std::fs;
use std::path::{Path, PathBuf};
use assert_cmd::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn linemerge_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("linemerge"))
}

/// Writes `content` to `dir/name` and returns the full path.
#[allow(dead_code)]
pub fn create_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write test fixture");
    path
}
