/*!
 * Common test utilities for the vocab-drill test suite
 */

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vocab_drill::app_config::Config;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Config whose stores live inside `dir`
pub fn config_in(dir: &Path) -> Config {
    Config {
        vocab_file_path: dir.join("vocabulary.org").to_string_lossy().to_string(),
        flashcard_file_path: dir.join("drill.org").to_string_lossy().to_string(),
        ..Config::default()
    }
}

/// Reads a store, treating a missing file as empty
pub fn read_store(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

/// Two vocabulary entries as a save would have written them
pub const SAMPLE_VOCABULARY: &str = "* Haus\n** house\n\n* привет\n** hello\n\n";

/// Routes library log output to the test harness, filtered by `RUST_LOG`
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
