//! # File I/O Module
//!
//! Synchronous whole-file reads and writes, with the file named in every
//! error.

use std::path::Path;

use anyhow::{Context, Result};

pub struct FileIO;

impl FileIO {
  /// Reads a whole file as UTF-8.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Overwrites a file in place.
  pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}
