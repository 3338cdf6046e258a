//! # Workspace Module
//!
//! Resolves the root directory that headerstamp scans.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Resolves the root to an absolute, canonical directory.
///
/// Uses `explicit` when given, otherwise the current directory.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
  let candidate = match explicit {
    Some(path) => path.to_path_buf(),
    None => std::env::current_dir().with_context(|| "Failed to get current directory")?,
  };

  let root = candidate
    .canonicalize()
    .with_context(|| format!("Failed to resolve root directory: {}", candidate.display()))?;

  if !root.is_dir() {
    bail!("Root is not a directory: {}", root.display());
  }

  Ok(root)
}
