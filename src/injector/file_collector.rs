//! # File Collector Module
//!
//! Recursive discovery of candidate files under the root.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use anyhow::{Result, bail};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;

/// Selects candidate files by extension, skip directories and skip suffixes.
#[derive(Debug, Clone)]
pub struct FileCollector {
  extensions: Vec<String>,
  skip_dirs: HashSet<String>,
  skip_suffixes: Vec<String>,
}

impl FileCollector {
  pub fn new(config: &Config) -> Self {
    Self {
      extensions: config.extensions.clone(),
      skip_dirs: config.skip_dirs.iter().cloned().collect(),
      skip_suffixes: config.skip_suffixes.clone(),
    }
  }

  /// Lists every candidate under `root`, sorted by path.
  ///
  /// Skipped directories are pruned without being descended into. Symlinks
  /// are not followed. Entries that cannot be read are logged and skipped.
  pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
      bail!("Root is not a directory: {}", root.display());
    }

    debug!("Scanning directory: {}", root.display());
    let start_time = std::time::Instant::now();

    let mut candidates = Vec::new();
    let walker = WalkDir::new(root)
      .follow_links(false)
      .into_iter()
      .filter_entry(|entry| !self.is_pruned(entry));

    for entry in walker {
      let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
          warn!("Error reading directory entry: {}", e);
          continue;
        }
      };

      if !entry.file_type().is_file() {
        if entry.path_is_symlink() {
          trace!("Skipping symlink: {}", entry.path().display());
        }
        continue;
      }

      let path = entry.path();
      let relative = path.strip_prefix(root).unwrap_or(path);
      if self.is_candidate(relative) {
        candidates.push(path.to_path_buf());
      } else {
        trace!("Skipping: {}", relative.display());
      }
    }

    candidates.sort();

    debug!(
      "Found {} candidates in {}ms",
      candidates.len(),
      start_time.elapsed().as_millis()
    );

    Ok(candidates)
  }

  /// Directories named in the skip set are not descended into. The root
  /// itself is never pruned.
  fn is_pruned(&self, entry: &DirEntry) -> bool {
    entry.depth() > 0
      && entry.file_type().is_dir()
      && entry.file_name().to_str().is_some_and(|name| self.skip_dirs.contains(name))
  }

  /// Full candidate test for a path relative to the root.
  pub fn is_candidate(&self, relative: &Path) -> bool {
    self.has_tracked_extension(relative) && !self.is_excluded(relative)
  }

  /// `true` if the extension is tracked (case-insensitive).
  pub fn has_tracked_extension(&self, path: &Path) -> bool {
    path
      .extension()
      .and_then(OsStr::to_str)
      .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
  }

  /// `true` if any segment of `relative` is a skip directory or the file name
  /// ends with a skip suffix.
  pub fn is_excluded(&self, relative: &Path) -> bool {
    let in_skipped_dir = relative.components().any(|component| match component {
      Component::Normal(segment) => segment.to_str().is_some_and(|s| self.skip_dirs.contains(s)),
      _ => false,
    });
    if in_skipped_dir {
      return true;
    }

    relative
      .file_name()
      .and_then(OsStr::to_str)
      .is_some_and(|name| self.skip_suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())))
  }
}
