//! # Report Module
//!
//! Per-file outcome records, the run summary, and the JSON report written by
//! `--report-json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

/// What happened to a candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileAction {
  /// The header was written to the file.
  Added,
  /// Dry run: the header would have been written.
  WouldAdd,
  /// The file already carries the header; nothing to do.
  AlreadyPresent,
  /// Reading or writing the file failed.
  Failed,
}

/// Outcome of processing one candidate file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
  /// Absolute path of the file.
  #[serde(serialize_with = "serialize_path")]
  pub path: PathBuf,
  /// Path relative to the root, with forward slashes.
  pub relative_path: String,
  /// Action taken.
  pub action: FileAction,
  /// Description used for the header, when one was rendered.
  pub description: Option<String>,
  /// Error text for [`FileAction::Failed`].
  pub error: Option<String>,
  /// Dry-run preview of the change, when requested.
  #[serde(skip)]
  pub diff: Option<String>,
}

impl FileReport {
  pub fn new(path: PathBuf, relative_path: String, action: FileAction) -> Self {
    Self {
      path,
      relative_path,
      action,
      description: None,
      error: None,
      diff: None,
    }
  }

  pub fn failed(path: PathBuf, relative_path: String, error: &anyhow::Error) -> Self {
    Self {
      error: Some(format!("{error:#}")),
      ..Self::new(path, relative_path, FileAction::Failed)
    }
  }

  /// `true` if the file was, or in a dry run would be, modified.
  pub const fn is_modified(&self) -> bool {
    matches!(self.action, FileAction::Added | FileAction::WouldAdd)
  }
}

fn serialize_path<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_str(&path.to_string_lossy())
}

/// Counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
  /// Candidates returned by the scan.
  pub scanned: usize,
  /// Files modified, or that would be modified in a dry run.
  pub modified: usize,
  /// Files that already had a header.
  pub already_present: usize,
  /// Files that could not be read or written.
  pub failed: usize,
  /// Wall-clock time for the run.
  #[serde(skip)]
  pub elapsed: Duration,
}

impl RunSummary {
  pub fn from_reports(reports: &[FileReport], elapsed: Duration) -> Self {
    let mut summary = Self {
      scanned: reports.len(),
      elapsed,
      ..Self::default()
    };

    for report in reports {
      match report.action {
        FileAction::Added | FileAction::WouldAdd => summary.modified += 1,
        FileAction::AlreadyPresent => summary.already_present += 1,
        FileAction::Failed => summary.failed += 1,
      }
    }

    summary
  }

  pub const fn has_failures(&self) -> bool {
    self.failed > 0
  }
}

/// Everything a run produced, in scan order.
#[derive(Debug, Clone)]
pub struct RunReport {
  pub files: Vec<FileReport>,
  pub summary: RunSummary,
}

#[derive(Serialize)]
struct JsonReport<'a> {
  generated_at: String,
  root: String,
  dry_run: bool,
  summary: &'a RunSummary,
  elapsed_ms: u128,
  files: &'a [FileReport],
}

/// Writes a run report as pretty-printed JSON.
pub struct ReportGenerator<'a> {
  output_path: &'a Path,
}

impl<'a> ReportGenerator<'a> {
  pub const fn new(output_path: &'a Path) -> Self {
    Self { output_path }
  }

  /// Renders the JSON document without writing it.
  pub fn render(&self, report: &RunReport, root: &Path, dry_run: bool) -> Result<String> {
    let document = JsonReport {
      generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
      root: root.to_string_lossy().to_string(),
      dry_run,
      summary: &report.summary,
      elapsed_ms: report.summary.elapsed.as_millis(),
      files: &report.files,
    };

    serde_json::to_string_pretty(&document).with_context(|| "Failed to serialize JSON report")
  }

  pub fn generate(&self, report: &RunReport, root: &Path, dry_run: bool) -> Result<()> {
    let content = self.render(report, root, dry_run)?;
    fs::write(self.output_path, content)
      .with_context(|| format!("Failed to write report to {}", self.output_path.display()))
  }
}
