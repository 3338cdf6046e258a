//! # Output Module
//!
//! All user-facing console output: the start banner, one progress line per
//! file, diff previews and the closing summary block.
//!
//! Progress goes to stdout and respects quiet mode. Failures go to stderr
//! and are always shown.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{FileAction, FileReport, RunSummary};

/// Symbols used in output
pub mod symbols {
  /// Header added
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Processing failed
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Header already present
  pub const SKIPPED: &str = "-";
  /// Dry run: would add
  pub const PLANNED: &str = "~";
}

/// Width of the rules framing the summary block.
const RULE_WIDTH: usize = 60;

fn plural(count: usize) -> &'static str {
  if count == 1 { "file" } else { "files" }
}

/// Print the scan banner and candidate count.
pub fn print_start_message(root: &Path, file_count: usize, dry_run: bool) {
  if is_quiet() {
    return;
  }

  println!("Scanning for source files in: {}", root.display());
  println!("Found {} candidate {}", file_count, plural(file_count));

  if dry_run {
    println!(
      "{}",
      "Running in DRY RUN mode - no files will be modified".if_supports_color(Stream::Stdout, |s| s.yellow())
    );
  }
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Render the progress line for one file, or `None` if the outcome is not
/// shown at the current verbosity.
pub fn file_status_line(report: &FileReport, verbose: bool) -> Option<String> {
  let path = &report.relative_path;
  match report.action {
    FileAction::Added => Some(format!(
      "{} Added header to: {}",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      path
    )),
    FileAction::WouldAdd => Some(format!(
      "{} Would add header to: {}",
      symbols::PLANNED.if_supports_color(Stream::Stdout, |s| s.yellow()),
      path
    )),
    FileAction::AlreadyPresent if verbose => Some(format!(
      "{} Header already present: {}",
      symbols::SKIPPED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
      path.if_supports_color(Stream::Stdout, |s| s.dimmed())
    )),
    FileAction::AlreadyPresent => None,
    FileAction::Failed => Some(format!(
      "{} Error processing {}: {}",
      symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
      path,
      report.error.as_deref().unwrap_or("unknown error")
    )),
  }
}

/// Print one line per file in report order, plus any diff previews.
pub fn print_file_results(reports: &[FileReport]) {
  let verbose = is_verbose();

  for report in reports {
    if let Some(diff) = &report.diff {
      eprint!("{diff}");
    }

    let Some(line) = file_status_line(report, verbose) else {
      continue;
    };

    if report.action == FileAction::Failed {
      eprintln!("{line}");
    } else if !is_quiet() {
      println!("{line}");
    }
  }
}

/// Render the summary block.
pub fn summary_lines(summary: &RunSummary, dry_run: bool, verbose: bool) -> Vec<String> {
  let rule = "=".repeat(RULE_WIDTH);
  let mut lines = vec![rule.clone()];

  let modified = summary.modified.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string();
  if dry_run {
    lines.push(format!("Would modify {} {}", modified, plural(summary.modified)));
  } else {
    lines.push(format!("Added headers to {} {}", modified, plural(summary.modified)));
  }

  if verbose || summary.already_present > 0 {
    lines.push(format!(
      "Already had headers: {}",
      summary.already_present.if_supports_color(Stream::Stdout, |s| s.dimmed())
    ));
  }

  if summary.failed > 0 {
    lines.push(format!(
      "Failed: {} {}",
      summary.failed.if_supports_color(Stream::Stdout, |s| s.red()),
      plural(summary.failed)
    ));
  }

  let mut total = format!("Total files scanned: {}", summary.scanned);
  if verbose {
    total.push_str(&format!(" ({:.2}s)", summary.elapsed.as_secs_f64()));
  }
  lines.push(total);
  lines.push(rule);
  lines
}

/// Print the summary block.
pub fn print_summary(summary: &RunSummary, dry_run: bool) {
  if is_quiet() {
    return;
  }

  for line in summary_lines(summary, dry_run, is_verbose()) {
    println!("{line}");
  }
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}
