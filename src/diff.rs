//! # Diff Module
//!
//! Line diffs previewing a header insertion, shown by `--dry-run --show-diff`.
//!
//! Diffs are rendered to strings rather than printed directly so that files
//! processed in parallel still print in scan order.

use std::fmt::Write as _;

use similar::{ChangeTag, TextDiff};

/// Renders line diffs between original and modified content.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffManager {
  /// Whether previews should be produced at all.
  pub show_diff: bool,
}

impl DiffManager {
  pub const fn new(show_diff: bool) -> Self {
    Self { show_diff }
  }

  /// Returns the rendered diff if previews are enabled.
  pub fn preview(&self, label: &str, original: &str, new: &str) -> Option<String> {
    self.show_diff.then(|| render_diff(label, original, new))
  }
}

/// Renders a `+`/`-`/` ` prefixed line diff headed by `Diff for <label>:`.
pub fn render_diff(label: &str, original: &str, new: &str) -> String {
  let diff = TextDiff::from_lines(original, new);

  let mut out = String::new();
  let _ = writeln!(out, "Diff for {label}:");

  for change in diff.iter_all_changes() {
    let sign = match change.tag() {
      ChangeTag::Delete => "-",
      ChangeTag::Insert => "+",
      ChangeTag::Equal => " ",
    };
    let _ = write!(out, "{sign}{change}");
    if change.missing_newline() {
      out.push('\n');
    }
  }

  out
}
