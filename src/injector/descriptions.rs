//! # Descriptions Module
//!
//! Chooses the header description for a file from its location.

use std::path::Path;

use crate::config::{Config, DescriptionRule, PrefixMatching};

/// Ordered prefix table with a fallback description.
#[derive(Debug, Clone)]
pub struct DescriptionTable {
  rules: Vec<DescriptionRule>,
  default_description: String,
  matching: PrefixMatching,
}

impl DescriptionTable {
  pub fn new(rules: Vec<DescriptionRule>, default_description: String, matching: PrefixMatching) -> Self {
    Self {
      rules,
      default_description,
      matching,
    }
  }

  /// Builds the table from the configured rules, fallback and matching mode.
  pub fn from_config(config: &Config) -> Self {
    Self::new(
      config.descriptions.clone(),
      config.default_description.clone(),
      config.description_matching,
    )
  }

  /// Description for a root-relative path with forward slashes. The first
  /// matching rule wins.
  pub fn lookup(&self, relative: &str) -> &str {
    self
      .rules
      .iter()
      .find(|rule| prefix_matches(relative, &rule.prefix, self.matching))
      .map_or(self.default_description.as_str(), |rule| rule.description.as_str())
  }

  pub fn default_description(&self) -> &str {
    &self.default_description
  }

  /// Every description a file can receive: each rule's, then the default.
  pub fn all_descriptions(&self) -> impl Iterator<Item = &str> {
    self
      .rules
      .iter()
      .map(|rule| rule.description.as_str())
      .chain(std::iter::once(self.default_description.as_str()))
  }
}

/// Compares `prefix` against `relative` under the given matching mode.
pub fn prefix_matches(relative: &str, prefix: &str, matching: PrefixMatching) -> bool {
  match matching {
    PrefixMatching::Literal => relative.starts_with(prefix),
    PrefixMatching::Segment => {
      let prefix = prefix.trim_end_matches('/');
      match relative.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
      }
    }
  }
}

/// Renders `path` relative to `root` with forward slashes.
///
/// Paths outside the root are expressed with `..` segments; if no relative
/// form exists the path is returned unchanged.
pub fn relative_path_string(path: &Path, root: &Path) -> String {
  let relative = match path.strip_prefix(root) {
    Ok(relative) => relative.to_path_buf(),
    Err(_) => pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf()),
  };
  relative.to_string_lossy().replace('\\', "/")
}
