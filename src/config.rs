//! # Configuration Module
//!
//! Configuration for headerstamp: which files are candidates, which are
//! skipped, how header descriptions are chosen and how an existing header is
//! recognized.
//!
//! Every value has a built-in default, so running without a config file
//! reproduces the stock behavior. Overrides live in a `.headerstamp.toml`
//! file in the root directory, or in the file named by `--config` or the
//! `HEADERSTAMP_CONFIG` environment variable.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

/// The default config file name, looked up in the root directory.
pub const DEFAULT_CONFIG_FILENAME: &str = ".headerstamp.toml";

/// Environment variable for specifying the config file path.
pub const CONFIG_ENV_VAR: &str = "HEADERSTAMP_CONFIG";

/// Description used for files that match no description prefix.
pub const DEFAULT_DESCRIPTION: &str = "Truly Open Source Documentation MCP Server";

/// Number of leading characters searched for the abbreviated marker.
pub const DEFAULT_ABBREVIATED_WINDOW: usize = 500;

const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx"];

const DEFAULT_SKIP_DIRS: &[&str] = &[
  "node_modules",
  "lib",
  "dist",
  "build",
  ".git",
  "coverage",
  "__pycache__",
  ".next",
  ".cache",
];

const DEFAULT_SKIP_SUFFIXES: &[&str] = &[
  ".d.ts", // generated declaration files
  ".test.ts",
  ".test.tsx",
  ".spec.ts",
  ".spec.tsx",
  "vitest.config.ts",
  "vite.config.ts",
  "tsconfig.json",
];

const DEFAULT_DESCRIPTIONS: &[(&str, &str)] = &[
  ("packages/shared", "Shared Types, Models, and Utilities"),
  ("packages/mcp-server", "MCP Server Implementation"),
  ("packages/api", "REST API Server"),
  ("packages/web", "Web Dashboard"),
  ("packages/indexer", "Documentation Indexing Service"),
  ("packages/storage-postgres", "PostgreSQL Storage Adapter"),
  ("packages/storage-sqlite", "SQLite Storage Adapter"),
  ("packages/storage-qdrant", "Qdrant Storage Adapter"),
];

/// How a description prefix is compared against a relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrefixMatching {
  /// The prefix must cover whole path segments: `packages/shared` matches
  /// `packages/shared/index.ts` but not `packages/shared-extra/index.ts`.
  #[default]
  Segment,
  /// Plain string-prefix comparison.
  Literal,
}

/// One entry of the description table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DescriptionRule {
  /// Path prefix relative to the root, with forward slashes.
  pub prefix: String,
  /// Text substituted into the header for files under `prefix`.
  pub description: String,
}

impl DescriptionRule {
  pub fn new(prefix: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      prefix: prefix.into(),
      description: description.into(),
    }
  }
}

/// Substrings that identify an existing license header.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarkerConfig {
  /// Searched in the whole file.
  pub full: String,
  /// Searched only near the top of the file.
  pub abbreviated: String,
}

impl Default for MarkerConfig {
  fn default() -> Self {
    Self {
      full: "GNU Affero General Public License".to_string(),
      abbreviated: "AGPL".to_string(),
    }
  }
}

/// Main configuration struct.
///
/// Built from defaults, optionally overridden by a TOML file, and handed to
/// the [`HeaderInjector`](crate::injector::HeaderInjector) at construction.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
  /// Tracked file extensions, without the leading dot.
  pub extensions: Vec<String>,

  /// Directory names that exclude every path containing them as a segment.
  pub skip_dirs: Vec<String>,

  /// Filename suffixes that exclude a file wherever it lives.
  pub skip_suffixes: Vec<String>,

  /// Ordered description table; the first matching prefix wins.
  pub descriptions: Vec<DescriptionRule>,

  /// Description for files matching no prefix.
  pub default_description: String,

  /// Prefix comparison mode for the description table.
  pub description_matching: PrefixMatching,

  /// Custom header template. Relative paths are resolved against the
  /// directory holding the config file.
  pub template_file: Option<PathBuf>,

  /// Markers used to detect an existing header.
  pub markers: MarkerConfig,

  /// Number of leading characters searched for the abbreviated marker.
  pub abbreviated_window: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      extensions: to_strings(DEFAULT_EXTENSIONS),
      skip_dirs: to_strings(DEFAULT_SKIP_DIRS),
      skip_suffixes: to_strings(DEFAULT_SKIP_SUFFIXES),
      descriptions: DEFAULT_DESCRIPTIONS
        .iter()
        .map(|(prefix, description)| DescriptionRule::new(*prefix, *description))
        .collect(),
      default_description: DEFAULT_DESCRIPTION.to_string(),
      description_matching: PrefixMatching::default(),
      template_file: None,
      markers: MarkerConfig::default(),
      abbreviated_window: DEFAULT_ABBREVIATED_WINDOW,
    }
  }
}

fn to_strings(values: &[&str]) -> Vec<String> {
  values.iter().map(|v| (*v).to_string()).collect()
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A value is present but unusable.
  #[error("Invalid value for '{key}': {message}")]
  InvalidValue { key: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// Missing keys keep their defaults. A relative `template-file` is resolved
  /// against the config file's directory.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    debug!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let mut config = Self::from_toml_str(&content).map_err(|e| match e {
      ConfigError::ParseError { source, .. } => ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
      },
      other => other,
    })?;

    if let Some(template) = config.template_file.take() {
      let resolved = if template.is_relative() {
        path.parent().map(|dir| dir.join(&template)).unwrap_or(template)
      } else {
        template
      };
      config.template_file = Some(resolved);
    }

    debug!(
      "Loaded config: {} extensions, {} description rules",
      config.extensions.len(),
      config.descriptions.len()
    );

    Ok(config)
  }

  /// Parse, validate and normalize configuration from TOML text.
  pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
      path: PathBuf::new(),
      source: e,
    })?;

    config.validate()?;
    Ok(config.normalize())
  }

  /// Check that every value is usable.
  fn validate(&self) -> Result<(), ConfigError> {
    if self.extensions.is_empty() {
      return Err(invalid("extensions", "at least one extension is required"));
    }

    for ext in &self.extensions {
      if ext.starts_with('.') {
        return Err(invalid("extensions", format!("'{ext}' should not include leading dot")));
      }
      if ext.is_empty() {
        return Err(invalid("extensions", "extension cannot be empty"));
      }
    }

    if self.skip_dirs.iter().any(|d| d.is_empty() || d.contains('/')) {
      return Err(invalid("skip-dirs", "entries must be single, non-empty directory names"));
    }

    if self.skip_suffixes.iter().any(String::is_empty) {
      return Err(invalid("skip-suffixes", "entries cannot be empty"));
    }

    for rule in &self.descriptions {
      if rule.prefix.trim_matches('/').is_empty() {
        return Err(invalid("descriptions", "prefix cannot be empty"));
      }
    }

    if self.markers.full.is_empty() {
      return Err(invalid("markers.full", "marker cannot be empty"));
    }

    if self.markers.abbreviated.is_empty() {
      return Err(invalid("markers.abbreviated", "marker cannot be empty"));
    }

    Ok(())
  }

  /// Lowercase extensions and strip stray slashes from prefixes.
  fn normalize(mut self) -> Self {
    for ext in &mut self.extensions {
      *ext = ext.to_lowercase();
    }

    for rule in &mut self.descriptions {
      rule.prefix = rule.prefix.replace('\\', "/").trim_start_matches("./").to_string();
    }

    self
  }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
  ConfigError::InvalidValue {
    key: key.to_string(),
    message: message.into(),
  }
}

/// Discover the configuration file path.
///
/// Order:
/// 1. `explicit_path` from `--config`
/// 2. the `HEADERSTAMP_CONFIG` environment variable
/// 3. `.headerstamp.toml` in the root directory
///
/// An explicit path is returned even if it does not exist, so that loading it
/// reports an error instead of silently falling back to defaults.
pub fn discover_config_path(explicit_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR)
    && !env_path.is_empty()
  {
    return Some(PathBuf::from(env_path));
  }

  let default_path = root.join(DEFAULT_CONFIG_FILENAME);
  default_path.is_file().then_some(default_path)
}

/// Load the effective configuration.
///
/// Returns the built-in defaults when `no_config` is set or no config file is
/// found.
pub fn load_config(explicit_path: Option<&Path>, root: &Path, no_config: bool) -> Result<Config> {
  if no_config {
    debug!("Config file loading disabled");
    return Ok(Config::default());
  }

  match discover_config_path(explicit_path, root) {
    Some(path) => Ok(Config::load(&path)?),
    None => {
      debug!("No config file found, using defaults");
      Ok(Config::default())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_match_stock_tables() {
    let config = Config::default();
    assert_eq!(config.extensions, vec!["ts", "tsx"]);
    assert!(config.skip_dirs.contains(&"node_modules".to_string()));
    assert!(config.skip_dirs.contains(&"lib".to_string()));
    assert!(config.skip_suffixes.contains(&".d.ts".to_string()));
    assert_eq!(config.descriptions.len(), 8);
    assert_eq!(config.descriptions[0].prefix, "packages/shared");
    assert_eq!(config.default_description, DEFAULT_DESCRIPTION);
    assert_eq!(config.description_matching, PrefixMatching::Segment);
    assert_eq!(config.abbreviated_window, 500);
  }

  #[test]
  fn test_empty_toml_yields_defaults() {
    let config = Config::from_toml_str("").expect("empty config should parse");
    assert_eq!(config, Config::default());
  }

  #[test]
  fn test_parse_full_config() {
    let content = r#"
extensions = ["RS", "toml"]
skip-dirs = ["target"]
skip-suffixes = ["_generated.rs"]
default-description = "Widgets"
description-matching = "literal"
abbreviated-window = 200

[markers]
full = "Apache License"
abbreviated = "SPDX"

[[descriptions]]
prefix = "./crates/core"
description = "Core Library"
"#;

    let config = Config::from_toml_str(content).expect("config should parse");
    assert_eq!(config.extensions, vec!["rs", "toml"]);
    assert_eq!(config.skip_dirs, vec!["target"]);
    assert_eq!(config.default_description, "Widgets");
    assert_eq!(config.description_matching, PrefixMatching::Literal);
    assert_eq!(config.abbreviated_window, 200);
    assert_eq!(config.markers.full, "Apache License");
    assert_eq!(config.descriptions, vec![DescriptionRule::new("crates/core", "Core Library")]);
  }

  #[test]
  fn test_partial_markers_keep_defaults() {
    let config = Config::from_toml_str("[markers]\nabbreviated = \"SPDX\"\n").expect("config should parse");
    assert_eq!(config.markers.full, "GNU Affero General Public License");
    assert_eq!(config.markers.abbreviated, "SPDX");
  }

  #[test]
  fn test_rejects_leading_dot_extension() {
    let err = Config::from_toml_str("extensions = [\".ts\"]").expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "extensions"));
  }

  #[test]
  fn test_rejects_empty_marker() {
    let err = Config::from_toml_str("[markers]\nfull = \"\"\n").expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "markers.full"));
  }

  #[test]
  fn test_rejects_nested_skip_dir() {
    let err = Config::from_toml_str("skip-dirs = [\"a/b\"]").expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
  }

  #[test]
  fn test_rejects_unknown_matching_mode() {
    let err = Config::from_toml_str("description-matching = \"fuzzy\"").expect_err("should fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
  }

  #[test]
  fn test_load_resolves_template_relative_to_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&config_path, "template-file = \"HEADER.txt\"\n").expect("write config");

    let config = Config::load(&config_path).expect("config should load");
    assert_eq!(config.template_file, Some(dir.path().join("HEADER.txt")));
  }

  #[test]
  fn test_load_reports_parse_error_with_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("broken.toml");
    std::fs::write(&config_path, "extensions = [").expect("write config");

    let err = Config::load(&config_path).expect_err("should fail");
    assert!(err.to_string().contains("broken.toml"));
  }

  #[test]
  fn test_load_config_no_config_ignores_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILENAME), "extensions = [\"rs\"]\n").expect("write config");

    let config = load_config(None, dir.path(), true).expect("defaults");
    assert_eq!(config.extensions, vec!["ts", "tsx"]);
  }

  #[test]
  fn test_load_config_explicit_path_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILENAME), "extensions = [\"rs\"]\n").expect("write config");
    let explicit = dir.path().join("other.toml");
    std::fs::write(&explicit, "extensions = [\"py\"]\n").expect("write config");

    let config = load_config(Some(&explicit), dir.path(), false).expect("config");
    assert_eq!(config.extensions, vec!["py"]);
  }

  #[test]
  fn test_load_config_missing_explicit_path_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = load_config(Some(&dir.path().join("missing.toml")), dir.path(), false);
    assert!(result.is_err());
  }
}
