//! # Templates Module
//!
//! The header template: a fixed comment block with a single
//! `{description}` slot, rendered once per file with the description chosen
//! for that file's location.
//!
//! ## Example
//!
//! ```rust
//! use headerstamp::templates::HeaderTemplate;
//!
//! let template = HeaderTemplate::default();
//! let header = template.render("REST API Server");
//!
//! assert!(header.starts_with("/**\n * Codex7 - REST API Server\n"));
//! assert!(header.ends_with(" */\n\n"));
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Placeholder replaced with the per-file description.
pub const DESCRIPTION_SLOT: &str = "{description}";

/// Built-in AGPL v3 header.
pub const DEFAULT_TEMPLATE: &str = "/**
 * Codex7 - {description}
 *
 * Copyright (C) 2025 Jenova Marie and Codex7 Contributors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */

";

/// A header template with one description slot.
///
/// The stored text always ends with a single blank line, which separates the
/// header from the original file content once inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
  text: String,
}

impl Default for HeaderTemplate {
  fn default() -> Self {
    Self::new(DEFAULT_TEMPLATE)
  }
}

impl HeaderTemplate {
  /// Creates a template from raw text, normalizing the trailing separator.
  pub fn new(text: &str) -> Self {
    let text = format!("{}\n\n", text.trim_end());
    if !text.contains(DESCRIPTION_SLOT) {
      warn!("Header template has no {} slot; every file gets the same header", DESCRIPTION_SLOT);
    }
    Self { text }
  }

  /// Loads a template from a file.
  pub fn load(path: &Path) -> Result<Self> {
    debug!("Loading header template from: {}", path.display());

    let text =
      fs::read_to_string(path).with_context(|| format!("Failed to read header template file: {}", path.display()))?;

    Ok(Self::new(&text))
  }

  /// Loads the template from `path` if given, otherwise returns the built-in
  /// one.
  pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
    match path {
      Some(path) => Self::load(path),
      None => Ok(Self::default()),
    }
  }

  /// Substitutes `description` into the template.
  pub fn render(&self, description: &str) -> String {
    self.text.replace(DESCRIPTION_SLOT, description)
  }
}
