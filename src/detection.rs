//! # Header Detection Module
//!
//! Decides whether a file already carries the license header. The injector
//! depends only on the [`HeaderDetector`] trait, so the heuristic can be
//! swapped without touching file processing.

use crate::config::MarkerConfig;

/// Trait for header detectors.
pub trait HeaderDetector: Send + Sync {
  /// Returns `true` if `content` appears to already have a license header.
  fn has_header(&self, content: &str) -> bool;
}

/// Marker-substring detection.
///
/// The full marker (e.g. `GNU Affero General Public License`) is searched in
/// the whole content. The abbreviated marker (e.g. `AGPL`) is short enough to
/// appear by accident in a file body, so it is only searched within the first
/// `window` characters, where a header would sit.
#[derive(Debug, Clone)]
pub struct MarkerDetector {
  full: String,
  abbreviated: String,
  window: usize,
}

impl MarkerDetector {
  pub fn new(markers: &MarkerConfig, window: usize) -> Self {
    Self {
      full: markers.full.clone(),
      abbreviated: markers.abbreviated.clone(),
      window,
    }
  }
}

impl HeaderDetector for MarkerDetector {
  fn has_header(&self, content: &str) -> bool {
    content.contains(&self.full) || leading_chars(content, self.window).contains(&self.abbreviated)
  }
}

/// Returns the first `count` characters of `content`, never splitting a
/// multi-byte character.
pub fn leading_chars(content: &str, count: usize) -> &str {
  match content.char_indices().nth(count) {
    Some((end, _)) => &content[..end],
    None => content,
  }
}
