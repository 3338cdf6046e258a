//! # Injector Module
//!
//! The header injector: finds candidate files under a root, skips those that
//! already carry the license header, and inserts a rendered header into the
//! rest.
//!
//! Submodules:
//! - [`file_collector`] - candidate discovery and exclusion rules
//! - [`descriptions`] - per-location header descriptions
//! - [`content_transformer`] - shebang-aware header placement
//! - [`file_io`] - file reads and writes
//!
//! [`HeaderInjector`] ties them together.

pub mod content_transformer;
pub mod descriptions;
pub mod file_collector;
pub mod file_io;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Result, bail};
pub use content_transformer::{insert_header, split_shebang};
pub use descriptions::{DescriptionTable, relative_path_string};
pub use file_collector::FileCollector;
pub use file_io::FileIO;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::Config;
use crate::detection::{HeaderDetector, MarkerDetector};
use crate::diff::DiffManager;
use crate::report::{FileAction, FileReport, RunReport, RunSummary};
use crate::templates::HeaderTemplate;

/// Configuration for creating a [`HeaderInjector`].
pub struct InjectorConfig {
  /// Selection rules, description table and markers.
  pub config: Config,
  /// Template rendered into each header.
  pub template: HeaderTemplate,
  /// Directory to scan; reported paths are relative to it.
  pub root: PathBuf,
  /// Compute and report changes without writing.
  pub dry_run: bool,
  /// Diff previews for dry runs.
  pub diff_manager: Option<DiffManager>,
  /// Replaces the marker detector built from `config`.
  pub detector: Option<Box<dyn HeaderDetector>>,
}

impl InjectorConfig {
  /// Creates a config with the built-in template and no dry run.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// InjectorConfig {
  ///     dry_run: true,
  ///     ..InjectorConfig::new(config, root)
  /// }
  /// ```
  pub fn new(config: Config, root: PathBuf) -> Self {
    Self {
      config,
      template: HeaderTemplate::default(),
      root,
      dry_run: false,
      diff_manager: None,
      detector: None,
    }
  }
}

/// Inserts license headers into candidate files.
pub struct HeaderInjector {
  root: PathBuf,
  template: HeaderTemplate,
  descriptions: DescriptionTable,
  collector: FileCollector,
  detector: Box<dyn HeaderDetector>,
  dry_run: bool,
  diff_manager: DiffManager,
}

impl HeaderInjector {
  /// Creates an injector.
  ///
  /// # Errors
  ///
  /// Fails if the template, rendered with any description in the table,
  /// would not be recognized by the header detector. Such a header would be
  /// inserted again on every run.
  pub fn new(cfg: InjectorConfig) -> Result<Self> {
    let detector = cfg.detector.unwrap_or_else(|| {
      Box::new(MarkerDetector::new(&cfg.config.markers, cfg.config.abbreviated_window))
    });

    let descriptions = DescriptionTable::from_config(&cfg.config);
    if let Some(description) = descriptions
      .all_descriptions()
      .find(|description| !detector.has_header(&cfg.template.render(description)))
    {
      bail!(
        "Header template rendered with description '{}' does not contain the license marker \
         ('{}' anywhere, or '{}' within the first {} characters); headers would be inserted again on every run",
        description,
        cfg.config.markers.full,
        cfg.config.markers.abbreviated,
        cfg.config.abbreviated_window
      );
    }

    Ok(Self {
      root: cfg.root,
      template: cfg.template,
      descriptions,
      collector: FileCollector::new(&cfg.config),
      detector,
      dry_run: cfg.dry_run,
      diff_manager: cfg.diff_manager.unwrap_or_default(),
    })
  }

  /// Lists candidate files under the root, sorted by path.
  ///
  /// Nothing is cached; every call walks the tree again.
  pub fn scan(&self) -> Result<Vec<PathBuf>> {
    self.collector.scan(&self.root)
  }

  /// `true` if `content` already carries the license header.
  pub fn has_header(&self, content: &str) -> bool {
    self.detector.has_header(content)
  }

  /// Description for `path`, chosen by its location relative to the root.
  pub fn describe(&self, path: &Path) -> String {
    self.descriptions.lookup(&relative_path_string(path, &self.root)).to_string()
  }

  /// The full header block for `description`, ending with a blank line.
  pub fn render_header(&self, description: &str) -> String {
    self.template.render(description)
  }

  /// Path relative to the root, for display.
  pub fn relative_display(&self, path: &Path) -> String {
    relative_path_string(path, &self.root)
  }

  /// Adds the header to one file.
  ///
  /// Never fails: read and write errors are captured as
  /// [`FileAction::Failed`] so one bad file cannot stop a run.
  pub fn inject(&self, path: &Path) -> FileReport {
    let relative = self.relative_display(path);

    match self.try_inject(path, &relative) {
      Ok(report) => report,
      Err(e) => {
        debug!("Failed: {} ({:#})", relative, e);
        FileReport::failed(path.to_path_buf(), relative, &e)
      }
    }
  }

  fn try_inject(&self, path: &Path, relative: &str) -> Result<FileReport> {
    let content = FileIO::read_full_content(path)?;

    if self.has_header(&content) {
      trace!("Skipping: {} (header present)", relative);
      return Ok(FileReport::new(
        path.to_path_buf(),
        relative.to_string(),
        FileAction::AlreadyPresent,
      ));
    }

    let description = self.descriptions.lookup(relative).to_string();
    let header = self.render_header(&description);
    let new_content = insert_header(&content, &header);
    if !self.has_header(&new_content) {
      bail!("Inserted header would not be detected on the next run (license marker pushed past the detection window)");
    }

    let mut report = if self.dry_run {
      let mut report = FileReport::new(path.to_path_buf(), relative.to_string(), FileAction::WouldAdd);
      report.diff = self.diff_manager.preview(relative, &content, &new_content);
      report
    } else {
      FileIO::write_file(path, &new_content)?;
      FileReport::new(path.to_path_buf(), relative.to_string(), FileAction::Added)
    };

    debug!("{:?}: {} ({})", report.action, relative, description);
    report.description = Some(description);
    Ok(report)
  }

  /// Scans the root and processes every candidate.
  pub fn run(&self) -> Result<RunReport> {
    let candidates = self.scan()?;
    Ok(self.process(&candidates))
  }

  /// Processes already-collected candidates.
  ///
  /// Files are handled in parallel; reports come back in input order.
  pub fn process(&self, candidates: &[PathBuf]) -> RunReport {
    let start = Instant::now();

    debug!("Processing {} files with rayon", candidates.len());
    let files: Vec<FileReport> = candidates.par_iter().map(|path| self.inject(path)).collect();

    let summary = RunSummary::from_reports(&files, start.elapsed());
    debug!(
      "Processed {} files in {}ms",
      summary.scanned,
      summary.elapsed.as_millis()
    );

    RunReport { files, summary }
  }
}
