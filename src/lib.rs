//! # headerstamp
//!
//! Stamps a license header comment onto source files that lack one.
//!
//! `headerstamp` walks a project tree, picks source files by extension while
//! skipping build output, dependency caches, generated declarations and test
//! files, and inserts a rendered header at the top of each file that does not
//! already carry it. Re-running is a no-op for files already stamped.
//!
//! ## Features
//!
//! * Per-component header text chosen from the file's location
//! * Shebang-aware placement: `#!` lines stay first
//! * Dry-run mode with optional diff previews
//! * Per-file failures are reported without stopping the run
//! * TOML configuration for extensions, skip rules, descriptions and markers
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use headerstamp::config::Config;
//! use headerstamp::injector::{HeaderInjector, InjectorConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let injector = HeaderInjector::new(InjectorConfig {
//!         dry_run: true,
//!         ..InjectorConfig::new(Config::default(), PathBuf::from("."))
//!     })?;
//!
//!     let run = injector.run()?;
//!     println!("would modify {} of {} files", run.summary.modified, run.summary.scanned);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`injector`] - Candidate discovery and header insertion
//! * [`config`] - Selection rules, description table and markers
//! * [`templates`] - The header template
//! * [`logging`] - Output modes and tracing setup

pub mod config;
pub mod detection;
pub mod diff;
pub mod injector;
pub mod logging;
pub mod output;
pub mod report;
pub mod templates;
pub mod tree;
pub mod workspace;
