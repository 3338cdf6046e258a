//! # Stamp Command
//!
//! Scans the root, adds missing headers (or previews them in a dry run) and
//! prints per-file progress plus a summary.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Args;
use headerstamp::config::load_config;
use headerstamp::diff::DiffManager;
use headerstamp::{info_log, verbose_log};
use headerstamp::injector::{HeaderInjector, InjectorConfig};
use headerstamp::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use headerstamp::output::{
  print_blank_line, print_file_results, print_hint, print_start_message, print_summary,
};
use headerstamp::report::ReportGenerator;
use headerstamp::templates::HeaderTemplate;
use headerstamp::tree::{PlannedFile, render_plan_tree};
use headerstamp::workspace::resolve_root;
use tracing::debug;

/// Arguments for the stamp command
#[derive(Args, Debug, Default)]
pub struct StampArgs {
  /// Root directory to scan (default: current directory). Reported paths are
  /// relative to it.
  #[arg(value_name = "ROOT")]
  pub root: Option<PathBuf>,

  /// Show what would be done without modifying any file
  #[arg(long)]
  pub dry_run: bool,

  /// Print a diff for every file that would be modified
  #[arg(long, requires = "dry_run")]
  pub show_diff: bool,

  /// Plan tree mode: print the candidate files and their header descriptions
  /// as a tree without reading file contents
  #[arg(long, short = 't')]
  pub plan_tree: bool,

  /// Path to config file (default: .headerstamp.toml in the root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,

  /// Write a JSON report of every file's outcome to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,
}

/// Run the stamp command with the given arguments.
///
/// Exits the process with status 1 if any file failed, after the summary has
/// been printed.
pub fn run_stamp(args: StampArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let root = resolve_root(args.root.as_deref())?;
  debug!("Using root: {}", root.display());

  let config = load_config(args.config.as_deref(), &root, args.no_config)?;
  verbose_log!(
    "Tracking extensions: {} ({} description rules)",
    config.extensions.join(", "),
    config.descriptions.len()
  );
  let template = HeaderTemplate::load_or_default(config.template_file.as_deref())?;

  let injector = HeaderInjector::new(InjectorConfig {
    template,
    dry_run: args.dry_run,
    diff_manager: Some(DiffManager::new(args.show_diff)),
    ..InjectorConfig::new(config, root.clone())
  })?;

  let candidates = injector.scan()?;

  if args.plan_tree {
    let planned: Vec<PlannedFile> = candidates
      .iter()
      .map(|path| PlannedFile {
        relative_path: injector.relative_display(path),
        description: injector.describe(path),
      })
      .collect();
    println!("{}", render_plan_tree(&planned, &root.display().to_string()));
    return Ok(());
  }

  print_start_message(&root, candidates.len(), args.dry_run);
  print_blank_line();

  let run = injector.process(&candidates);

  print_file_results(&run.files);
  print_blank_line();
  print_summary(&run.summary, args.dry_run);

  if args.dry_run && run.summary.modified > 0 {
    print_blank_line();
    print_hint("Run without --dry-run to write the headers.");
  }

  if let Some(ref output_path) = args.report_json {
    let generator = ReportGenerator::new(output_path);
    if let Err(e) = generator.generate(&run, &root, args.dry_run) {
      eprintln!("Error generating JSON report: {e:#}");
    } else {
      info_log!("Generated JSON report at {}", output_path.display());
    }
  }

  if run.summary.has_failures() {
    process::exit(1);
  }

  Ok(())
}
