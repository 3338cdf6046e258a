//! # CLI Module
//!
//! Command-line interface: clap argument parsing and the stamp command.

mod stamp;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
pub use stamp::{StampArgs, run_stamp};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version = env!("HEADERSTAMP_VERSION"),
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Preview which files would get a header
  headerstamp --dry-run .

  # Preview with a diff of every change
  headerstamp --dry-run --show-diff path/to/project

  # Add headers in place
  headerstamp path/to/project

  # Show the planned files and their header descriptions as a tree
  headerstamp --plan-tree .

  # Use a custom config and write a JSON report
  headerstamp --config headers.toml --report-json report.json .
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub stamp_args: StampArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct.
  ///
  /// Exits the process with clap's usage error (status 2) on invalid
  /// arguments, or prints help/version and exits 0.
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
