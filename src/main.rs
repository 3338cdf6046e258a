//! # headerstamp
//!
//! Stamps a license header comment onto source files that lack one.

mod cli;

use anyhow::Result;

use crate::cli::{Cli, run_stamp};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_stamp(cli.stamp_args)
}
