mod common;

use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use common::{read_file, setup_project, snapshot, write_file};
use predicates::prelude::*;

fn headerstamp() -> Result<Command> {
  let mut cmd = Command::cargo_bin("headerstamp")?;
  cmd.env_remove("HEADERSTAMP_CONFIG").env_remove("HEADERSTAMP_LOG");
  Ok(cmd)
}

#[test]
fn test_dry_run_lists_planned_files_without_writing() -> Result<()> {
  let dir = setup_project()?;
  let before = snapshot(dir.path())?;

  headerstamp()?
    .arg("--dry-run")
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Found 4 candidate files"))
    .stdout(predicate::str::contains("Running in DRY RUN mode"))
    .stdout(predicate::str::contains("Would add header to: packages/api/src/server.ts"))
    .stdout(predicate::str::contains("Would add header to: scripts/run.ts"))
    .stdout(predicate::str::contains("Would modify 3 files"))
    .stdout(predicate::str::contains("Already had headers: 1"))
    .stdout(predicate::str::contains("Total files scanned: 4"))
    .stdout(predicate::str::contains("node_modules").not());

  assert_eq!(snapshot(dir.path())?, before);
  Ok(())
}

#[test]
fn test_modify_writes_headers_and_is_idempotent() -> Result<()> {
  let dir = setup_project()?;

  headerstamp()?
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Added header to: packages/shared/src/types.ts"))
    .stdout(predicate::str::contains("Added headers to 3 files"));

  assert!(read_file(dir.path(), "scripts/run.ts")?.starts_with("#!/usr/bin/env node\n/**\n"));
  let after_first = snapshot(dir.path())?;

  headerstamp()?
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Added headers to 0 files"))
    .stdout(predicate::str::contains("Already had headers: 4"));

  assert_eq!(snapshot(dir.path())?, after_first);
  Ok(())
}

#[test]
fn test_verbose_lists_skipped_files() -> Result<()> {
  let dir = setup_project()?;

  headerstamp()?
    .args(["--dry-run", "-v"])
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Header already present: packages/web/src/app.tsx"));
  Ok(())
}

#[test]
fn test_failure_exits_non_zero_after_processing_the_rest() -> Result<()> {
  let dir = tempfile::tempdir()?;
  write_file(dir.path(), "src/a.ts", "const a = 1;\n")?;
  write_file(dir.path(), "src/b.ts", [0xff, 0xfe, 0x80])?;

  headerstamp()?
    .arg(dir.path())
    .assert()
    .code(1)
    .stdout(predicate::str::contains("Added header to: src/a.ts"))
    .stdout(predicate::str::contains("Failed: 1 file"))
    .stderr(predicate::function(|stderr: &str| stderr.matches("Error processing").count() == 1))
    .stderr(predicate::str::contains("Error processing src/b.ts"));

  assert!(read_file(dir.path(), "src/a.ts")?.starts_with("/**"));
  Ok(())
}

#[test]
fn test_quiet_prints_nothing_on_success() -> Result<()> {
  let dir = setup_project()?;

  headerstamp()?
    .arg("-q")
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::is_empty());
  Ok(())
}

#[test]
fn test_config_file_in_root_is_picked_up() -> Result<()> {
  let dir = tempfile::tempdir()?;
  write_file(
    dir.path(),
    ".headerstamp.toml",
    r#"
extensions = ["rs"]
skip-dirs = ["target"]
default-description = "Example Tool"
"#,
  )?;
  write_file(dir.path(), "src/main.rs", "fn main() {}\n")?;
  write_file(dir.path(), "target/out.rs", "fn main() {}\n")?;
  write_file(dir.path(), "src/index.ts", "export {};\n")?;

  headerstamp()?
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Found 1 candidate file"))
    .stdout(predicate::str::contains("Added header to: src/main.rs"));

  assert!(read_file(dir.path(), "src/main.rs")?.contains(" * Codex7 - Example Tool\n"));
  assert_eq!(read_file(dir.path(), "src/index.ts")?, "export {};\n");

  headerstamp()?
    .args(["--dry-run", "--no-config"])
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Would add header to: src/index.ts"));
  Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
  let dir = tempfile::tempdir()?;
  write_file(dir.path(), "bad.toml", "extensions = [\"\"]\n")?;

  headerstamp()?
    .arg("--config")
    .arg(dir.path().join("bad.toml"))
    .arg(dir.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("extensions"));
  Ok(())
}

#[test]
fn test_plan_tree_shows_descriptions() -> Result<()> {
  let dir = setup_project()?;
  let before = snapshot(dir.path())?;

  headerstamp()?
    .arg("--plan-tree")
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("server.ts  [REST API Server]"))
    .stdout(predicate::str::contains("run.ts  [Truly Open Source Documentation MCP Server]"))
    .stdout(predicate::str::contains("4 files"));

  assert_eq!(snapshot(dir.path())?, before);
  Ok(())
}

#[test]
fn test_report_json() -> Result<()> {
  let dir = setup_project()?;
  let out = tempfile::tempdir()?;
  let report_path = out.path().join("report.json");

  headerstamp()?
    .arg("--dry-run")
    .arg("--report-json")
    .arg(&report_path)
    .arg(dir.path())
    .assert()
    .success();

  let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&report_path)?)?;
  assert_eq!(json["dry_run"], true);
  assert_eq!(json["summary"]["modified"], 3);
  assert_eq!(json["files"].as_array().map(Vec::len), Some(4));
  Ok(())
}

#[test]
fn test_missing_root_is_an_error() -> Result<()> {
  let dir = tempfile::tempdir()?;

  headerstamp()?
    .arg(dir.path().join("does-not-exist"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("does-not-exist"));
  Ok(())
}

#[test]
fn test_colors_never_has_no_escape_codes() -> Result<()> {
  let dir = setup_project()?;

  headerstamp()?
    .args(["--dry-run", "--colors=never"])
    .arg(dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("\x1b[").not());
  Ok(())
}
