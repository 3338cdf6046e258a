#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

/// A file body that already carries the built-in header.
pub const STAMPED_BODY: &str = "/**\n * Codex7 - Existing\n *\n * GNU Affero General Public License\n */\n\nexport const x = 1;\n";

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: impl AsRef<[u8]>) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Reads `root/relative` as UTF-8.
pub fn read_file(root: &Path, relative: &str) -> Result<String> {
  let path = root.join(relative);
  fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Builds a small monorepo-shaped project:
///
/// - `packages/api/src/server.ts` and `packages/shared/src/types.ts` need headers
/// - `packages/web/src/app.tsx` already has one
/// - `scripts/run.ts` starts with a shebang
/// - build output, dependencies, declarations, tests and non-TS files are excluded
pub fn setup_project() -> Result<TempDir> {
  let dir = tempfile::tempdir()?;
  let root = dir.path();

  write_file(root, "packages/api/src/server.ts", "export function serve() {}\n")?;
  write_file(root, "packages/shared/src/types.ts", "export type Id = string;\n")?;
  write_file(root, "packages/web/src/app.tsx", STAMPED_BODY)?;
  write_file(root, "scripts/run.ts", "#!/usr/bin/env node\nconsole.log('hi');\n")?;

  write_file(root, "node_modules/pkg/index.ts", "export {};\n")?;
  write_file(root, "packages/api/dist/server.ts", "export {};\n")?;
  write_file(root, "packages/api/src/server.d.ts", "export {};\n")?;
  write_file(root, "packages/api/src/server.test.ts", "test('x', () => {});\n")?;
  write_file(root, "vite.config.ts", "export default {};\n")?;
  write_file(root, "README.md", "# readme\n")?;

  Ok(dir)
}

/// Snapshot of every file under `root` as (relative path, bytes).
pub fn snapshot(root: &Path) -> Result<Vec<(String, Vec<u8>)>> {
  let mut files = Vec::new();
  for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
    let entry = entry?;
    if entry.file_type().is_file() {
      let relative = entry.path().strip_prefix(root)?.to_string_lossy().replace('\\', "/");
      files.push((relative, fs::read(entry.path())?));
    }
  }
  Ok(files)
}
