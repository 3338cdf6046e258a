use std::process::Command;

fn main() {
  embed_build_info();
  set_rerun_conditions();
}

fn embed_build_info() {
  // Short commit hash for `--version`; empty outside a git checkout.
  let git_hash = Command::new("git")
    .args(["rev-parse", "--short", "HEAD"])
    .output()
    .ok()
    .filter(|output| output.status.success())
    .map(|output| String::from_utf8(output.stdout).unwrap_or_default().trim().to_string())
    .unwrap_or_default();
  let pkg_version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
  let version = if git_hash.is_empty() { pkg_version } else { format!("{pkg_version} ({git_hash})") };
  println!("cargo:rustc-env=HEADERSTAMP_VERSION={version}");
}

fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
}
