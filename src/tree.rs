//! # Plan Tree Module
//!
//! Renders the planned candidate set as a tree, in the style of `tree(1)`,
//! with each file annotated by the header description it would receive.

use std::collections::BTreeMap;

/// One planned file: its root-relative path and header description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
  pub relative_path: String,
  pub description: String,
}

#[derive(Debug, Default)]
struct TreeNode {
  children: BTreeMap<String, TreeNode>,
  /// Set on file leaves.
  description: Option<String>,
}

impl TreeNode {
  fn insert(&mut self, file: &PlannedFile) {
    let mut node = self;
    for segment in file.relative_path.split('/').filter(|s| !s.is_empty()) {
      node = node.children.entry(segment.to_string()).or_default();
    }
    node.description = Some(file.description.clone());
  }

  fn render(&self, prefix: &str, lines: &mut Vec<String>) {
    let count = self.children.len();

    for (i, (name, child)) in self.children.iter().enumerate() {
      let is_last_child = i + 1 == count;
      let branch = if is_last_child { "└── " } else { "├── " };

      match &child.description {
        Some(description) if child.children.is_empty() => {
          lines.push(format!("{prefix}{branch}{name}  [{description}]"));
        }
        _ => lines.push(format!("{prefix}{branch}{name}")),
      }

      if !child.children.is_empty() {
        let child_prefix = if is_last_child {
          format!("{prefix}    ")
        } else {
          format!("{prefix}│   ")
        };
        child.render(&child_prefix, lines);
      }
    }
  }

  fn count_directories(&self) -> usize {
    self
      .children
      .values()
      .filter(|child| !child.children.is_empty())
      .map(|child| 1 + child.count_directories())
      .sum()
  }
}

/// Renders `files` under a `root_label` heading, followed by a
/// `N directories, M files` line.
pub fn render_plan_tree(files: &[PlannedFile], root_label: &str) -> String {
  if files.is_empty() {
    return format!("{root_label}\n\n0 directories, 0 files");
  }

  let mut root = TreeNode::default();
  for file in files {
    root.insert(file);
  }

  let mut lines = vec![root_label.to_string()];
  root.render("", &mut lines);

  let dir_count = root.count_directories();
  let file_count = files.len();
  lines.push(String::new());
  lines.push(format!(
    "{} {}, {} {}",
    dir_count,
    if dir_count == 1 { "directory" } else { "directories" },
    file_count,
    if file_count == 1 { "file" } else { "files" }
  ));

  lines.join("\n")
}
