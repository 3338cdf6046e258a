//! # Content Transformer Module
//!
//! Places a rendered header into file content. An interpreter directive
//! (`#!...`) must stay on the first line, so the header goes right after it;
//! otherwise the header goes at the very start.

const SHEBANG: &str = "#!";
const BOM: char = '\u{feff}';

/// Splits off a leading shebang line.
///
/// Returns `(shebang_line, rest)`, where `shebang_line` includes its newline
/// if it has one. Without a shebang the first element is empty.
pub fn split_shebang(content: &str) -> (&str, &str) {
  if !content.starts_with(SHEBANG) {
    return ("", content);
  }

  match content.find('\n') {
    Some(end) => content.split_at(end + 1),
    None => (content, ""),
  }
}

/// Returns `content` with `header` inserted at the right position.
///
/// A UTF-8 byte order mark stays the first character of the file. A shebang
/// line stays verbatim as the first line; if it lacked a trailing newline,
/// one is added before the header.
pub fn insert_header(content: &str, header: &str) -> String {
  let (bom, body) = match content.strip_prefix(BOM) {
    Some(rest) => (&content[..BOM.len_utf8()], rest),
    None => ("", content),
  };

  let (shebang, rest) = split_shebang(body);
  let mut out = String::with_capacity(content.len() + header.len() + 1);
  out.push_str(bom);
  out.push_str(shebang);
  if !shebang.is_empty() && !shebang.ends_with('\n') {
    out.push('\n');
  }
  out.push_str(header);
  out.push_str(rest);
  out
}
