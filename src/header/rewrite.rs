//! # Header Rewrite Module
//!
//! Pure text transformations for the header rewrite: validating the
//! expected header shape and substituting the project-name and file-label
//! lines while leaving every other byte of the file unchanged.

use std::borrow::Cow;

use super::category::FileCategory;

/// Minimum number of lines a file must have to carry a rewritable header.
pub const MIN_HEADER_LINES: usize = 5;

/// Zero-based index of the project-name line (the third line).
const PROJECT_LINE: usize = 2;

/// Zero-based index of the file-label line (the fifth line).
const LABEL_LINE: usize = 4;

/// File-name prefix that marks a test file.
const TEST_PREFIX: &str = "test_";

/// Derive the header label from a file name.
///
/// The label is the file name text before the first `.`. For source files
/// following the `test_` naming convention the label is spelled out as
/// `tests for <rest>`; Makefiles never get this treatment.
pub fn derive_label(file_name: &str, category: FileCategory) -> String {
  let base = file_name.split('.').next().unwrap_or(file_name);

  if category == FileCategory::Source
    && let Some(rest) = base.strip_prefix(TEST_PREFIX)
  {
    return format!("tests for {rest}");
  }

  base.to_string()
}

/// Rewrite the header lines of `content` in memory.
///
/// Returns the full rewritten content, or `None` when the header shape is
/// invalid: fewer than five lines, or the third line not starting with the
/// category marker. Lines other than the third and fifth are carried over
/// byte-for-byte, including their original line terminators.
pub fn rewrite_header(content: &str, marker: &str, project_name: &str, label: &str) -> Option<String> {
  let mut lines: Vec<Cow<'_, str>> = content.split_inclusive('\n').map(Cow::Borrowed).collect();

  if lines.len() < MIN_HEADER_LINES || !lines[PROJECT_LINE].starts_with(marker) {
    return None;
  }

  lines[PROJECT_LINE] = Cow::Owned(format!("{marker}{project_name}\n"));
  lines[LABEL_LINE] = Cow::Owned(format!("{marker}{label}\n"));

  Some(lines.concat())
}
