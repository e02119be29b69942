//! File classification.
//!
//! A candidate file is classified from its name alone: `.h`/`.c` files are
//! C sources commented with `** `, `.mk`/`.make` files and a literal
//! `Makefile` are build files commented with `## `, and everything else is
//! out of scope.

use std::path::Path;

/// Comment marker for C source headers.
pub const SOURCE_MARKER: &str = "** ";

/// Comment marker for Makefile headers.
pub const MAKE_MARKER: &str = "## ";

/// Category of a candidate file, determining marker and label rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
  /// C source or header file (`.h`, `.c`)
  Source,
  /// Makefile or make fragment (`.mk`, `.make`, literal `Makefile`)
  Make,
  /// Any other file; left untouched
  Skipped,
}

impl FileCategory {
  /// Classify a path by its file name and extension.
  pub fn of(path: &Path) -> Self {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    if file_name == "Makefile" {
      return FileCategory::Make;
    }

    match path.extension().and_then(|e| e.to_str()) {
      Some("h" | "c") => FileCategory::Source,
      Some("mk" | "make") => FileCategory::Make,
      _ => FileCategory::Skipped,
    }
  }

  /// The comment marker for this category, or `None` for skipped files.
  pub const fn marker(self) -> Option<&'static str> {
    match self {
      FileCategory::Source => Some(SOURCE_MARKER),
      FileCategory::Make => Some(MAKE_MARKER),
      FileCategory::Skipped => None,
    }
  }
}
