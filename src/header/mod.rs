//! # Header Fixer Module
//!
//! Per-file orchestration of the header rewrite: classify the file, derive
//! its label, validate the header shape, and rewrite the two header lines
//! in place. Files are handled strictly one at a time; a failure on one
//! file never affects another.

mod category;
mod rewrite;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
pub use category::{FileCategory, MAKE_MARKER, SOURCE_MARKER};
pub use rewrite::{MIN_HEADER_LINES, derive_label, rewrite_header};
use tracing::debug;

use crate::report::{FileAction, FileReport};
use crate::{info_log, verbose_log};

/// Outcome of a single file's rewrite attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
  /// Header lines were rewritten and the file written back.
  Fixed,
  /// Recognized file whose header shape failed validation; left untouched.
  Invalid,
  /// Unrecognized file type; not an error.
  Skipped,
}

/// Rewrites headers file by file, sharing only the read-only project name.
pub struct HeaderFixer {
  project_name: String,
}

impl HeaderFixer {
  /// Create a fixer for the given project name.
  pub const fn new(project_name: String) -> Self {
    Self { project_name }
  }

  /// Process every file in order, turning per-file failures into reports.
  ///
  /// An I/O failure on one file is surfaced to the user and processing
  /// continues with the remaining files.
  pub fn fix_all(&self, files: &[PathBuf]) -> Vec<FileReport> {
    files
      .iter()
      .map(|path| {
        let action = match self.fix_file(path) {
          Ok(FixOutcome::Fixed) => FileAction::Fixed,
          Ok(FixOutcome::Invalid) => FileAction::Invalid,
          Ok(FixOutcome::Skipped) => FileAction::Skipped,
          Err(e) => {
            eprintln!("Error processing {}: {:#}", path.display(), e);
            FileAction::Failed
          }
        };
        FileReport {
          path: path.clone(),
          action,
        }
      })
      .collect()
  }

  /// Classify, validate, and conditionally rewrite a single file.
  pub fn fix_file(&self, path: &Path) -> Result<FixOutcome> {
    verbose_log!("Processing file: {}", path.display());

    let category = FileCategory::of(path);
    let Some(marker) = category.marker() else {
      verbose_log!("Skipping: {} (unrecognized file type)", path.display());
      return Ok(FixOutcome::Skipped);
    };

    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let label = derive_label(file_name, category);

    let content = fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let Some(updated) = rewrite_header(&content, marker, &self.project_name, &label) else {
      info_log!("File {} has an invalid header", path.display());
      return Ok(FixOutcome::Invalid);
    };

    fs::write(path, &updated).with_context(|| format!("Failed to write file: {}", path.display()))?;
    debug!("Rewrote header in {}", path.display());

    Ok(FixOutcome::Fixed)
  }
}
