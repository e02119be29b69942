//! # Report Module
//!
//! This module captures what happened to each processed file and aggregates
//! the per-file results into the run summary printed at the end.

use std::path::PathBuf;
use std::time::Duration;

/// Action taken on a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
  /// Header lines were rewritten
  Fixed,
  /// Header shape was invalid; file left untouched
  Invalid,
  /// Unrecognized file type; not processed
  Skipped,
  /// Read or write failed; file may be untouched
  Failed,
}

/// Result of processing one file
#[derive(Debug, Clone)]
pub struct FileReport {
  /// Path to the file
  pub path: PathBuf,
  /// What happened to it
  pub action: FileAction,
}

/// Aggregated counts for a whole run
#[derive(Debug, Clone)]
pub struct RunSummary {
  /// Files whose headers were rewritten
  pub files_fixed: usize,
  /// Files with an invalid header shape
  pub files_invalid: usize,
  /// Files skipped by classification
  pub files_skipped: usize,
  /// Files that failed with an I/O error
  pub files_failed: usize,
  /// Wall-clock time spent processing
  pub processing_time: Duration,
}

impl RunSummary {
  /// Build a summary from per-file reports.
  pub fn from_reports(reports: &[FileReport], processing_time: Duration) -> Self {
    let count = |action| reports.iter().filter(|r| r.action == action).count();

    Self {
      files_fixed: count(FileAction::Fixed),
      files_invalid: count(FileAction::Invalid),
      files_skipped: count(FileAction::Skipped),
      files_failed: count(FileAction::Failed),
      processing_time,
    }
  }
}

/// Reports grouped by action, borrowed for end-of-run output
#[derive(Debug, Default)]
pub struct CategorizedReports<'a> {
  /// Files whose headers were rewritten
  pub fixed: Vec<&'a FileReport>,
  /// Files with an invalid header shape
  pub invalid: Vec<&'a FileReport>,
}

impl<'a> CategorizedReports<'a> {
  /// Group reports for output; skipped files are only counted, never listed.
  pub fn from_reports(reports: &'a [FileReport]) -> Self {
    let mut categorized = Self::default();
    for report in reports {
      match report.action {
        FileAction::Fixed => categorized.fixed.push(report),
        FileAction::Invalid => categorized.invalid.push(report),
        FileAction::Skipped | FileAction::Failed => {}
      }
    }
    categorized
  }
}
