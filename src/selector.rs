//! # File Selector Module
//!
//! This module turns the positional path arguments into the flat, ordered
//! list of candidate files to process. Explicit file arguments are kept
//! as-is regardless of extension; directory arguments are walked
//! recursively and every regular file below them is collected, leaving the
//! relevance decision to header classification. A path argument that names
//! neither fails the whole run before any file is touched.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Error type for file selection.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
  /// A path argument named neither an existing file nor a directory.
  #[error("File {path} does not exist")]
  NotFound { path: String },
}

/// Select the files to process from the given path arguments.
///
/// With no arguments the current working directory is walked instead.
/// Directory walks visit siblings in sorted order so the resulting sequence
/// is reproducible across platforms.
pub fn select_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, SelectError> {
  let mut files = Vec::new();

  if paths.is_empty() {
    collect_directory(Path::new("."), &mut files);
    return Ok(files);
  }

  for path in paths {
    if path.is_file() {
      files.push(path.clone());
    } else if path.is_dir() {
      collect_directory(path, &mut files);
    } else {
      return Err(SelectError::NotFound {
        path: path.display().to_string(),
      });
    }
  }

  Ok(files)
}

/// Walk a directory recursively and append every regular file to `files`.
///
/// Unreadable entries are reported and skipped; the walk continues.
fn collect_directory(dir: &Path, files: &mut Vec<PathBuf>) {
  debug!("Scanning directory: {}", dir.display());
  let before = files.len();

  for entry in WalkDir::new(dir).sort_by_file_name() {
    match entry {
      Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
      Ok(_) => {}
      Err(e) => eprintln!("Error reading directory entry: {}", e),
    }
  }

  debug!("Found {} files under {}", files.len() - before, dir.display());
}
