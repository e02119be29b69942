//! # Output Module
//!
//! This module centralizes all user-facing output for the epiheader tool.
//! It provides consistent formatting, colors, and symbols for terminal
//! output.
//!
//! ## Design Goals
//!
//! - **Informative**: Show actionable information without requiring flags
//! - **Scannable**: Use formatting to make output easy to parse visually
//! - **Progressive**: More detail with `-v`, silence with `-q`
//! - **Scriptable**: Keep stdout predictable for piping/automation

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{FileReport, RunSummary};

/// Symbols used in output
pub mod symbols {
  /// Header rewritten / nothing wrong
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Invalid header or failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Print the initial "Checking N files..." message.
pub fn print_start_message(file_count: usize) {
  if is_quiet() {
    return;
  }

  let files_word = if file_count == 1 { "file" } else { "files" };
  println!("Checking {} {}...", file_count, files_word);
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the list of files whose headers were rewritten.
///
/// Shows up to `DEFAULT_FILE_LIST_LIMIT` files; in verbose mode, shows all.
/// Files are sorted alphabetically by path.
pub fn print_fixed_files(files: &[&FileReport]) {
  if files.is_empty() {
    return;
  }

  let mut sorted_files: Vec<_> = files.to_vec();
  sorted_files.sort_by(|a, b| a.path.cmp(&b.path));

  if is_quiet() {
    // In quiet mode, just print the file paths (for scripting)
    for file in &sorted_files {
      println!("{}", file.path.display());
    }
    return;
  }

  let count = sorted_files.len();
  let header = format!(
    "{} Fixed header in {} {}:",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  println!("{}", header);

  let show_all = is_verbose();
  let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in sorted_files.iter().take(limit) {
    println!("  {}", file.path.display());
  }

  if !show_all && count > limit {
    let remaining = count - limit;
    println!(
      "  {} ... and {} more (use -v to see all)",
      "".if_supports_color(Stream::Stdout, |s| s.dimmed()),
      remaining
    );
  }
}

/// Print the success message when no header needed rewriting.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} No headers needed fixing.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the processing summary.
///
/// Format: "Summary: X fixed, Y invalid, Z skipped"
/// In verbose mode, also shows timing.
pub fn print_summary(summary: &RunSummary) {
  if is_quiet() {
    return;
  }

  let fixed_str = summary.files_fixed.if_supports_color(Stream::Stdout, |s| s.cyan());
  let invalid_str = if summary.files_invalid > 0 {
    summary
      .files_invalid
      .if_supports_color(Stream::Stdout, |s| s.red())
      .to_string()
  } else {
    summary
      .files_invalid
      .if_supports_color(Stream::Stdout, |s| s.cyan())
      .to_string()
  };
  let skipped_str = summary.files_skipped.if_supports_color(Stream::Stdout, |s| s.dimmed());

  let mut summary_line = format!(
    "Summary: {} fixed, {} invalid, {} skipped",
    fixed_str, invalid_str, skipped_str
  );

  if summary.files_failed > 0 {
    summary_line.push_str(&format!(
      ", {} failed",
      summary.files_failed.if_supports_color(Stream::Stdout, |s| s.red())
    ));
  }

  // Show timing in verbose mode
  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}
