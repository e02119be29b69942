//! # Fix Command
//!
//! This module implements the header fix command: resolve the project name,
//! select the candidate files, rewrite each header in sequence, and print
//! the run summary.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::header::HeaderFixer;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{print_all_files_ok, print_blank_line, print_fixed_files, print_start_message, print_summary};
use crate::prompt::{PromptOutcome, prompt_project_name};
use crate::report::{CategorizedReports, RunSummary};
use crate::selector::select_files;

/// Arguments for the fix command
#[derive(Args, Debug, Default)]
pub struct FixArgs {
  /// Files or directories to process. Directories are processed
  /// recursively; without paths the current directory is used.
  #[arg(required = false)]
  pub paths: Vec<PathBuf>,

  /// Project name to write into each header; prompted for interactively
  /// when absent
  #[arg(long, short = 'n', value_name = "NAME")]
  pub name: Option<String>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl FixArgs {
  /// Validate the arguments and return an error if invalid
  fn validate(&self) -> Result<(), String> {
    if let Some(name) = &self.name
      && name.is_empty()
    {
      return Err("Project name must not be empty".to_string());
    }
    Ok(())
  }
}

/// Run the fix command with the given arguments
pub fn run_fix(args: FixArgs) -> Result<()> {
  // Validate arguments
  if let Err(e) = args.validate() {
    eprintln!("ERROR: {e}");
    process::exit(1);
  }

  // Initialize tracing subscriber for structured diagnostics
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and the info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  // Resolve the project name before any file is touched; an aborted prompt
  // ends the whole run
  let project_name = match args.name {
    Some(name) => name,
    None => match prompt_project_name()? {
      PromptOutcome::Name(name) => name,
      PromptOutcome::Aborted => {
        eprintln!("Exit");
        process::exit(1);
      }
    },
  };
  debug!("Using project name: {}", project_name);

  // A bad path argument fails the run before any file I/O
  let files = match select_files(&args.paths) {
    Ok(files) => files,
    Err(e) => {
      eprintln!("ERROR: {e}");
      process::exit(1);
    }
  };

  print_start_message(files.len());

  let start_time = Instant::now();

  let fixer = HeaderFixer::new(project_name);
  let reports = fixer.fix_all(&files);

  let elapsed = start_time.elapsed();

  let summary = RunSummary::from_reports(&reports, elapsed);
  let categorized = CategorizedReports::from_reports(&reports);

  print_blank_line();

  if categorized.fixed.is_empty() && categorized.invalid.is_empty() && summary.files_failed == 0 {
    print_all_files_ok();
  } else {
    // Invalid headers and I/O failures were already reported per file
    print_fixed_files(&categorized.fixed);
  }

  print_blank_line();
  print_summary(&summary);

  Ok(())
}
