//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing; parsing is a pure function over the
//! process argument list, so argument errors map to a uniform exit status.

mod fix;

use std::process;

use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::error::ErrorKind;
use clap::Parser;
pub use fix::{FixArgs, run_fix};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Fix headers in the current directory tree, prompting for the project name
  epiheader

  # Fix headers under include/ and src/ for a named project
  epiheader --name my_project include/ src/

  # Fix a single file regardless of its extension
  epiheader --name my_project Makefile

  # Show each skipped file while fixing
  epiheader --name my_project -v src/
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub fix_args: FixArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct.
  ///
  /// Help and version requests exit with status 0. Every other parse
  /// failure (unknown flag, `--name` without its value, ...) prints the
  /// rendered error with usage and exits with status 1 rather than clap's
  /// default of 2.
  pub fn parse_args() -> Self {
    match Self::try_parse() {
      Ok(cli) => cli,
      Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
        let _ = e.print();
        process::exit(0);
      }
      Err(e) => {
        let _ = e.print();
        process::exit(1);
      }
    }
  }
}
