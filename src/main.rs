//! # epiheader
//!
//! A tool that rewrites fixed-format file headers in place.

use anyhow::Result;

use epiheader::cli::{Cli, run_fix};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  run_fix(cli.fix_args)
}
