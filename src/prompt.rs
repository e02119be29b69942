//! # Prompt Module
//!
//! Interactive project-name prompt used when `--name` is not supplied.
//! The read loop repeats until a non-empty name is entered; end of input is
//! a distinct aborted outcome rather than an error, so the caller can map
//! it to a clean non-zero exit before any file is touched.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Outcome of the interactive project-name prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
  /// A non-empty project name was entered.
  Name(String),
  /// Input ended before a name was entered.
  Aborted,
}

/// Prompt for the project name on stdin, repeating until non-empty.
pub fn prompt_project_name() -> Result<PromptOutcome> {
  let stdin = io::stdin();
  let mut input = stdin.lock();
  read_project_name(&mut input, &mut io::stdout())
}

/// Prompt loop over arbitrary reader/writer pairs, for testability.
pub fn read_project_name<R: BufRead, W: Write>(input: &mut R, prompt_out: &mut W) -> Result<PromptOutcome> {
  loop {
    write!(prompt_out, "Project name: ").context("Failed to write prompt")?;
    prompt_out.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read project name")?;
    if read == 0 {
      return Ok(PromptOutcome::Aborted);
    }

    let name = line.trim_end_matches(['\r', '\n']);
    if !name.is_empty() {
      return Ok(PromptOutcome::Name(name.to_string()));
    }
  }
}
