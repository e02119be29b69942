#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Builds a well-formed C source header followed by a small body.
pub fn source_file_content(project: &str, label: &str) -> String {
  format!(
    "/*\n\
     ** EPITECH PROJECT, 2024\n\
     ** {project}\n\
     ** File description:\n\
     ** {label}\n\
     */\n\
     \n\
     int main(void)\n\
     {{\n    return 0;\n}}\n"
  )
}

/// Builds a well-formed Makefile header followed by a rule.
pub fn makefile_content(project: &str, label: &str) -> String {
  format!(
    "##\n\
     ## EPITECH PROJECT, 2024\n\
     ## {project}\n\
     ## File description:\n\
     ## {label}\n\
     ##\n\
     \n\
     all:\n\techo ok\n"
  )
}

/// Writes a C source file with a valid header into `dir` and returns its path.
pub fn write_source_file(dir: &Path, name: &str, project: &str, label: &str) -> Result<PathBuf> {
  let path = dir.join(name);
  fs::write(&path, source_file_content(project, label))?;
  Ok(path)
}

/// Writes a Makefile with a valid header into `dir` and returns its path.
pub fn write_makefile(dir: &Path, name: &str, project: &str, label: &str) -> Result<PathBuf> {
  let path = dir.join(name);
  fs::write(&path, makefile_content(project, label))?;
  Ok(path)
}

/// Returns the nth line (0-based) of a file, including its terminator.
pub fn line_at(path: &Path, index: usize) -> Result<String> {
  let content = fs::read_to_string(path)?;
  Ok(
    content
      .split_inclusive('\n')
      .nth(index)
      .unwrap_or_default()
      .to_string(),
  )
}
