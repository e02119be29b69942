//! Library-level tests for the header fixer: classification, validation,
//! and the substitution contract on real files.

mod common;

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use epiheader::header::{FixOutcome, HeaderFixer};
use epiheader::report::FileAction;
use tempfile::tempdir;

use crate::common::{line_at, write_makefile, write_source_file};

#[test]
fn test_source_header_gets_project_name_and_label() -> Result<()> {
  let dir = tempdir()?;
  let path = write_source_file(dir.path(), "parser.c", "old_project", "old_label")?;

  let fixer = HeaderFixer::new("Epitech".to_string());
  assert_eq!(fixer.fix_file(&path)?, FixOutcome::Fixed);

  assert_eq!(line_at(&path, 2)?, "** Epitech\n");
  assert_eq!(line_at(&path, 4)?, "** parser\n");
  Ok(())
}

#[test]
fn test_test_file_label_is_spelled_out() -> Result<()> {
  let dir = tempdir()?;
  let path = write_source_file(dir.path(), "test_parser.c", "x", "x")?;

  let fixer = HeaderFixer::new("Epitech".to_string());
  assert_eq!(fixer.fix_file(&path)?, FixOutcome::Fixed);

  assert_eq!(line_at(&path, 2)?, "** Epitech\n");
  assert_eq!(line_at(&path, 4)?, "** tests for parser\n");
  Ok(())
}

#[test]
fn test_makefile_header_uses_make_marker() -> Result<()> {
  let dir = tempdir()?;
  let path = write_makefile(dir.path(), "Makefile", "old", "old")?;

  let fixer = HeaderFixer::new("Foo".to_string());
  assert_eq!(fixer.fix_file(&path)?, FixOutcome::Fixed);

  assert_eq!(line_at(&path, 2)?, "## Foo\n");
  assert_eq!(line_at(&path, 4)?, "## Makefile\n");
  Ok(())
}

#[test]
fn test_make_label_keeps_test_prefix() -> Result<()> {
  let dir = tempdir()?;
  let path = write_makefile(dir.path(), "test_rules.mk", "old", "old")?;

  let fixer = HeaderFixer::new("Foo".to_string());
  assert_eq!(fixer.fix_file(&path)?, FixOutcome::Fixed);

  assert_eq!(line_at(&path, 4)?, "## test_rules\n");
  Ok(())
}

#[test]
fn test_label_stops_at_first_dot() -> Result<()> {
  let dir = tempdir()?;
  let path = write_source_file(dir.path(), "parser.tab.c", "old", "old")?;

  let fixer = HeaderFixer::new("Epitech".to_string());
  assert_eq!(fixer.fix_file(&path)?, FixOutcome::Fixed);

  assert_eq!(line_at(&path, 4)?, "** parser\n");
  Ok(())
}

#[test]
fn test_body_is_byte_identical_after_fix() -> Result<()> {
  let dir = tempdir()?;
  let path = write_source_file(dir.path(), "main.c", "old", "old")?;
  let before = fs::read_to_string(&path)?;

  let fixer = HeaderFixer::new("Epitech".to_string());
  fixer.fix_file(&path)?;

  let after = fs::read_to_string(&path)?;
  // Everything past the header is untouched
  let body_before: String = before.split_inclusive('\n').skip(5).collect();
  let body_after: String = after.split_inclusive('\n').skip(5).collect();
  assert_eq!(body_before, body_after);
  Ok(())
}

#[test]
fn test_fixing_twice_reaches_a_fixed_point() -> Result<()> {
  let dir = tempdir()?;
  let path = write_source_file(dir.path(), "robot.c", "old", "old")?;

  let fixer = HeaderFixer::new("Epitech".to_string());
  fixer.fix_file(&path)?;
  let once = fs::read_to_string(&path)?;

  fixer.fix_file(&path)?;
  let twice = fs::read_to_string(&path)?;

  assert_eq!(once, twice);
  Ok(())
}

#[test]
fn test_short_file_is_invalid_and_unmodified() -> Result<()> {
  let dir = tempdir()?;
  let path = dir.path().join("short.c");
  fs::write(&path, "/*\n** x\n*/\n")?;
  let before = fs::read(&path)?;

  let fixer = HeaderFixer::new("Epitech".to_string());
  assert_eq!(fixer.fix_file(&path)?, FixOutcome::Invalid);

  assert_eq!(fs::read(&path)?, before);
  Ok(())
}

#[test]
fn test_wrong_marker_is_invalid_and_unmodified() -> Result<()> {
  let dir = tempdir()?;
  let path = dir.path().join("wrong.c");
  fs::write(&path, "/*\n * foo\n * bar\n * baz\n * qux\n */\n")?;
  let before = fs::read(&path)?;

  let fixer = HeaderFixer::new("Epitech".to_string());
  assert_eq!(fixer.fix_file(&path)?, FixOutcome::Invalid);

  assert_eq!(fs::read(&path)?, before);
  Ok(())
}

#[test]
fn test_unrecognized_extension_is_skipped_and_unmodified() -> Result<()> {
  let dir = tempdir()?;
  let path = dir.path().join("readme.md");
  fs::write(&path, "# hello\n")?;

  let fixer = HeaderFixer::new("Epitech".to_string());
  assert_eq!(fixer.fix_file(&path)?, FixOutcome::Skipped);

  assert_eq!(fs::read_to_string(&path)?, "# hello\n");
  Ok(())
}

#[test]
fn test_fix_all_continues_past_an_unreadable_file() -> Result<()> {
  let dir = tempdir()?;
  let good = write_source_file(dir.path(), "good.c", "old", "old")?;
  let gone = dir.path().join("gone.c");

  let fixer = HeaderFixer::new("Epitech".to_string());
  let reports = fixer.fix_all(&[gone.clone(), good.clone()]);

  assert_eq!(reports.len(), 2);
  assert_eq!(reports[0].action, FileAction::Failed);
  assert_eq!(reports[1].action, FileAction::Fixed);
  assert_eq!(line_at(&good, 2)?, "** Epitech\n");
  Ok(())
}

#[test]
fn test_fix_all_reports_in_input_order() -> Result<()> {
  let dir = tempdir()?;
  let a = write_source_file(dir.path(), "a.c", "old", "old")?;
  let md = dir.path().join("notes.md");
  fs::write(&md, "notes\n")?;

  let fixer = HeaderFixer::new("Epitech".to_string());
  let reports = fixer.fix_all(&[md.clone(), a.clone()]);

  let paths: Vec<PathBuf> = reports.iter().map(|r| r.path.clone()).collect();
  assert_eq!(paths, vec![md, a]);
  assert_eq!(reports[0].action, FileAction::Skipped);
  assert_eq!(reports[1].action, FileAction::Fixed);
  Ok(())
}
