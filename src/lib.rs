//! # epiheader
//!
//! A tool that rewrites the fixed-format comment header at the top of C
//! sources and Makefiles so that the third line carries the project name and
//! the fifth line carries the file's own name.
//!
//! `epiheader` modifies files in place and never touches a file whose header
//! does not have the expected shape. It follows the Unix philosophy of tooling
//! where possible and is designed with modern Rust best practices for CLI
//! tools.
//!
//! ## Features
//!
//! * Recursively scan directories and fix headers in every recognized file
//! * Classification by extension: `.h`/`.c` sources, `.mk`/`.make`/`Makefile`
//!   build files; everything else is left alone
//! * Test-file naming convention: a `test_parser.c` header is labeled
//!   `tests for parser`
//! * Per-file validation: files with fewer than five lines or an unexpected
//!   comment marker are reported and skipped, never modified
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use epiheader::header::HeaderFixer;
//! use epiheader::selector::select_files;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Collect every file under src/, recursively
//!     let files = select_files(&[PathBuf::from("src")])?;
//!
//!     // Rewrite each header for the "libmy" project
//!     let fixer = HeaderFixer::new("libmy".to_string());
//!     let reports = fixer.fix_all(&files);
//!
//!     for report in &reports {
//!         println!("{}: {:?}", report.path.display(), report.action);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod header;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod report;
pub mod selector;
