//! Command handlers for the Cinder CLI.
//!
//! Shared utilities like `read_file` live here in the module root.

use std::path::Path;

use crate::CliError;

mod lex;

pub use lex::{lex_files, run_lex};

/// Read a source file, mapping I/O failures to readable messages.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::from_io(path, e))
}
