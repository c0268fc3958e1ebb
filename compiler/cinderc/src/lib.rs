//! Cinder command-line driver.
//!
//! Everything around the scanner that touches the outside world lives here:
//! reading files, parsing arguments, formatting reports, and logging setup.
//!
//! ```text
//! argv ──► options::parse_lex_args ──► (paths, LexOptions)
//!                                           │
//!                                           ▼
//!                              commands::lex_files (rayon)
//!                                           │
//!                                           ▼
//!                              report::report_source per file
//! ```

pub mod commands;
pub mod error;
pub mod options;
pub mod report;
pub mod tracing_setup;

pub use error::CliError;
pub use options::LexOptions;
