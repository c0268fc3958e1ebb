//! Options for the `lex` command.

use std::path::PathBuf;

use crate::CliError;

/// How the driving loop runs and what the reporter prints.
#[derive(Clone, Debug, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Config struct: each bool controls an independent flag"
)]
pub struct LexOptions {
    /// Print only lexical errors and their tokens.
    pub errors_only: bool,
    /// Stop a file's scan at its first lexical error.
    pub stop_on_error: bool,
    /// Append per-kind token counts after each file.
    pub summary: bool,
    /// Lex several files on a thread pool.
    pub parallel: bool,
    /// Worker count for the pool; `None` lets rayon decide.
    pub jobs: Option<usize>,
    /// Turn on debug logging when `RUST_LOG` is unset.
    pub verbose: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            errors_only: false,
            stop_on_error: false,
            summary: false,
            parallel: true,
            jobs: None,
            verbose: false,
        }
    }
}

/// Parse the arguments that follow `lex`.
///
/// Flags may appear before or after file paths. At least one path is
/// required.
pub fn parse_lex_args(args: &[String]) -> Result<(Vec<PathBuf>, LexOptions), CliError> {
    let mut options = LexOptions::default();
    let mut paths = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--errors-only" => options.errors_only = true,
            "--stop-on-error" => options.stop_on_error = true,
            "--summary" => options.summary = true,
            "--no-parallel" => options.parallel = false,
            "-v" | "--verbose" => options.verbose = true,
            _ => {
                if let Some(n) = arg.strip_prefix("--jobs=") {
                    let jobs = n
                        .parse::<usize>()
                        .ok()
                        .filter(|&j| j > 0)
                        .ok_or_else(|| {
                            CliError::Usage(format!("invalid job count '{n}': expected a positive integer"))
                        })?;
                    options.jobs = Some(jobs);
                } else if arg.starts_with('-') {
                    return Err(CliError::Usage(format!("unknown option '{arg}'")));
                } else {
                    paths.push(PathBuf::from(arg));
                }
            }
        }
    }

    if paths.is_empty() {
        return Err(CliError::Usage("missing file path".to_string()));
    }
    Ok((paths, options))
}
