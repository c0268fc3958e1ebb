//! `cinder lex`: scan files and print their tokens.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, debug_span, warn};

use super::read_file;
use crate::report::{report_source, FileReport};
use crate::{CliError, LexOptions};

/// Scan every file, one independent driving loop per file.
///
/// Results come back in the order of `paths` whether or not the work ran
/// on the thread pool.
pub fn lex_files(paths: &[PathBuf], options: &LexOptions) -> Vec<Result<FileReport, CliError>> {
    if !options.parallel || paths.len() < 2 {
        return paths.iter().map(|p| lex_one(p, options)).collect();
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs.unwrap_or(0))
        .build()
        .map(|pool| {
            pool.install(|| {
                paths
                    .par_iter()
                    .map(|p| lex_one(p, options))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            warn!("failed to create thread pool ({e}), running sequentially");
            paths.iter().map(|p| lex_one(p, options)).collect()
        })
}

fn lex_one(path: &Path, options: &LexOptions) -> Result<FileReport, CliError> {
    let _span = debug_span!("lex_file", path = %path.display()).entered();
    let source = read_file(path)?;
    debug!(bytes = source.len(), "read source");
    let report = report_source(path, &source, options);
    debug!(tokens = report.tokens, errors = report.errors, "scanned");
    Ok(report)
}

/// Run the `lex` command and print every report.
///
/// Returns `true` when all files were read and scanned without lexical
/// errors.
pub fn run_lex(paths: &[PathBuf], options: &LexOptions) -> bool {
    let results = lex_files(paths, options);
    let with_headers = paths.len() > 1;
    let mut ok = true;

    for result in results {
        match result {
            Ok(report) => {
                if with_headers {
                    println!("==> {} <==", report.path.display());
                }
                print!("{}", report.output);
                ok &= !report.has_errors();
            }
            Err(e) => {
                eprintln!("error: {e}");
                ok = false;
            }
        }
    }
    ok
}
