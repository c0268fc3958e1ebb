//! Console report for one scanned file.
//!
//! The reporter drives the scan loop itself so that `--stop-on-error` can
//! cut it short; everything is rendered into a `String` and printed by the
//! caller, which keeps output of parallel runs in argument order.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use cinder_lexer::{LexError, Token, TokenKind, Tokens};

use crate::LexOptions;

/// `Token: '<value>', Kind: <kind>, Length: <n>, Line: <n>, Position: <n>`
pub fn format_token(token: &Token<'_>) -> String {
    format!(
        "Token: '{}', Kind: {}, Length: {}, Line: {}, Position: {}",
        token.value, token.kind, token.length, token.line, token.position
    )
}

/// `! lexical error at line <l>, position <p>: <reason>`
pub fn format_error(err: &LexError) -> String {
    format!("! {err}")
}

/// Rendered output and counters for one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub output: String,
    /// Tokens scanned, end-of-input excluded.
    pub tokens: usize,
    pub errors: usize,
    /// Set when `--stop-on-error` ended the scan early.
    pub stopped_early: bool,
    pub kinds: BTreeMap<TokenKind, usize>,
}

impl FileReport {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// Scan `source` and render its report.
pub fn report_source(path: &Path, source: &str, options: &LexOptions) -> FileReport {
    let mut report = FileReport {
        path: path.to_path_buf(),
        ..FileReport::default()
    };

    for scanned in Tokens::new(source) {
        report.tokens += 1;
        *report.kinds.entry(scanned.token.kind).or_insert(0) += 1;

        if let Some(err) = &scanned.error {
            report.errors += 1;
            push_line(&mut report.output, &format_error(err));
        }
        if !options.errors_only || scanned.token.is_error() {
            push_line(&mut report.output, &format_token(&scanned.token));
        }
        if options.stop_on_error && scanned.error.is_some() {
            tracing::debug!(path = %path.display(), "stopping at first lexical error");
            report.stopped_early = true;
            break;
        }
    }

    if options.summary {
        render_summary(&mut report);
    }
    report
}

fn render_summary(report: &mut FileReport) {
    let mut text = format!(
        "{} tokens, {} lexical errors",
        report.tokens, report.errors
    );
    if report.stopped_early {
        text.push_str(" (stopped at first error)");
    }
    push_line(&mut report.output, &text);
    for (kind, count) in &report.kinds {
        let _ = writeln!(report.output, "  {kind}: {count}");
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
