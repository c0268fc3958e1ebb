//! Driving loop: repeated [`scan`] calls threading the cursor.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::lex_error::LexError;
use crate::scanner::{scan, Scanned};
use crate::token::Token;

/// Iterator over the scan results of one source text.
///
/// Yields every result except the final end-of-input marker, which is kept
/// in [`end`](Self::end) once the iterator is exhausted.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    input: &'a str,
    cursor: Cursor,
    end: Option<Token<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::starting_at(input, Cursor::START)
    }

    /// Resume scanning from an arbitrary cursor.
    pub fn starting_at(input: &'a str, cursor: Cursor) -> Self {
        Tokens {
            input,
            cursor,
            end: None,
        }
    }

    /// Cursor for the next call.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// End-of-input token, once reached.
    pub fn end(&self) -> Option<Token<'a>> {
        self.end
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Scanned<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.end.is_some() {
            return None;
        }
        let scanned = scan(self.input, self.cursor);
        debug_assert!(
            scanned.token.is_end() || scanned.next.position > self.cursor.position,
            "scan made no progress at {:?}",
            self.cursor
        );
        self.cursor = scanned.next;
        if scanned.token.is_end() {
            self.end = Some(scanned.token);
            return None;
        }
        trace!(
            kind = %scanned.token.kind,
            line = scanned.token.line,
            position = scanned.token.position,
            length = scanned.token.length,
            "scan"
        );
        Some(scanned)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// All tokens and errors of one source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput<'a> {
    /// Every token except end-of-input, including `LexicalError` tokens.
    pub tokens: Vec<Token<'a>>,
    /// Failures in source order, one per `LexicalError` token.
    pub errors: Vec<LexError>,
    /// Cursor after the last token.
    pub end: Cursor,
}

impl LexOutput<'_> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `input` to the end, collecting tokens and errors.
pub fn lex(input: &str) -> LexOutput<'_> {
    let mut tokens = Tokens::new(input);
    let mut output = LexOutput::default();
    for scanned in tokens.by_ref() {
        output.tokens.push(scanned.token);
        if let Some(err) = scanned.error {
            debug!(%err, "lexical error");
            output.errors.push(err);
        }
    }
    output.end = tokens.cursor();
    output
}

#[cfg(test)]
mod tests;
