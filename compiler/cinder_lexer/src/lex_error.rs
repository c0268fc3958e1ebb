//! Lexical failures reported alongside `LexicalError` tokens.
//!
//! Every variant is recoverable: the scanner has already moved the cursor
//! past the offending span when it hands one of these back. The driving loop
//! decides whether to keep going.

use crate::alphabet::Bracket;

/// A recoverable lexical failure with the line and byte position where the
/// offending span starts.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// `(`, `[` or `{` with no closing partner before end of input.
    #[error("lexical error at line {line}, position {position}: delimiter `{bracket}` is not closed")]
    UnterminatedBracket {
        bracket: Bracket,
        line: u32,
        position: usize,
    },
    /// Missing closing `"`.
    #[error("lexical error at line {line}, position {position}: unterminated string")]
    UnterminatedString { line: u32, position: usize },
    /// `/*` with no matching `*/`.
    #[error("lexical error at line {line}, position {position}: comment is not closed")]
    UnterminatedComment { line: u32, position: usize },
    /// Character that starts no lexeme.
    #[error("lexical error at line {line}, position {position}: character {ch:?} is not part of the language")]
    InvalidCharacter { ch: char, line: u32, position: usize },
}

impl LexError {
    /// Line where the offending span starts.
    pub fn line(&self) -> u32 {
        match *self {
            LexError::UnterminatedBracket { line, .. }
            | LexError::UnterminatedString { line, .. }
            | LexError::UnterminatedComment { line, .. }
            | LexError::InvalidCharacter { line, .. } => line,
        }
    }

    /// Byte offset where the offending span starts.
    pub fn position(&self) -> usize {
        match *self {
            LexError::UnterminatedBracket { position, .. }
            | LexError::UnterminatedString { position, .. }
            | LexError::UnterminatedComment { position, .. }
            | LexError::InvalidCharacter { position, .. } => position,
        }
    }

    /// Short reason without the location prefix.
    pub fn reason(&self) -> String {
        match self {
            LexError::UnterminatedBracket { bracket, .. } => {
                format!("delimiter `{bracket}` is not closed")
            }
            LexError::UnterminatedString { .. } => "unterminated string".to_string(),
            LexError::UnterminatedComment { .. } => "comment is not closed".to_string(),
            LexError::InvalidCharacter { ch, .. } => {
                format!("character {ch:?} is not part of the language")
            }
        }
    }
}
