//! Resumable single-pass scanner for Cinder source text.
//!
//! The scanner is a pure function: [`scan`] takes the source and an explicit
//! [`Cursor`], classifies one lexeme, and hands back the token together with
//! the advanced cursor. There is no hidden scanning state, so any number of
//! scans over independent inputs may run concurrently.
//!
//! ```text
//! &str + Cursor
//!     │
//!     ▼
//! scan() ──► Scanned { token, next, error }
//!     │
//!     ▼
//! Tokens (driving loop) ──► LexOutput
//! ```
//!
//! Lexical errors never stop the scan. Each failure is reported as a
//! [`TokenKind::LexicalError`] token paired with a [`LexError`] value, and the
//! returned cursor always lies past the offending span.

mod alphabet;
mod cursor;
mod driver;
mod keywords;
mod lex_error;
mod reader;
mod scanner;
mod token;

pub use alphabet::{is_delimiter_char, is_operator_char, Bracket, OPERATOR_ALPHABET};
pub use cursor::Cursor;
pub use driver::{lex, LexOutput, Tokens};
pub use keywords::{is_keyword, KEYWORDS};
pub use lex_error::LexError;
pub use scanner::{scan, Scanned};
pub use token::{Token, TokenKind};
