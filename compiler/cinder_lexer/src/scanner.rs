//! The scanning function.
//!
//! [`scan`] skips leading white space and classifies the next lexeme by its
//! first significant character, in priority order:
//!
//! 1. letter: identifier or keyword
//! 2. `_` followed by a letter: identifier
//! 3. digit: integer or float literal
//! 4. `.` followed by a digit: float literal
//! 5. delimiter (`( ) [ ] { } , ;`, or `.` between two letters)
//! 6. `"`: string literal
//! 7. operator alphabet: comment or operator
//! 8. anything else: one-character lexical error
//!
//! Known compatibility behaviours kept on purpose:
//! - only CR-LF advances the line counter, a bare LF does not
//! - a lone `_`, or `_` before a non-letter, is not an identifier start
//! - digit runs may contain any number of dots
//! - any two operator-alphabet characters form one operator
//! - the closing-bracket look-ahead does not count nesting, so in `(a(b)`
//!   the first `)` satisfies both openers

use crate::alphabet::{is_delimiter_char, is_operator_char, Bracket};
use crate::cursor::Cursor;
use crate::keywords::is_keyword;
use crate::lex_error::LexError;
use crate::reader::Reader;
use crate::token::{Token, TokenKind};

/// Result of one [`scan`] call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scanned<'a> {
    pub token: Token<'a>,
    /// Cursor to pass into the next call.
    pub next: Cursor,
    /// Set exactly when `token.kind` is [`TokenKind::LexicalError`].
    pub error: Option<LexError>,
}

impl<'a> Scanned<'a> {
    fn ok(token: Token<'a>, next: Cursor) -> Self {
        Scanned {
            token,
            next,
            error: None,
        }
    }

    fn failed(token: Token<'a>, next: Cursor, error: LexError) -> Self {
        Scanned {
            token,
            next,
            error: Some(error),
        }
    }
}

/// Scan one token from `input` starting at `at`.
///
/// Returns [`TokenKind::EndOfInput`] once only white space remains. Every
/// other result lies strictly past `at`, so repeated calls always make
/// progress. The function is pure: equal arguments give equal results.
pub fn scan(input: &str, at: Cursor) -> Scanned<'_> {
    let mut reader = Reader::new(input, at);
    reader.skip_whitespace();

    let start = reader.pos();
    let Some(first) = reader.current() else {
        return Scanned::ok(Token::end(reader.line(), start), reader.cursor());
    };

    match first {
        c if c.is_alphabetic() => word(reader, start),
        '_' if reader.peek().is_some_and(char::is_alphabetic) => underscore_identifier(reader, start),
        c if c.is_ascii_digit() => number(reader, start),
        '.' if reader.peek().is_some_and(|c| c.is_ascii_digit()) => fraction(reader, start),
        c if is_delimiter_char(c) || is_member_dot(&reader, c) => delimiter(reader, start, c),
        '"' => string(reader, start),
        c if is_operator_char(c) => operator_or_comment(reader, start, c),
        c => invalid(reader, start, c),
    }
}

// ─── Identifiers & Keywords ─────────────────────────────────────

fn word(mut reader: Reader<'_>, start: usize) -> Scanned<'_> {
    reader.eat_while(char::is_alphanumeric);
    let text = reader.slice_from(start);
    let kind = if is_keyword(text) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };
    Scanned::ok(Token::new(kind, text, reader.line(), start), reader.cursor())
}

fn underscore_identifier(mut reader: Reader<'_>, start: usize) -> Scanned<'_> {
    reader.eat_while(|c| c.is_alphanumeric() || c == '_');
    let text = reader.slice_from(start);
    Scanned::ok(
        Token::new(TokenKind::Identifier, text, reader.line(), start),
        reader.cursor(),
    )
}

// ─── Numbers ────────────────────────────────────────────────────

fn number(mut reader: Reader<'_>, start: usize) -> Scanned<'_> {
    reader.eat_while(|c| c.is_ascii_digit() || c == '.');
    let text = reader.slice_from(start);
    let kind = if text.contains('.') {
        TokenKind::FloatLiteral
    } else {
        TokenKind::IntegerLiteral
    };
    Scanned::ok(Token::new(kind, text, reader.line(), start), reader.cursor())
}

/// Leading-dot float such as `.5`.
fn fraction(mut reader: Reader<'_>, start: usize) -> Scanned<'_> {
    reader.advance(); // '.'
    reader.eat_while(|c| c.is_ascii_digit());
    let text = reader.slice_from(start);
    Scanned::ok(
        Token::new(TokenKind::FloatLiteral, text, reader.line(), start),
        reader.cursor(),
    )
}

// ─── Delimiters ─────────────────────────────────────────────────

/// `.` with a letter on both sides, as in `pkg.Name`.
fn is_member_dot(reader: &Reader<'_>, c: char) -> bool {
    c == '.'
        && reader.previous().is_some_and(char::is_alphabetic)
        && reader.peek().is_some_and(char::is_alphabetic)
}

fn delimiter(mut reader: Reader<'_>, start: usize, c: char) -> Scanned<'_> {
    let line = reader.line();
    if let Some(bracket) = Bracket::from_open(c) {
        if reader.find_byte(start + 1, bracket.close_byte()).is_none() {
            reader.consume_to(reader.len());
            let span = reader.slice_from(start);
            return Scanned::failed(
                Token::new(TokenKind::LexicalError, span, line, start),
                reader.cursor(),
                LexError::UnterminatedBracket {
                    bracket,
                    line,
                    position: start,
                },
            );
        }
    }
    reader.advance();
    Scanned::ok(
        Token::new(TokenKind::Delimiter, reader.slice_from(start), line, start),
        reader.cursor(),
    )
}

// ─── Strings ────────────────────────────────────────────────────

fn string(mut reader: Reader<'_>, start: usize) -> Scanned<'_> {
    let line = reader.line();
    let body = start + 1;
    let Some(close) = reader.find_byte(body, b'"') else {
        reader.consume_to(reader.len());
        return Scanned::failed(
            Token::new(TokenKind::LexicalError, reader.slice_from(start), line, start),
            reader.cursor(),
            LexError::UnterminatedString {
                line,
                position: start,
            },
        );
    };
    reader.consume_to(close + 1);
    Scanned::ok(
        Token::new(
            TokenKind::StringLiteral,
            reader.slice(body, close),
            line,
            start,
        ),
        reader.cursor(),
    )
}

// ─── Comments & Operators ───────────────────────────────────────

fn operator_or_comment(mut reader: Reader<'_>, start: usize, c: char) -> Scanned<'_> {
    if c == '/' {
        match reader.peek() {
            Some('/') => return line_comment(reader, start),
            Some('*') => return block_comment(reader, start),
            _ => {}
        }
    }

    reader.advance();
    if reader.current().is_some_and(is_operator_char) {
        reader.advance();
    }
    Scanned::ok(
        Token::new(
            TokenKind::Operator,
            reader.slice_from(start),
            reader.line(),
            start,
        ),
        reader.cursor(),
    )
}

/// `//` comment up to the next CR-LF. The line break itself is left for the
/// next call's white-space skip.
fn line_comment(mut reader: Reader<'_>, start: usize) -> Scanned<'_> {
    let body = start + 2;
    let end = reader.find(body, b"\r\n").unwrap_or(reader.len());
    reader.consume_to(end);
    Scanned::ok(
        Token::new(
            TokenKind::Comment,
            reader.slice(body, end),
            reader.line(),
            body,
        ),
        reader.cursor(),
    )
}

fn block_comment(mut reader: Reader<'_>, start: usize) -> Scanned<'_> {
    let line = reader.line();
    let body = start + 2;
    let Some(close) = reader.find(body, b"*/") else {
        reader.consume_to(reader.len());
        return Scanned::failed(
            Token::new(TokenKind::LexicalError, reader.slice_from(start), line, start),
            reader.cursor(),
            LexError::UnterminatedComment {
                line,
                position: start,
            },
        );
    };
    reader.consume_to(close + 2);
    Scanned::ok(
        Token::new(TokenKind::Comment, reader.slice(body, close), line, body),
        reader.cursor(),
    )
}

// ─── Errors ─────────────────────────────────────────────────────

fn invalid(mut reader: Reader<'_>, start: usize, c: char) -> Scanned<'_> {
    let line = reader.line();
    reader.advance();
    Scanned::failed(
        Token::new(TokenKind::LexicalError, reader.slice_from(start), line, start),
        reader.cursor(),
        LexError::InvalidCharacter {
            ch: c,
            line,
            position: start,
        },
    )
}
