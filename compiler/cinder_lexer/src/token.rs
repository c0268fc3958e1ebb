//! Token types produced by the scanner.

use std::fmt;

/// Category of a scanned lexeme.
///
/// The set is closed: every call to [`scan`](crate::scan) yields exactly one
/// of these kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Name that is not a reserved word (`count`, `_tmp`).
    Identifier,
    /// Reserved word from the keyword table (`for`, `return`).
    Keyword,
    /// Run of digits without a dot (`123`).
    IntegerLiteral,
    /// Run of digits containing at least one dot (`12.5`, `.5`, `1.2.3`).
    FloatLiteral,
    /// Punctuation: `( ) [ ] { } , ;` or a member-access `.`.
    Delimiter,
    /// Double-quoted text; the value excludes the quotes.
    StringLiteral,
    /// `//` or `/* */` comment; the value excludes the markers.
    Comment,
    /// One or two characters from the operator alphabet.
    Operator,
    /// No input left after whitespace.
    EndOfInput,
    /// Span that could not be classified; always paired with a
    /// [`LexError`](crate::LexError).
    LexicalError,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Identifier,
        TokenKind::Keyword,
        TokenKind::IntegerLiteral,
        TokenKind::FloatLiteral,
        TokenKind::Delimiter,
        TokenKind::StringLiteral,
        TokenKind::Comment,
        TokenKind::Operator,
        TokenKind::EndOfInput,
        TokenKind::LexicalError,
    ];

    /// Human-readable name used by reporters.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::Delimiter => "delimiter",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Comment => "comment",
            TokenKind::Operator => "operator",
            TokenKind::EndOfInput => "end of input",
            TokenKind::LexicalError => "lexical error",
        }
    }

    /// Returns `true` for literal kinds (integer, float, string).
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral | TokenKind::FloatLiteral | TokenKind::StringLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One classified lexeme.
///
/// `value` borrows from the scanned source. For strings and comments it
/// excludes the delimiters, and `position` and `length` describe the
/// stripped text (except string literals, whose `position` is the opening
/// quote).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Character count of `value`.
    pub length: usize,
    /// 1-based line at token start.
    pub line: u32,
    /// 0-based byte offset of the token start.
    pub position: usize,
    pub value: &'a str,
}

impl<'a> Token<'a> {
    /// Build a token whose `length` is the character count of `value`.
    pub fn new(kind: TokenKind, value: &'a str, line: u32, position: usize) -> Self {
        Token {
            kind,
            length: value.chars().count(),
            line,
            position,
            value,
        }
    }

    /// End-of-input marker at the given position.
    pub fn end(line: u32, position: usize) -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            length: 0,
            line,
            position,
            value: "",
        }
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::LexicalError
    }
}
