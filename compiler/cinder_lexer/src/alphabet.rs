//! Static character classes used for dispatch.

use std::fmt;

/// Characters that may start an operator or comment.
///
/// Any two of these in a row form a two-character operator.
pub const OPERATOR_ALPHABET: [char; 13] = [
    ':', '+', '-', '=', '*', '/', '%', '<', '>', '!', '&', '|', '^',
];

/// Returns `true` if `c` belongs to the operator alphabet.
#[inline]
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        ':' | '+' | '-' | '=' | '*' | '/' | '%' | '<' | '>' | '!' | '&' | '|' | '^'
    )
}

/// Returns `true` for the unconditional delimiters `( ) [ ] { } , ;`.
///
/// The member-access `.` is context dependent and handled by the scanner.
#[inline]
pub fn is_delimiter_char(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | ',' | ';')
}

/// Opening bracket whose closing partner must appear later in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `(` … `)`
    Paren,
    /// `[` … `]`
    Square,
    /// `{` … `}`
    Curly,
}

impl Bracket {
    pub fn from_open(c: char) -> Option<Bracket> {
        match c {
            '(' => Some(Bracket::Paren),
            '[' => Some(Bracket::Square),
            '{' => Some(Bracket::Curly),
            _ => None,
        }
    }

    pub const fn open(self) -> char {
        match self {
            Bracket::Paren => '(',
            Bracket::Square => '[',
            Bracket::Curly => '{',
        }
    }

    pub const fn close(self) -> char {
        match self {
            Bracket::Paren => ')',
            Bracket::Square => ']',
            Bracket::Curly => '}',
        }
    }

    /// Closing partner as a byte, for `memchr` searches.
    pub(crate) const fn close_byte(self) -> u8 {
        match self {
            Bracket::Paren => b')',
            Bracket::Square => b']',
            Bracket::Curly => b'}',
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.open())
    }
}
