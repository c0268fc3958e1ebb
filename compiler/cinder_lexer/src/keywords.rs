//! Reserved-word table.
//!
//! Lookup uses the identifier's length as a first-pass filter (reserved words
//! span 2-11 characters), then matches against the words of that length.

/// Every reserved word, alphabetically.
pub const KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Returns `true` if `text` is a reserved word.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-11 ASCII lowercase chars
    if !(2..=11).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return false;
    }

    match len {
        2 => matches!(text, "go" | "if"),
        3 => matches!(text, "for" | "map" | "var"),
        4 => matches!(text, "case" | "chan" | "else" | "func" | "goto" | "type"),
        5 => matches!(text, "break" | "const" | "defer" | "range"),
        6 => matches!(text, "import" | "return" | "select" | "struct" | "switch"),
        7 => matches!(text, "default" | "package"),
        8 => text == "continue",
        9 => text == "interface",
        11 => text == "fallthrough",
        _ => false,
    }
}
