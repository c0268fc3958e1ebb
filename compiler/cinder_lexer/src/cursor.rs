/// Scan progress: byte offset plus 1-based line number.
///
/// Owned by the driving loop and passed by value into every
/// [`scan`](crate::scan) call, which returns the advanced cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Byte offset of the next unread character.
    pub position: usize,
    /// Line number of `position`, counting CR-LF pairs only.
    pub line: u32,
}

impl Cursor {
    /// Cursor at the beginning of a source text.
    pub const START: Cursor = Cursor {
        position: 0,
        line: 1,
    };

    pub const fn new(position: usize, line: u32) -> Self {
        Cursor { position, line }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::START
    }
}
