//! Character reader over a `&str` with line tracking.
//!
//! The reader works on byte offsets but always advances by whole UTF-8
//! characters, so every offset it produces is a valid slice boundary.
//! Forward searches for closing delimiters go through `memchr`.

use crate::cursor::Cursor;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Reader<'a> {
    src: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    line: u32,
}

impl<'a> Reader<'a> {
    /// Position the reader at `at`.
    ///
    /// Offsets past the end clamp to the end; offsets inside a multi-byte
    /// character move forward to the next character boundary.
    pub(crate) fn new(src: &'a str, at: Cursor) -> Self {
        let mut pos = at.position.min(src.len());
        while !src.is_char_boundary(pos) {
            pos += 1;
        }
        Reader {
            src,
            pos,
            line: at.line,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    pub(crate) fn cursor(&self) -> Cursor {
        Cursor::new(self.pos, self.line)
    }

    pub(crate) fn len(&self) -> usize {
        self.src.len()
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Character at the current position, `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the current one.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Character just before the current position.
    pub(crate) fn previous(&self) -> Option<char> {
        self.src[..self.pos].chars().next_back()
    }

    /// Advance past one character. No-op at end of input.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Advance while `pred` holds for the current character.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Skip white space, counting each CR-LF pair as one line.
    ///
    /// A bare LF is skipped without touching the line counter.
    pub(crate) fn skip_whitespace(&mut self) {
        loop {
            if self.rest().starts_with("\r\n") {
                self.pos += 2;
                self.line = self.line.saturating_add(1);
                continue;
            }
            match self.current() {
                Some(c) if c.is_whitespace() => self.pos += c.len_utf8(),
                _ => break,
            }
        }
    }

    /// Absolute offset of the first `byte` at or after `from`.
    pub(crate) fn find_byte(&self, from: usize, byte: u8) -> Option<usize> {
        let hay = self.src.as_bytes().get(from..)?;
        memchr::memchr(byte, hay).map(|off| from + off)
    }

    /// Absolute offset of the first occurrence of `needle` at or after `from`.
    pub(crate) fn find(&self, from: usize, needle: &[u8]) -> Option<usize> {
        let hay = self.src.as_bytes().get(from..)?;
        memchr::memmem::find(hay, needle).map(|off| from + off)
    }

    /// Jump to `end`, counting the CR-LF pairs skipped over.
    pub(crate) fn consume_to(&mut self, end: usize) {
        debug_assert!(end >= self.pos, "reader cannot move backwards");
        let skipped = &self.src.as_bytes()[self.pos..end];
        let breaks = memchr::memmem::find_iter(skipped, b"\r\n").count();
        self.line = self
            .line
            .saturating_add(u32::try_from(breaks).unwrap_or(u32::MAX));
        self.pos = end;
    }

    /// Source text between two offsets.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    /// Source text from `start` to the current position.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }
}
