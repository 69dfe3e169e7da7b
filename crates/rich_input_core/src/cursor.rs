//! Copyable cursor over template source text.
//!
//! The cursor tracks two offsets at once: the byte offset used for slicing
//! the source, and the character offset reported in token positions. Both
//! always point at the same UTF-8 character boundary.
//!
//! Ordinary text between delimiters is skipped with `memchr`, searching for
//! the first byte of either delimiter. A delimiter's first byte is never a
//! UTF-8 continuation byte, so every hit lies on a character boundary.

/// Byte and character offsets of one location in the source.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub(crate) struct Mark {
    pub(crate) byte: usize,
    pub(crate) char: usize,
}

/// Cursor over a template source string.
///
/// The cursor is [`Copy`], so a scanner can snapshot its location cheaply.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    mark: Mark,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            mark: Mark::default(),
        }
    }

    /// Current location.
    #[inline]
    pub(crate) fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.mark.byte >= self.source.len()
    }

    /// Unconsumed source text.
    #[inline]
    fn rest(&self) -> &'a str {
        self.source.get(self.mark.byte..).unwrap_or_default()
    }

    /// Returns `true` if `needle` occurs at the current location.
    #[inline]
    pub(crate) fn at(&self, needle: &str) -> bool {
        self.rest().starts_with(needle)
    }

    /// Consume `needle`, which must occur at the current location.
    #[inline]
    pub(crate) fn eat(&mut self, needle: &str) {
        debug_assert!(self.at(needle), "eat called without a match");
        self.mark.byte += needle.len();
        self.mark.char += needle.chars().count();
    }

    /// Advance past one character.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.mark.byte += c.len_utf8();
            self.mark.char += 1;
        }
    }

    /// Advance to the next occurrence of either byte, or to EOF.
    ///
    /// Used by the template scanner to jump over ordinary text: `a` and `b`
    /// are the leading bytes of the start and end delimiters.
    pub(crate) fn skip_to_either(&mut self, a: u8, b: u8) {
        let rest = self.rest();
        let skipped = match memchr::memchr2(a, b, rest.as_bytes()) {
            Some(offset) => rest.get(..offset).unwrap_or(rest),
            None => rest,
        };
        self.mark.byte += skipped.len();
        self.mark.char += skipped.chars().count();
    }

    /// Source text between two byte offsets.
    ///
    /// # Contract
    ///
    /// `start..end` must fall on character boundaries, which holds for any
    /// offsets taken from [`mark()`](Self::mark). Anything else yields `""`.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.source.get(start..end).unwrap_or_default()
    }

    /// Source text from `start` to the current location.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.mark.byte)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
