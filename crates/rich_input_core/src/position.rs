//! Character-offset positions of tokens inside a template string.
//!
//! Offsets count Unicode scalar values (`char`s), not bytes, so a caret
//! position reported by a text input maps directly onto a token.

use std::fmt;

/// Location of a token in its source string.
///
/// Stored as `start` plus a length so that the empty token produced by
/// updating a literal to `""` stays representable at offset 0. The inclusive
/// view (`start..=end`) is what hosts usually work with; the exclusive end is
/// what offset arithmetic uses.
///
/// # Tiling
///
/// For adjacent tokens `a`, `b` of one sequence: `a.end_exclusive() == b.start()`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "RawPosition", from = "RawPosition")
)]
pub struct Position {
    start: usize,
    len: usize,
}

impl Position {
    /// Create a position from inclusive `start` and `end` offsets.
    ///
    /// An `end` before `start` yields an empty position at `start`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        let len = if end < start {
            0
        } else {
            (end - start).saturating_add(1)
        };
        Position { start, len }
    }

    /// Create a position covering `len` characters from `start`.
    #[inline]
    pub const fn with_len(start: usize, len: usize) -> Self {
        Position { start, len }
    }

    /// Offset of the first character.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Offset of the last character.
    ///
    /// For an empty position this is `start - 1` (saturating at 0); prefer
    /// [`end_exclusive()`](Self::end_exclusive) when the token may be empty.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start.saturating_add(self.len).saturating_sub(1)
    }

    /// Offset one past the last character; the next token starts here.
    #[inline]
    pub const fn end_exclusive(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    /// Number of characters covered.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if a collapsed caret at `offset` belongs to this token.
    ///
    /// The caret right after the last character still counts (`start <= offset <= end + 1`),
    /// so typing at a token boundary edits the token just finished.
    #[inline]
    pub const fn contains_caret(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end_exclusive()
    }

    /// Translate both ends by `diff` characters.
    #[inline]
    #[must_use]
    pub const fn shifted(self, diff: isize) -> Position {
        Position {
            start: self.start.saturating_add_signed(diff),
            len: self.len,
        }
    }

    /// Move only the end by `diff` characters, keeping `start` fixed.
    #[inline]
    #[must_use]
    pub const fn resized(self, diff: isize) -> Position {
        Position {
            start: self.start,
            len: self.len.saturating_add_signed(diff),
        }
    }

    /// Convert to a `std::ops::Range` of character offsets.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start..self.end_exclusive()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{}..{}", self.start, self.start)
        } else {
            write!(f, "{}..={}", self.start, self.end())
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Wire form with an inclusive `end`; an empty position has `end == start - 1`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawPosition {
    start: usize,
    end: isize,
}

#[cfg(feature = "serde")]
impl From<Position> for RawPosition {
    fn from(position: Position) -> Self {
        let end = isize::try_from(position.end_exclusive()).map_or(isize::MAX, |end| end - 1);
        RawPosition {
            start: position.start,
            end,
        }
    }
}

#[cfg(feature = "serde")]
impl From<RawPosition> for Position {
    fn from(raw: RawPosition) -> Self {
        match usize::try_from(raw.end) {
            Ok(end) => Position::new(raw.start, end),
            Err(_) => Position::with_len(raw.start, 0),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
