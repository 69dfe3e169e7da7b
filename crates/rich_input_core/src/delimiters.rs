//! Argument delimiter configuration.
//!
//! Every entry point that needs to open or close an argument takes a
//! [`Delimiters`] value explicitly. The defaults are plain constants; there
//! is no process-wide mutable configuration.

use crate::DelimiterError;

/// Default argument opening delimiter.
pub const DEFAULT_ARGUMENT_START: &str = "{";

/// Default argument closing delimiter.
pub const DEFAULT_ARGUMENT_END: &str = "}";

/// Opening and closing strings that wrap an argument span.
///
/// Both strings are non-empty and differ from each other. Multi-character
/// delimiters are matched as whole substrings.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDelimiters")
)]
pub struct Delimiters {
    start: String,
    end: String,
}

impl Delimiters {
    /// Create a validated delimiter pair.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, DelimiterError> {
        let start = start.into();
        let end = end.into();

        if start.is_empty() {
            return Err(DelimiterError::EmptyStart);
        }
        if end.is_empty() {
            return Err(DelimiterError::EmptyEnd);
        }
        if start == end {
            return Err(DelimiterError::Identical(start));
        }

        Ok(Self { start, end })
    }

    /// Opening delimiter.
    #[inline]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Closing delimiter.
    #[inline]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Length of the opening delimiter in characters.
    #[inline]
    pub fn start_len(&self) -> usize {
        self.start.chars().count()
    }

    /// Length of the closing delimiter in characters.
    #[inline]
    pub fn end_len(&self) -> usize {
        self.end.chars().count()
    }

    /// `start + value + end`.
    pub fn wrap(&self, value: &str) -> String {
        let mut raw = String::with_capacity(self.start.len() + value.len() + self.end.len());
        raw.push_str(&self.start);
        raw.push_str(value);
        raw.push_str(&self.end);
        raw
    }

    /// `start + value`, the raw text of an argument that was never closed.
    pub fn open(&self, value: &str) -> String {
        let mut raw = String::with_capacity(self.start.len() + value.len());
        raw.push_str(&self.start);
        raw.push_str(value);
        raw
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            start: DEFAULT_ARGUMENT_START.to_owned(),
            end: DEFAULT_ARGUMENT_END.to_owned(),
        }
    }
}

/// Unvalidated wire form; missing fields fall back to the defaults.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDelimiters {
    #[serde(default = "default_start")]
    start: String,
    #[serde(default = "default_end")]
    end: String,
}

#[cfg(feature = "serde")]
fn default_start() -> String {
    DEFAULT_ARGUMENT_START.to_owned()
}

#[cfg(feature = "serde")]
fn default_end() -> String {
    DEFAULT_ARGUMENT_END.to_owned()
}

#[cfg(feature = "serde")]
impl TryFrom<RawDelimiters> for Delimiters {
    type Error = DelimiterError;

    fn try_from(raw: RawDelimiters) -> Result<Self, Self::Error> {
        Delimiters::new(raw.start, raw.end)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
