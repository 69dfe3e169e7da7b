//! Token model for scanned template strings.
//!
//! A template string is tiled by three kinds of tokens:
//! - [`Token::Literal`]: plain text outside any argument
//! - [`Token::Argument`]: `start + content + end`, fully delimited
//! - [`Token::IncompleteArgument`]: `start + content` that was never closed
//!
//! Tokens are plain values. Sequence operations such as
//! [`update_tokens`](crate::update_tokens) always build new tokens instead
//! of mutating existing ones.

use std::fmt;

use crate::{Delimiters, Position};

/// Field-less tag of a [`Token`] variant.
///
/// The discriminants are part of the rendered [`TokenId`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    Literal = 0,
    Argument = 1,
    IncompleteArgument = 2,
}

impl TokenKind {
    /// Human-readable name for diagnostics and logs.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Literal => "literal",
            TokenKind::Argument => "argument",
            TokenKind::IncompleteArgument => "incomplete argument",
        }
    }
}

/// Identifier of a token within one sequence.
///
/// Derived from the token's kind and index, so it is only stable for as long
/// as the token keeps both. Renders as `template-token-{index}-{kind}`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenId {
    kind: TokenKind,
    index: usize,
}

impl TokenId {
    #[inline]
    pub const fn new(kind: TokenKind, index: usize) -> Self {
        TokenId { kind, index }
    }

    #[inline]
    pub const fn kind(self) -> TokenKind {
        self.kind
    }

    /// Index of the token in the sequence it was created for.
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "template-token-{}-{}", self.index, self.kind as u8)
    }
}

/// A single scanned unit of a template string.
///
/// `value` never contains the delimiters that wrap it; `raw_value` is the
/// exact delimited text for argument variants. The human-facing label is
/// derived (see [`Token::label`]) rather than stored, so it cannot drift
/// from `value`/`raw_value`. The serialized form carries it anyway.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "RawToken", try_from = "RawToken")
)]
pub enum Token {
    /// Plain text outside any argument span.
    Literal {
        id: TokenId,
        value: String,
        position: Position,
    },
    /// Fully delimited argument span.
    Argument {
        id: TokenId,
        value: String,
        raw_value: String,
        position: Position,
    },
    /// Argument that was opened but never closed.
    IncompleteArgument {
        id: TokenId,
        value: String,
        raw_value: String,
        position: Position,
    },
}

impl Token {
    /// Build a literal token at `start`, the `index`-th of its sequence.
    pub fn literal(index: usize, value: impl Into<String>, start: usize) -> Self {
        let value = value.into();
        let position = Position::with_len(start, value.chars().count());
        Token::Literal {
            id: TokenId::new(TokenKind::Literal, index),
            value,
            position,
        }
    }

    /// Build a complete argument token wrapping `value` in both delimiters.
    pub fn argument(
        index: usize,
        value: impl Into<String>,
        start: usize,
        delimiters: &Delimiters,
    ) -> Self {
        let value = value.into();
        let raw_value = delimiters.wrap(&value);
        let position = Position::with_len(start, raw_value.chars().count());
        Token::Argument {
            id: TokenId::new(TokenKind::Argument, index),
            value,
            raw_value,
            position,
        }
    }

    /// Build an unclosed argument token: only the start delimiter is present.
    pub fn incomplete_argument(
        index: usize,
        value: impl Into<String>,
        start: usize,
        delimiters: &Delimiters,
    ) -> Self {
        let value = value.into();
        let raw_value = delimiters.open(&value);
        let position = Position::with_len(start, raw_value.chars().count());
        Token::IncompleteArgument {
            id: TokenId::new(TokenKind::IncompleteArgument, index),
            value,
            raw_value,
            position,
        }
    }

    /// Build a token of the given kind.
    pub fn of_kind(
        kind: TokenKind,
        index: usize,
        value: impl Into<String>,
        start: usize,
        delimiters: &Delimiters,
    ) -> Self {
        match kind {
            TokenKind::Literal => Token::literal(index, value, start),
            TokenKind::Argument => Token::argument(index, value, start, delimiters),
            TokenKind::IncompleteArgument => {
                Token::incomplete_argument(index, value, start, delimiters)
            }
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Literal { .. } => TokenKind::Literal,
            Token::Argument { .. } => TokenKind::Argument,
            Token::IncompleteArgument { .. } => TokenKind::IncompleteArgument,
        }
    }

    #[inline]
    pub fn id(&self) -> TokenId {
        match self {
            Token::Literal { id, .. }
            | Token::Argument { id, .. }
            | Token::IncompleteArgument { id, .. } => *id,
        }
    }

    /// Semantic content with delimiters stripped.
    #[inline]
    pub fn value(&self) -> &str {
        match self {
            Token::Literal { value, .. }
            | Token::Argument { value, .. }
            | Token::IncompleteArgument { value, .. } => value,
        }
    }

    /// Delimited source text; `None` for literals.
    #[inline]
    pub fn raw_value(&self) -> Option<&str> {
        match self {
            Token::Literal { .. } => None,
            Token::Argument { raw_value, .. } | Token::IncompleteArgument { raw_value, .. } => {
                Some(raw_value)
            }
        }
    }

    /// Preview text: the value for literals, the raw delimited text otherwise.
    ///
    /// Concatenating the labels of a parsed sequence reproduces its source.
    #[inline]
    pub fn label(&self) -> &str {
        self.raw_value().unwrap_or_else(|| self.value())
    }

    #[inline]
    pub fn position(&self) -> Position {
        match self {
            Token::Literal { position, .. }
            | Token::Argument { position, .. }
            | Token::IncompleteArgument { position, .. } => *position,
        }
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal { .. })
    }

    /// Copy of this token with its position translated by `diff`.
    #[must_use]
    pub fn translated(&self, diff: isize) -> Token {
        let mut token = self.clone();
        match &mut token {
            Token::Literal { position, .. }
            | Token::Argument { position, .. }
            | Token::IncompleteArgument { position, .. } => *position = position.shifted(diff),
        }
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wire form of a [`Token`], tagged by `type` and carrying its `label`.
///
/// A missing `label` is accepted on input; a present one must match.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawToken {
    Literal {
        id: TokenId,
        value: String,
        #[serde(default)]
        label: Option<String>,
        position: Position,
    },
    Argument {
        id: TokenId,
        value: String,
        raw_value: String,
        #[serde(default)]
        label: Option<String>,
        position: Position,
    },
    IncompleteArgument {
        id: TokenId,
        value: String,
        raw_value: String,
        #[serde(default)]
        label: Option<String>,
        position: Position,
    },
}

#[cfg(feature = "serde")]
impl From<Token> for RawToken {
    fn from(token: Token) -> Self {
        let label = Some(token.label().to_owned());
        match token {
            Token::Literal {
                id,
                value,
                position,
            } => RawToken::Literal {
                id,
                value,
                label,
                position,
            },
            Token::Argument {
                id,
                value,
                raw_value,
                position,
            } => RawToken::Argument {
                id,
                value,
                raw_value,
                label,
                position,
            },
            Token::IncompleteArgument {
                id,
                value,
                raw_value,
                position,
            } => RawToken::IncompleteArgument {
                id,
                value,
                raw_value,
                label,
                position,
            },
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawToken> for Token {
    type Error = crate::LabelMismatch;

    fn try_from(raw: RawToken) -> Result<Self, Self::Error> {
        let (token, label) = match raw {
            RawToken::Literal {
                id,
                value,
                label,
                position,
            } => (
                Token::Literal {
                    id,
                    value,
                    position,
                },
                label,
            ),
            RawToken::Argument {
                id,
                value,
                raw_value,
                label,
                position,
            } => (
                Token::Argument {
                    id,
                    value,
                    raw_value,
                    position,
                },
                label,
            ),
            RawToken::IncompleteArgument {
                id,
                value,
                raw_value,
                label,
                position,
            } => (
                Token::IncompleteArgument {
                    id,
                    value,
                    raw_value,
                    position,
                },
                label,
            ),
        };

        match label {
            Some(found) if found != token.label() => Err(crate::LabelMismatch {
                expected: token.label().to_owned(),
                found,
            }),
            _ => Ok(token),
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
