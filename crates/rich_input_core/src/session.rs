//! Editing session: text, caret and token sequence kept in sync.
//!
//! A host input (text field plus overlay) feeds text and caret changes into
//! a [`TemplateInput`] and reads back the token sequence and the token under
//! the caret. Rendering and debouncing stay with the host.

use tracing::debug;

use crate::{
    append_to_tokens, compute_current_token, source_text, tokens_to_string, update_tokens,
    CurrentToken, Delimiters, TemplateParser, Token, TokenKind,
};

/// Caret selection in character offsets; `start == end` for a collapsed caret.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Normalized selection: bounds are swapped so that `start <= end`.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Collapsed caret at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    fn clamped(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}

/// Template text with its parsed tokens and caret.
///
/// Every text change re-parses; tokens are never patched incrementally
/// here, so they always describe `value()` exactly.
#[derive(Clone, Debug, Default)]
pub struct TemplateInput {
    parser: TemplateParser,
    value: String,
    tokens: Vec<Token>,
    cursor: Selection,
}

impl TemplateInput {
    /// Empty session using `delimiters`.
    pub fn new(delimiters: Delimiters) -> Self {
        Self {
            parser: TemplateParser::new(delimiters),
            ..Self::default()
        }
    }

    /// Session starting with `value`, caret at the end.
    pub fn with_value(delimiters: Delimiters, value: impl Into<String>) -> Self {
        let mut input = Self::new(delimiters);
        input.set_value(value);
        let end = input.len();
        input.cursor = Selection::caret(end);
        input
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn delimiters(&self) -> &Delimiters {
        self.parser.delimiters()
    }

    pub fn cursor(&self) -> Selection {
        self.cursor
    }

    /// Length of the text in characters.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the text and re-parse it. The caret is clamped to the new length.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.tokens = if self.value.is_empty() {
            Vec::new()
        } else {
            self.parser.parse(&self.value)
        };
        self.cursor = self.cursor.clamped(self.len());
    }

    /// Move the caret. Reversed bounds are normalized; both are clamped to the text.
    pub fn set_cursor(&mut self, start: usize, end: usize) {
        self.cursor = Selection::new(start, end).clamped(self.len());
    }

    /// Token under the caret, if the caret is collapsed and inside the text.
    pub fn current_token(&self) -> Option<CurrentToken<'_>> {
        compute_current_token(&self.tokens, self.cursor.start, self.cursor.end)
    }

    /// Token immediately before the current one.
    ///
    /// For a `scope:value` template this is the scope literal that qualifies
    /// the argument under the caret.
    pub fn previous_token(&self) -> Option<&Token> {
        let current = self.current_token()?;
        let index = current.index.checked_sub(1)?;
        self.tokens.get(index)
    }

    /// Commit `value` into the token under the caret.
    ///
    /// The token is updated (an incomplete argument is closed), the text is
    /// rebuilt with [`tokens_to_string`], and the caret moves to just after
    /// the updated token. Returns the new text, or `None` if there is no
    /// current token.
    pub fn replace_current(&mut self, value: &str) -> Option<String> {
        let Some(index) = self.current_token().map(|current| current.index) else {
            debug!(cursor = ?self.cursor, "no current token to replace");
            return None;
        };

        let updated = update_tokens(&self.tokens, index, value, self.delimiters())?;
        let caret = updated
            .get(index)
            .map_or(0, |token| token.position().end_exclusive());
        let text = tokens_to_string(&updated, self.delimiters());

        self.set_value(text.clone());
        self.cursor = Selection::caret(caret).clamped(self.len());
        Some(text)
    }

    /// Append a token of `kind` after the existing text and move the caret to the end.
    ///
    /// A trailing unterminated argument is closed first; otherwise its open
    /// `start` delimiter would absorb the new token on re-parse.
    pub fn push_token(&mut self, value: &str, kind: TokenKind) -> &str {
        let last = self.tokens.len().saturating_sub(1);
        let closed = self
            .tokens
            .last()
            .filter(|token| token.kind() == TokenKind::IncompleteArgument)
            .and_then(|token| update_tokens(&self.tokens, last, token.value(), self.delimiters()));
        let base = closed.as_deref().unwrap_or(self.tokens.as_slice());

        let appended = append_to_tokens(base, value, kind, self.delimiters());
        self.set_value(source_text(&appended));
        self.cursor = Selection::caret(self.len());
        &self.value
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
