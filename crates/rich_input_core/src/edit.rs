//! Operations over an existing token sequence.
//!
//! None of these re-scan the source. Mutations copy the sequence, rebuild
//! the one affected token, and translate every later token by the change in
//! length ("position diff"); the input slice is never modified.

use tracing::debug;

use crate::{Delimiters, Token, TokenId, TokenKind};

/// Token found under a collapsed caret, with its index in the sequence.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CurrentToken<'a> {
    pub token: &'a Token,
    pub index: usize,
}

/// Locate the token under the caret.
///
/// Returns `None` when `cursor_start != cursor_end` (a range selection has
/// no current token) or when no token's range contains the caret. A caret
/// directly after a token's last character still resolves to that token;
/// the first match wins.
pub fn compute_current_token(
    tokens: &[Token],
    cursor_start: usize,
    cursor_end: usize,
) -> Option<CurrentToken<'_>> {
    if cursor_start != cursor_end {
        debug!(cursor_start, cursor_end, "range selection has no current token");
        return None;
    }

    let found = tokens
        .iter()
        .enumerate()
        .find(|(_, token)| token.position().contains_caret(cursor_start))
        .map(|(index, token)| CurrentToken { token, index });
    if found.is_none() {
        debug!(caret = cursor_start, len = tokens.len(), "caret outside every token");
    }
    found
}

/// Replace the value of the token at `index` and re-tile the rest.
///
/// - Literal: value and label become `value`.
/// - Argument: raw value is rebuilt as `start + value + end`.
/// - Incomplete argument: promoted to [`Token::Argument`], gaining the
///   closing delimiter it was missing.
///
/// Every later token is translated by the resulting length change. Returns
/// `None` if `index` is out of bounds.
#[tracing::instrument(level = "trace", skip(tokens, delimiters), fields(len = tokens.len()))]
pub fn update_tokens(
    tokens: &[Token],
    index: usize,
    value: &str,
    delimiters: &Delimiters,
) -> Option<Vec<Token>> {
    let Some(target) = tokens.get(index) else {
        debug!(index, len = tokens.len(), "update target out of bounds");
        return None;
    };

    let (updated, diff) = updated_token(target, index, value, delimiters);

    let mut result = Vec::with_capacity(tokens.len());
    result.extend_from_slice(&tokens[..index]);
    result.push(updated);
    result.extend(tokens[index + 1..].iter().map(|token| token.translated(diff)));
    Some(result)
}

/// Rebuild one token for [`update_tokens`], returning it with its position diff.
fn updated_token(
    token: &Token,
    index: usize,
    value: &str,
    delimiters: &Delimiters,
) -> (Token, isize) {
    let length_diff = char_len(value) - char_len(token.value());

    match token {
        Token::Literal { id, position, .. } => (
            Token::Literal {
                id: *id,
                value: value.to_owned(),
                position: position.resized(length_diff),
            },
            length_diff,
        ),
        Token::Argument { id, position, .. } => (
            Token::Argument {
                id: *id,
                value: value.to_owned(),
                raw_value: delimiters.wrap(value),
                position: position.resized(length_diff),
            },
            length_diff,
        ),
        Token::IncompleteArgument { position, .. } => {
            let diff = length_diff + char_len(delimiters.end());
            (
                Token::Argument {
                    id: TokenId::new(TokenKind::Argument, index),
                    value: value.to_owned(),
                    raw_value: delimiters.wrap(value),
                    position: position.resized(diff),
                },
                diff,
            )
        }
    }
}

/// Return a copy of `tokens` with a new token of `kind` appended.
///
/// The new token starts right after the last one (or at 0).
#[tracing::instrument(level = "trace", skip(tokens, delimiters), fields(len = tokens.len()))]
pub fn append_to_tokens(
    tokens: &[Token],
    value: &str,
    kind: TokenKind,
    delimiters: &Delimiters,
) -> Vec<Token> {
    let start = tokens
        .last()
        .map_or(0, |last| last.position().end_exclusive());

    let mut result = Vec::with_capacity(tokens.len() + 1);
    result.extend_from_slice(tokens);
    result.push(Token::of_kind(kind, tokens.len(), value, start, delimiters));
    result
}

/// Serialize a sequence, wrapping every non-literal value in both delimiters.
///
/// An incomplete argument gets a synthesized closing delimiter, so this does
/// not reproduce the source of an unterminated template; it "completes" it.
/// Use [`source_text`] for the exact text.
pub fn tokens_to_string(tokens: &[Token], delimiters: &Delimiters) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Literal { value, .. } => out.push_str(value),
            Token::Argument { value, .. } | Token::IncompleteArgument { value, .. } => {
                out.push_str(delimiters.start());
                out.push_str(value);
                out.push_str(delimiters.end());
            }
        }
    }
    out
}

/// Concatenate token labels: the exact source text of a parsed sequence,
/// unterminated arguments included.
pub fn source_text(tokens: &[Token]) -> String {
    tokens.iter().map(Token::label).collect()
}

fn char_len(s: &str) -> isize {
    isize::try_from(s.chars().count()).unwrap_or(isize::MAX)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
