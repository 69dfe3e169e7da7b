//! Single-pass template scanner.
//!
//! Converts a template string into a gapless sequence of [`Token`]s in one
//! left-to-right pass.
//!
//! # Nesting
//!
//! Arguments are tracked with a signed depth counter rather than a bracket
//! stack. A `start` delimiter inside an open argument deepens it and its
//! text is folded into the enclosing argument's value; an `end` delimiter
//! only closes a token when the depth is exactly 1. The counter is
//! decremented on every `end`, so stray closers outside an argument drive it
//! negative until the next opener resets it.
//!
//! # Unterminated arguments
//!
//! Text left over at EOF with a positive depth becomes a single
//! [`Token::IncompleteArgument`]. Its value strips exactly one `start`
//! prefix, even if further `start` delimiters were absorbed after it.

use tracing::trace;

use crate::cursor::{Cursor, Mark};
use crate::{Delimiters, Position, Token, TokenId, TokenKind};

/// Template string scanner configured with a delimiter pair.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TemplateParser {
    delimiters: Delimiters,
}

impl TemplateParser {
    pub fn new(delimiters: Delimiters) -> Self {
        Self { delimiters }
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Parse `source` into an ordered, gapless token sequence.
    ///
    /// An empty source yields an empty sequence. Only the last token can be
    /// a [`Token::IncompleteArgument`].
    #[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
    pub fn parse(&self, source: &str) -> Vec<Token> {
        Scanner::new(source, &self.delimiters).run()
    }
}

/// Scanner state for one `parse` call.
struct Scanner<'a> {
    cursor: Cursor<'a>,
    delimiters: &'a Delimiters,
    tokens: Vec<Token>,
    /// Where the token currently being accumulated starts.
    offset: Mark,
    /// Unmatched `start` delimiters since `offset`. May go negative.
    nesting: i64,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str, delimiters: &'a Delimiters) -> Self {
        Self {
            cursor: Cursor::new(source),
            delimiters,
            tokens: Vec::new(),
            offset: Mark::default(),
            nesting: 0,
        }
    }

    fn run(mut self) -> Vec<Token> {
        let delimiters = self.delimiters;
        let start = delimiters.start();
        let end = delimiters.end();
        // Delimiters are validated non-empty; a zero byte never matches `at`.
        let start_byte = start.as_bytes().first().copied().unwrap_or(0);
        let end_byte = end.as_bytes().first().copied().unwrap_or(0);

        loop {
            self.cursor.skip_to_either(start_byte, end_byte);
            if self.cursor.is_eof() {
                break;
            }

            if self.cursor.at(start) {
                self.open();
            } else if self.cursor.at(end) {
                self.close();
            } else {
                // First byte matched but the full delimiter did not.
                self.cursor.advance_char();
            }
        }

        self.finish();
        self.tokens
    }

    /// Handle a `start` delimiter at the cursor.
    fn open(&mut self) {
        let here = self.cursor.mark();

        if self.nesting <= 0 && here != self.offset {
            let value = self.cursor.slice(self.offset.byte, here.byte);
            self.push(Token::Literal {
                id: self.next_id(TokenKind::Literal),
                value: value.to_owned(),
                position: Position::with_len(self.offset.char, here.char - self.offset.char),
            });
            self.nesting = 0;
            self.offset = here;
        }

        self.nesting += 1;
        self.cursor.eat(self.delimiters.start());
    }

    /// Handle an `end` delimiter at the cursor.
    fn close(&mut self) {
        let here = self.cursor.mark();
        self.cursor.eat(self.delimiters.end());

        if self.nesting == 1 {
            let after = self.cursor.mark();
            let raw_value = self.cursor.slice_from(self.offset.byte);
            let inner_start = (self.offset.byte + self.delimiters.start().len()).min(here.byte);
            let value = self.cursor.slice(inner_start, here.byte);

            self.push(Token::Argument {
                id: self.next_id(TokenKind::Argument),
                value: value.to_owned(),
                raw_value: raw_value.to_owned(),
                position: Position::with_len(self.offset.char, after.char - self.offset.char),
            });
            self.offset = after;
        }

        self.nesting -= 1;
    }

    /// Flush whatever text remains after the last token.
    fn finish(&mut self) {
        let here = self.cursor.mark();
        if here == self.offset {
            return;
        }

        let raw_value = self.cursor.slice_from(self.offset.byte);
        let position = Position::with_len(self.offset.char, here.char - self.offset.char);

        let token = if self.nesting > 0 {
            let value = raw_value
                .get(self.delimiters.start().len()..)
                .unwrap_or_default();
            Token::IncompleteArgument {
                id: self.next_id(TokenKind::IncompleteArgument),
                value: value.to_owned(),
                raw_value: raw_value.to_owned(),
                position,
            }
        } else {
            Token::Literal {
                id: self.next_id(TokenKind::Literal),
                value: raw_value.to_owned(),
                position,
            }
        };

        self.push(token);
    }

    fn next_id(&self, kind: TokenKind) -> TokenId {
        TokenId::new(kind, self.tokens.len())
    }

    fn push(&mut self, token: Token) {
        trace!(
            index = self.tokens.len(),
            kind = token.kind().display_name(),
            position = %token.position(),
            nesting = self.nesting,
            "token"
        );
        self.tokens.push(token);
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
