//! Template-string tokenizer for rich text inputs.
//!
//! Scans strings made of literal text interleaved with delimited argument
//! spans (`Hello {name}`, `user:Alex repo:`) into an ordered, gapless
//! sequence of tokens with exact character offsets, and edits such
//! sequences without re-scanning:
//!
//! - [`TemplateParser::parse`]: source text to tokens, one linear pass
//! - [`compute_current_token`]: token under a collapsed caret
//! - [`update_tokens`]: replace a token's value, re-tiling later offsets
//! - [`append_to_tokens`]: add a token at the end
//! - [`tokens_to_string`]: tokens back to text
//!
//! [`TemplateInput`] bundles these into an editing session for hosts that
//! track text and caret together.
//!
//! # Invariants
//!
//! Every sequence produced here tiles its source: tokens are ordered, the
//! first starts at 0, and each starts one past the previous token's end.
//! Operations never mutate their input; they return a new `Vec`.
//!
//! # Logging
//!
//! The engine emits `tracing` events at `trace`/`debug` level. Hosts
//! without their own subscriber can call [`init_tracing`].

mod cursor;
mod delimiters;
mod edit;
mod error;
mod parser;
mod position;
mod session;
mod token;

pub use delimiters::{Delimiters, DEFAULT_ARGUMENT_END, DEFAULT_ARGUMENT_START};
pub use edit::{
    append_to_tokens, compute_current_token, source_text, tokens_to_string, update_tokens,
    CurrentToken,
};
pub use error::DelimiterError;
#[cfg(feature = "serde")]
pub use error::LabelMismatch;
pub use parser::TemplateParser;
pub use position::Position;
pub use session::{Selection, TemplateInput};
pub use token::{Token, TokenId, TokenKind};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=rich_input_core=trace`, and leaves an already
/// installed global subscriber in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
                .ok();
        }
    });
}
