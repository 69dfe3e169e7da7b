//! End-to-end checks through the public API only.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use rich_input_core::{
    append_to_tokens, compute_current_token, source_text, tokens_to_string, update_tokens,
    DelimiterError, Delimiters, Position, Selection, TemplateInput, TemplateParser, TokenKind,
};

fn query() -> Delimiters {
    Delimiters::new(":", " ").expect("query delimiters are valid")
}

#[test]
fn parse_then_locate_and_complete_argument() {
    let delimiters = query();
    let tokens = TemplateParser::new(delimiters.clone()).parse("user:Al");

    let current = compute_current_token(&tokens, 7, 7).expect("caret at end of text");
    assert_eq!(current.index, 1);
    assert_eq!(current.token.kind(), TokenKind::IncompleteArgument);
    assert_eq!(current.token.value(), "Al");

    let updated = update_tokens(&tokens, current.index, "Alex", &delimiters).expect("in bounds");
    assert_eq!(tokens_to_string(&updated, &delimiters), "user:Alex ");

    let appended = append_to_tokens(&updated, "repo", TokenKind::Literal, &delimiters);
    assert_eq!(source_text(&appended), "user:Alex repo");
    assert_eq!(appended[2].position(), Position::new(10, 13));
}

#[test]
fn brace_template_round_trips() {
    let parser = TemplateParser::default();
    for source in ["Hello {name}!", "{a}{b}", "plain", "{x{y}z}", "tail {open"] {
        let tokens = parser.parse(source);
        assert_eq!(source_text(&tokens), source);
        assert_eq!(
            tokens.iter().map(|t| t.label()).collect::<String>(),
            source
        );
    }
}

#[test]
fn token_ids_render_index_and_kind() {
    let tokens = TemplateParser::default().parse("Hi {name}");
    let ids: Vec<String> = tokens.iter().map(|t| t.id().to_string()).collect();
    assert_eq!(ids, vec!["template-token-0-0", "template-token-1-1"]);
}

#[test]
fn invalid_delimiters_are_rejected() {
    assert_eq!(Delimiters::new("", "}"), Err(DelimiterError::EmptyStart));
    assert_eq!(Delimiters::new("{", ""), Err(DelimiterError::EmptyEnd));
    assert_eq!(
        Delimiters::new("|", "|"),
        Err(DelimiterError::Identical("|".to_owned()))
    );
}

#[test]
fn session_query_builder_flow() {
    let mut input = TemplateInput::new(query());
    input.push_token("user", TokenKind::Literal);
    input.push_token("Al", TokenKind::IncompleteArgument);
    assert_eq!(input.value(), "user:Al");
    assert_eq!(input.previous_token().map(|t| t.value()), Some("user"));

    assert_eq!(input.replace_current("Alex").as_deref(), Some("user:Alex "));
    assert_eq!(input.cursor(), Selection::caret(10));

    input.push_token("repo", TokenKind::Literal);
    assert_eq!(input.value(), "user:Alex repo");
    assert_eq!(
        input.tokens().iter().map(|t| t.kind()).collect::<Vec<_>>(),
        vec![TokenKind::Literal, TokenKind::Argument, TokenKind::Literal]
    );
}

#[cfg(feature = "serde")]
mod serde_shapes {
    use super::*;
    use rich_input_core::Token;

    #[test]
    fn tokens_serialize_with_type_tag() {
        let tokens = TemplateParser::default().parse("a{b}");
        let json = serde_json::to_value(&tokens).expect("tokens serialize");
        assert_eq!(json[0]["type"], "literal");
        assert_eq!(json[1]["type"], "argument");
        assert_eq!(json[0]["label"], "a");
        assert_eq!(json[1]["raw_value"], "{b}");
        assert_eq!(json[1]["label"], "{b}");
        assert_eq!(json[1]["position"]["start"], 1);
        assert_eq!(json[1]["position"]["end"], 3);

        let back: Vec<Token> = serde_json::from_value(json).expect("tokens deserialize");
        assert_eq!(back, tokens);
    }

    #[test]
    fn token_label_is_optional_but_checked() {
        let without_label = r#"{
            "type": "argument",
            "id": { "kind": "Argument", "index": 0 },
            "value": "b",
            "raw_value": "{b}",
            "position": { "start": 0, "end": 2 }
        }"#;
        let token: Token = serde_json::from_str(without_label).expect("label may be omitted");
        assert_eq!(token.label(), "{b}");

        let wrong_label = without_label.replace(r#""value": "b","#, r#""value": "b", "label": "b","#);
        let err = serde_json::from_str::<Token>(&wrong_label).expect_err("label must match");
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn delimiters_deserialize_with_defaults_and_validation() {
        let delimiters: Delimiters = serde_json::from_str(r#"{"end": " "}"#).expect("valid");
        assert_eq!(delimiters.start(), "{");
        assert_eq!(delimiters.end(), " ");

        assert!(serde_json::from_str::<Delimiters>(r#"{"start": "", "end": "}"}"#).is_err());
        assert!(serde_json::from_str::<Delimiters>(r#"{"start": "|", "end": "|"}"#).is_err());
    }
}
