use super::*;
use pretty_assertions::assert_eq;

fn query() -> Delimiters {
    let Ok(delimiters) = Delimiters::new(":", " ") else {
        panic!("query delimiters are valid");
    };
    delimiters
}

// === Identity ===

#[test]
fn id_renders_index_and_kind() {
    assert_eq!(
        TokenId::new(TokenKind::Literal, 0).to_string(),
        "template-token-0-0"
    );
    assert_eq!(
        TokenId::new(TokenKind::Argument, 3).to_string(),
        "template-token-3-1"
    );
    assert_eq!(
        TokenId::new(TokenKind::IncompleteArgument, 12).to_string(),
        "template-token-12-2"
    );
}

// === Construction ===

#[test]
fn literal_label_equals_value() {
    let token = Token::literal(0, "one", 0);
    assert_eq!(token.kind(), TokenKind::Literal);
    assert_eq!(token.value(), "one");
    assert_eq!(token.label(), "one");
    assert_eq!(token.raw_value(), None);
    assert_eq!(token.position(), Position::new(0, 2));
    assert!(token.is_literal());
}

#[test]
fn argument_wraps_both_delimiters() {
    let token = Token::argument(1, "user", 3, &query());
    assert_eq!(token.value(), "user");
    assert_eq!(token.raw_value(), Some(":user "));
    assert_eq!(token.label(), ":user ");
    assert_eq!(token.position(), Position::new(3, 8));
    assert_eq!(token.id(), TokenId::new(TokenKind::Argument, 1));
}

#[test]
fn incomplete_argument_wraps_start_only() {
    let token = Token::incomplete_argument(2, "us", 4, &query());
    assert_eq!(token.value(), "us");
    assert_eq!(token.raw_value(), Some(":us"));
    assert_eq!(token.position(), Position::new(4, 6));
    assert_eq!(token.kind(), TokenKind::IncompleteArgument);
}

#[test]
fn of_kind_dispatches() {
    let delimiters = Delimiters::default();
    for kind in [
        TokenKind::Literal,
        TokenKind::Argument,
        TokenKind::IncompleteArgument,
    ] {
        let token = Token::of_kind(kind, 0, "x", 0, &delimiters);
        assert_eq!(token.kind(), kind);
        assert_eq!(token.id().kind(), kind);
    }
}

#[test]
fn positions_count_characters() {
    let token = Token::literal(0, "h\u{e9}llo \u{1F600}", 0);
    assert_eq!(token.position().len(), 7);
}

// === Translation ===

#[test]
fn translated_keeps_content() {
    let token = Token::argument(1, "arg", 3, &Delimiters::default());
    let moved = token.translated(2);
    assert_eq!(moved.position(), Position::new(5, 9));
    assert_eq!(moved.value(), token.value());
    assert_eq!(moved.raw_value(), token.raw_value());
    assert_eq!(moved.id(), token.id());
    // receiver untouched
    assert_eq!(token.position(), Position::new(3, 7));
}

#[test]
fn display_is_label() {
    let token = Token::incomplete_argument(0, "abc", 0, &Delimiters::default());
    assert_eq!(token.to_string(), "{abc");
}
