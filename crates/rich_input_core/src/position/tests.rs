use super::*;
use pretty_assertions::assert_eq;

// === Construction ===

#[test]
fn inclusive_bounds() {
    let pos = Position::new(0, 2);
    assert_eq!(pos.start(), 0);
    assert_eq!(pos.end(), 2);
    assert_eq!(pos.len(), 3);
    assert_eq!(pos.end_exclusive(), 3);
    assert!(!pos.is_empty());
}

#[test]
fn single_character() {
    let pos = Position::new(4, 4);
    assert_eq!(pos.len(), 1);
    assert_eq!(pos, Position::with_len(4, 1));
}

#[test]
fn end_before_start_is_empty() {
    let pos = Position::new(3, 2);
    assert!(pos.is_empty());
    assert_eq!(pos.start(), 3);
    assert_eq!(pos.end_exclusive(), 3);
}

#[test]
fn empty_at_zero_does_not_underflow() {
    let pos = Position::with_len(0, 0);
    assert_eq!(pos.end(), 0);
    assert_eq!(pos.end_exclusive(), 0);
}

#[test]
fn extreme_offsets_saturate() {
    let pos = Position::new(0, usize::MAX);
    assert_eq!(pos.len(), usize::MAX);
    assert_eq!(pos.end_exclusive(), usize::MAX);

    let pos = Position::with_len(usize::MAX, 1);
    assert_eq!(pos.end(), usize::MAX - 1);
    assert_eq!(pos.end_exclusive(), usize::MAX);
}

// === Caret containment ===

#[test]
fn caret_inside_and_one_past_end() {
    let pos = Position::new(3, 7);
    assert!(!pos.contains_caret(2));
    assert!(pos.contains_caret(3));
    assert!(pos.contains_caret(7));
    assert!(pos.contains_caret(8));
    assert!(!pos.contains_caret(9));
}

#[test]
fn caret_on_empty_position() {
    let pos = Position::with_len(5, 0);
    assert!(pos.contains_caret(5));
    assert!(!pos.contains_caret(6));
}

// === Arithmetic ===

#[test]
fn shifted_translates_both_ends() {
    let pos = Position::new(3, 5);
    assert_eq!(pos.shifted(4), Position::new(7, 9));
    assert_eq!(pos.shifted(-3), Position::new(0, 2));
}

#[test]
fn resized_moves_only_end() {
    let pos = Position::new(3, 5);
    assert_eq!(pos.resized(2), Position::new(3, 7));
    assert_eq!(pos.resized(-3), Position::with_len(3, 0));
}

#[test]
fn range_and_display() {
    let pos = Position::new(2, 4);
    assert_eq!(pos.to_range(), 2..5);
    assert_eq!(format!("{pos}"), "2..=4");
    assert_eq!(format!("{:?}", Position::with_len(2, 0)), "2..2");
}

// === Wire form ===

#[cfg(feature = "serde")]
mod wire {
    use super::*;

    #[test]
    fn serializes_inclusive_end() {
        let json = serde_json::to_value(Position::new(2, 4)).unwrap();
        assert_eq!(json, serde_json::json!({ "start": 2, "end": 4 }));
    }

    #[test]
    fn empty_position_at_zero() {
        let json = serde_json::to_value(Position::with_len(0, 0)).unwrap();
        assert_eq!(json, serde_json::json!({ "start": 0, "end": -1 }));

        let back: Position = serde_json::from_value(json).unwrap();
        assert_eq!(back, Position::with_len(0, 0));
    }

    #[test]
    fn end_before_start_deserializes_empty() {
        let pos: Position = serde_json::from_str(r#"{"start": 5, "end": 1}"#).unwrap();
        assert_eq!(pos, Position::with_len(5, 0));
    }
}
