use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_position_first_line() {
    let index = LineIndex::new("1 km");
    assert_eq!(index.position(0), Position::new(1, 1, 0));
    assert_eq!(index.position(2), Position::new(1, 3, 2));
}

#[test]
fn test_position_after_newline() {
    let index = LineIndex::new("var x = 1;\nx + 2");
    assert_eq!(index.position(11), Position::new(2, 1, 11));
    assert_eq!(index.position(15), Position::new(2, 5, 15));
}

#[test]
fn test_position_clamps_to_end() {
    let index = LineIndex::new("ab");
    assert_eq!(index.position(40), Position::new(1, 3, 2));
}

#[test]
fn test_location_display() {
    let index = LineIndex::new("x\n  y + z");
    let loc = index.location(4..9);
    assert_eq!(loc.to_string(), "2:3 - 2:8");
}

#[test]
fn test_location_merge() {
    let index = LineIndex::new("1 + 2 * 3");
    let left = index.location(0..1);
    let right = index.location(4..9);
    let merged = left.merge(right);
    assert_eq!(merged.range(), 0..9);
    assert_eq!(right.merge(left), merged);
}
