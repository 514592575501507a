use super::*;
use crate::ErrorCode;
use watt_ir::LineIndex;

#[test]
fn test_render_contains_code_and_message() {
    let source = "1 m + 2 s";
    let location = LineIndex::new(source).location(0..9);
    let diagnostic = Diagnostic::new(ErrorCode::E2008, "type mismatch: 'm' and 's'", location);

    let text = render(source, &diagnostic, false);
    assert!(text.contains("E2008"));
    assert!(text.contains("type mismatch: 'm' and 's'"));
}

#[test]
fn test_render_out_of_range_location() {
    let source = "x";
    let location = LineIndex::new("a much longer source").location(10..15);
    let diagnostic = Diagnostic::new(ErrorCode::E6001, "'x' is not defined", location);

    let text = render(source, &diagnostic, false);
    assert!(text.contains("'x' is not defined"));
}

#[test]
fn test_plain_display() {
    let location = LineIndex::new("abc").location(1..2);
    let diagnostic = Diagnostic::new(ErrorCode::E1001, "unexpected token", location);
    assert_eq!(diagnostic.to_string(), "[E1001] 1:2 - 1:3 - unexpected token");
}
