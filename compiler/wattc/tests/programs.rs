//! Whole programs run through a fresh session.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use watt_diagnostic::ErrorCode;
use wattc::{Session, WattError};

fn run(source: &str) -> Result<String, WattError> {
    let mut session = Session::with_prelude();
    Ok(session
        .run(source)?
        .map(|value| value.to_string())
        .unwrap_or_default())
}

#[test]
fn test_travel() {
    let value = run(include_str!("programs/travel.watt")).unwrap();
    assert!(value.ends_with(" (h^-1 * km)"), "{value}");
    let magnitude: f64 = value.split(' ').next().unwrap().parse().unwrap();
    assert!((magnitude - 12.047_089).abs() < 1e-4, "{magnitude}");
}

#[test]
fn test_countdown() {
    assert_eq!(run(include_str!("programs/countdown.watt")).unwrap(), "50");
}

#[test]
fn test_bad_units_reported_before_evaluation() {
    let source = include_str!("programs/bad_units.watt");
    let err = run(source).unwrap_err();
    let diagnostic = err.to_diagnostic();
    assert_eq!(diagnostic.code, ErrorCode::E2008);
    assert_eq!(err.to_string(), "3:1 - 3:19 - type mismatch: 'km' and 's'");
}

#[test]
fn test_check_reports_last_type() {
    let session = Session::with_prelude();
    let ty = session.check(include_str!("programs/countdown.watt")).unwrap().unwrap();
    assert_eq!(watt_value::render_type(&ty).to_string(), "scalar");
}
