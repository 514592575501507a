use pretty_assertions::assert_eq;
use watt_diagnostic::{ErrorCode, Problem};

use super::{error_of, run, value_of};

#[test]
fn test_arithmetic() {
    assert_eq!(value_of("1 + 2 * 3"), "7");
    assert_eq!(value_of("7 % 4"), "3");
    assert_eq!(value_of("-(2 ^ 3)"), "-8");
    assert_eq!(value_of("1 / 0"), "Infinity");
}

#[test]
fn test_quantities() {
    assert_eq!(value_of("3 km + 2 km"), "5 km");
    assert_eq!(value_of("2 m * 3 m"), "6 (m^2)");
    assert_eq!(value_of("10 m / 2 s"), "5 (m * s^-1)");
    assert_eq!(value_of("(3 m)^2"), "9 (m^2)");
}

#[test]
fn test_km_round_trip() {
    assert_eq!(value_of("1 km as m"), "1000 m");
    assert_eq!(value_of("(1 km as m) as km"), "1 km");
}

#[test]
fn test_speed_conversion() {
    assert_eq!(value_of("36 (km / h) as (m / s)"), "10 (m * s^-1)");
}

#[test]
fn test_scalar_converts_by_ascription() {
    assert_eq!(value_of("unit x; unit y = 2 x; (1 as y) as x"), "2 x");
}

#[test]
fn test_comparisons() {
    assert_eq!(value_of("1 km < 2 km"), "true");
    assert_eq!(value_of("2 m == 2 m"), "true");
    assert_eq!(value_of("true != false"), "true");
}

#[test]
fn test_mismatched_dims_fail() {
    let err = error_of("5 m + 3 s");
    assert_eq!(
        err.problem,
        Problem::TypeMismatch {
            left: "5 m".to_string(),
            right: "3 s".to_string(),
        }
    );
    assert_eq!(err.code(), ErrorCode::E6008);
    assert!(matches!(error_of("1 m < 1 s").problem, Problem::TypeMismatch { .. }));
}

#[test]
fn test_conversion_errors() {
    assert!(matches!(
        error_of("1 m as s").problem,
        Problem::BaseDimensionsMismatch { .. }
    ));
    assert!(matches!(error_of("true as m").problem, Problem::NotANumber { .. }));
    assert!(matches!(error_of("1 m as 1").problem, Problem::NotAUnit { .. }));
}

#[test]
fn test_ascription_errors() {
    let err = error_of("(2 m) km");
    assert_eq!(
        err.problem,
        Problem::NotAScalar {
            found: "2 m".to_string()
        }
    );
    assert!(matches!(error_of("2 boolean").problem, Problem::NotAUnit { .. }));
}

#[test]
fn test_short_circuit_and() {
    assert_eq!(value_of("false && (1/0 == 0)"), "false");
    assert_eq!(value_of("false && undefined_name"), "false");
}

#[test]
fn test_short_circuit_or() {
    assert_eq!(value_of("true || undefined_name"), "true");
    assert!(run("false || undefined_name").is_err());
}

#[test]
fn test_logical_operands_must_be_boolean() {
    let err = error_of("1 && true");
    assert_eq!(err.location.to_string(), "1:1 - 1:2");
    let err = error_of("true && 1");
    assert_eq!(err.location.to_string(), "1:9 - 1:10");
}

#[test]
fn test_name_not_defined_location() {
    let err = error_of("2 * (3 + nope)");
    assert_eq!(
        err.problem,
        Problem::NameNotDefined {
            name: "nope".to_string()
        }
    );
    assert_eq!(err.location.to_string(), "1:10 - 1:14");
    assert_eq!(err.to_string(), "1:10 - 1:14 - 'nope' is not defined");
}

#[test]
fn test_units_as_values() {
    assert_eq!(value_of("km"), "km");
    assert_eq!(value_of("1000 * m"), "1000 * m");
    assert_eq!(value_of("-m"), "-1 * m");
    assert_eq!(value_of("boolean"), "boolean");
}

#[test]
fn test_unit_scaling_requires_scalar() {
    assert!(matches!(error_of("2 m * s").problem, Problem::NotAScalar { .. }));
    assert!(matches!(
        error_of("m + m").problem,
        Problem::OperationNotDefined { .. }
    ));
}
