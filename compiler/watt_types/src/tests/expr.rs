use pretty_assertions::assert_eq;
use watt_diagnostic::{ErrorCode, Problem};
use watt_ir::Location;
use watt_value::{UndefinedOperation, Value};

use super::{check, error_of, type_of};
use crate::error::Failure;
use crate::TypeError;

#[test]
fn test_literals_fold() {
    assert_eq!(type_of("1 + 2 * 3"), "7");
    assert_eq!(type_of("true && !false"), "true");
    assert_eq!(type_of("boolean"), "type boolean");
    assert_eq!(type_of("scalar"), "unit scalar");
}

#[test]
fn test_quantities_fold() {
    assert_eq!(type_of("3 km"), "3 km");
    assert_eq!(type_of("2 m * 3 m"), "6 (m^2)");
    assert_eq!(type_of("1 km as m"), "1000 m");
    assert_eq!(type_of("6 m / 2 s"), "3 (m * s^-1)");
}

#[test]
fn test_units_compose() {
    assert_eq!(type_of("m / s"), "unit m * s^-1");
    assert_eq!(type_of("m^2"), "unit m^2");
    assert_eq!(type_of("1000 * m"), "unit 1000 * m");
}

#[test]
fn test_addition_requires_same_dims() {
    let err = error_of("5 m + 3 s");
    assert_eq!(
        err.problem,
        Problem::TypeMismatch {
            left: "m".to_string(),
            right: "s".to_string(),
        }
    );
    assert_eq!(err.location.to_string(), "1:1 - 1:10");
    assert_eq!(err.code(), ErrorCode::E2008);
}

#[test]
fn test_addition_never_converts() {
    assert!(matches!(
        error_of("1 km + 1 m").problem,
        Problem::TypeMismatch { .. }
    ));
}

#[test]
fn test_conversion_base_mismatch() {
    let err = error_of("1 m as s");
    assert!(matches!(err.problem, Problem::BaseDimensionsMismatch { .. }));
    assert_eq!(err.code(), ErrorCode::E2007);
}

#[test]
fn test_conversion_needs_unit_target() {
    let err = error_of("1 m as 2");
    assert_eq!(
        err.problem,
        Problem::NotAUnit {
            found: "2".to_string()
        }
    );
    assert_eq!(err.location.to_string(), "1:8 - 1:9");
}

#[test]
fn test_ascription_needs_scalar() {
    let err = error_of("(3 m) km");
    assert!(matches!(err.problem, Problem::NotAScalar { .. }));
    assert_eq!(err.location.to_string(), "1:1 - 1:6");
}

#[test]
fn test_unknown_name_reports_identifier() {
    let err = error_of("1 + 2 * furlong");
    assert_eq!(
        err.problem,
        Problem::NameNotDefined {
            name: "furlong".to_string()
        }
    );
    assert_eq!(err.location.to_string(), "1:9 - 1:16");
}

#[test]
fn test_not_requires_boolean() {
    let err = error_of("!1");
    assert_eq!(
        err.problem,
        Problem::NotABoolean {
            found: "1".to_string()
        }
    );
}

#[test]
fn test_logical_requires_booleans() {
    let err = error_of("true || 2 m");
    assert_eq!(
        err.problem,
        Problem::NotABoolean {
            found: "2 m".to_string()
        }
    );
    assert_eq!(err.location.to_string(), "1:9 - 1:12");
}

#[test]
fn test_unit_operands_only_scale() {
    let err = error_of("m + 1");
    assert!(matches!(err.problem, Problem::OperationNotDefined { ref op, .. } if op == "+"));
    let err = error_of("2 m * s");
    assert!(matches!(err.problem, Problem::NotAScalar { .. }));
}

#[test]
fn test_power_requires_number_or_unit() {
    assert!(matches!(
        error_of("true^2").problem,
        Problem::NotANumberOrUnit { .. }
    ));
}

#[test]
fn test_abstract_operands() {
    assert_eq!(type_of("var x = 1 m; x + 2 m"), "m");
    assert_eq!(type_of("var x = 1 m; x < 2 m"), "boolean");
    assert_eq!(type_of("var b = true; b && true"), "boolean");
    assert_eq!(type_of("var x = 2; x km"), "km");
    assert_eq!(type_of("var x = 2 km; x as m"), "m");
}

#[test]
fn test_comparison_folds() {
    assert_eq!(type_of("1 km < 2 km"), "true");
    assert_eq!(type_of("1 == 1"), "true");
}

#[test]
fn test_division_by_zero_is_not_a_type_error() {
    assert!(check("1 / 0").is_ok());
}

#[test]
fn test_foreign_failure_takes_frame_location() {
    let location = Location::DUMMY;
    let err = Failure::Operation(UndefinedOperation).at(location);
    assert_eq!(
        err,
        TypeError::new(
            location,
            Problem::OperationFailed {
                message: "operation not defined".to_string()
            }
        )
    );
    let inner = TypeError::not_a_boolean(location, &Value::number(1.0));
    assert_eq!(Failure::Type(inner.clone()).at(location), inner);
}
