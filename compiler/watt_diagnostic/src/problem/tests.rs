use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_problem_messages() {
    let problem = Problem::NameNotDefined {
        name: "furlong".to_string(),
    };
    assert_eq!(problem.to_string(), "'furlong' is not defined");

    let problem = Problem::OperationNotDefined {
        op: "+".to_string(),
        left: "unit m".to_string(),
        right: "unit s".to_string(),
    };
    assert_eq!(
        problem.to_string(),
        "'+' is not defined for 'unit m' and 'unit s'"
    );
}

#[test]
fn test_codes_follow_phase() {
    let problem = Problem::TypeMismatch {
        left: "m".to_string(),
        right: "s".to_string(),
    };
    assert_eq!(problem.code(Phase::Type), ErrorCode::E2008);
    assert_eq!(problem.code(Phase::Runtime), ErrorCode::E6008);
    assert!(problem.code(Phase::Type).is_type_error());
    assert!(problem.code(Phase::Runtime).is_runtime_error());
}

#[test]
fn test_unit_not_static_is_a_type_error() {
    let problem = Problem::UnitNotStatic {
        found: "m".to_string(),
    };
    assert_eq!(
        problem.to_string(),
        "unit definition must be known statically, found 'm'"
    );
    assert_eq!(problem.code(Phase::Type), ErrorCode::E2012);
}
