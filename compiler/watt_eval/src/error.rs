//! Runtime errors.

use watt_diagnostic::{Diagnostic, ErrorCode, Phase, Problem};
use watt_ir::{BinaryOp, Location};
use watt_value::{render_value, UndefinedOperation, Value};

/// A runtime error at the innermost node that failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{location} - {problem}")]
pub struct RuntimeError {
    pub location: Location,
    pub problem: Problem,
}

fn show(value: &Value) -> String {
    render_value(value).to_string()
}

impl RuntimeError {
    pub fn new(location: Location, problem: Problem) -> Self {
        RuntimeError { location, problem }
    }

    pub fn name_not_defined(location: Location, name: &str) -> Self {
        RuntimeError::new(
            location,
            Problem::NameNotDefined {
                name: name.to_string(),
            },
        )
    }

    pub fn not_a_boolean(location: Location, found: &Value) -> Self {
        RuntimeError::new(location, Problem::NotABoolean { found: show(found) })
    }

    pub fn not_a_number(location: Location, found: &Value) -> Self {
        RuntimeError::new(location, Problem::NotANumber { found: show(found) })
    }

    pub fn not_a_number_or_unit(location: Location, found: &Value) -> Self {
        RuntimeError::new(location, Problem::NotANumberOrUnit { found: show(found) })
    }

    pub fn not_a_scalar(location: Location, found: &Value) -> Self {
        RuntimeError::new(location, Problem::NotAScalar { found: show(found) })
    }

    pub fn not_a_unit(location: Location, found: &Value) -> Self {
        RuntimeError::new(location, Problem::NotAUnit { found: show(found) })
    }

    pub fn base_dimensions_mismatch(location: Location, left: &Value, right: &Value) -> Self {
        RuntimeError::new(
            location,
            Problem::BaseDimensionsMismatch {
                left: show(left),
                right: show(right),
            },
        )
    }

    pub fn type_mismatch(location: Location, left: &Value, right: &Value) -> Self {
        RuntimeError::new(
            location,
            Problem::TypeMismatch {
                left: show(left),
                right: show(right),
            },
        )
    }

    pub fn operation_not_defined(
        location: Location,
        op: BinaryOp,
        left: &Value,
        right: &Value,
    ) -> Self {
        RuntimeError::new(
            location,
            Problem::OperationNotDefined {
                op: op.as_symbol().to_string(),
                left: show(left),
                right: show(right),
            },
        )
    }

    pub fn var_must_have_type_or_value(location: Location) -> Self {
        RuntimeError::new(location, Problem::VarMustHaveTypeOrValue)
    }

    /// A value-domain failure attributed to `location`.
    pub fn operation_failed(location: Location, cause: &UndefinedOperation) -> Self {
        RuntimeError::new(
            location,
            Problem::OperationFailed {
                message: cause.to_string(),
            },
        )
    }

    pub fn code(&self) -> ErrorCode {
        self.problem.code(Phase::Runtime)
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.problem.to_string(), self.location)
    }
}

/// Failure inside one evaluation frame, before it is pinned to a location.
#[derive(Debug)]
pub(crate) enum Failure {
    Runtime(RuntimeError),
    Operation(UndefinedOperation),
}

impl Failure {
    /// Runtime errors keep their own location, anything else gets `location`.
    pub(crate) fn at(self, location: Location) -> RuntimeError {
        match self {
            Failure::Runtime(error) => error,
            Failure::Operation(cause) => RuntimeError::operation_failed(location, &cause),
        }
    }
}

impl From<RuntimeError> for Failure {
    fn from(error: RuntimeError) -> Self {
        Failure::Runtime(error)
    }
}

impl From<UndefinedOperation> for Failure {
    fn from(cause: UndefinedOperation) -> Self {
        Failure::Operation(cause)
    }
}
