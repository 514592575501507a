//! The semantic error taxonomy.
//!
//! Operands are stored already rendered, since the two families render them differently:
//! type errors show the static form of a value, runtime errors its concrete form.

use crate::ErrorCode;

/// Which semantic pass reported a problem.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Type,
    Runtime,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Problem {
    #[error("'{name}' is not defined")]
    NameNotDefined { name: String },

    #[error("not a boolean: '{found}'")]
    NotABoolean { found: String },

    #[error("not a number: '{found}'")]
    NotANumber { found: String },

    #[error("not a number or unit: '{found}'")]
    NotANumberOrUnit { found: String },

    #[error("not a scalar: '{found}'")]
    NotAScalar { found: String },

    #[error("not a unit: '{found}'")]
    NotAUnit { found: String },

    #[error("base dimensions do not match of '{left}' and '{right}'")]
    BaseDimensionsMismatch { left: String, right: String },

    #[error("type mismatch: '{left}' and '{right}'")]
    TypeMismatch { left: String, right: String },

    #[error("'{op}' is not defined for '{left}' and '{right}'")]
    OperationNotDefined {
        op: String,
        left: String,
        right: String,
    },

    #[error("'var' bindings must either have a type annotation, or an initial value")]
    VarMustHaveTypeOrValue,

    /// Only the type pass reports this; at runtime every number is concrete.
    #[error("unit definition must be known statically, found '{found}'")]
    UnitNotStatic { found: String },

    /// A failure raised below the walk (by the value domain) and attributed to the node
    /// being processed.
    #[error("{message}")]
    OperationFailed { message: String },
}

impl Problem {
    pub fn code(&self, phase: Phase) -> ErrorCode {
        match (phase, self) {
            (Phase::Type, Problem::NameNotDefined { .. }) => ErrorCode::E2001,
            (Phase::Type, Problem::NotABoolean { .. }) => ErrorCode::E2002,
            (Phase::Type, Problem::NotANumber { .. }) => ErrorCode::E2003,
            (Phase::Type, Problem::NotANumberOrUnit { .. }) => ErrorCode::E2004,
            (Phase::Type, Problem::NotAScalar { .. }) => ErrorCode::E2005,
            (Phase::Type, Problem::NotAUnit { .. }) => ErrorCode::E2006,
            (Phase::Type, Problem::BaseDimensionsMismatch { .. }) => ErrorCode::E2007,
            (Phase::Type, Problem::TypeMismatch { .. }) => ErrorCode::E2008,
            (Phase::Type, Problem::OperationNotDefined { .. }) => ErrorCode::E2009,
            (Phase::Type, Problem::VarMustHaveTypeOrValue) => ErrorCode::E2010,
            (Phase::Type, Problem::OperationFailed { .. }) => ErrorCode::E2011,
            (_, Problem::UnitNotStatic { .. }) => ErrorCode::E2012,
            (Phase::Runtime, Problem::NameNotDefined { .. }) => ErrorCode::E6001,
            (Phase::Runtime, Problem::NotABoolean { .. }) => ErrorCode::E6002,
            (Phase::Runtime, Problem::NotANumber { .. }) => ErrorCode::E6003,
            (Phase::Runtime, Problem::NotANumberOrUnit { .. }) => ErrorCode::E6004,
            (Phase::Runtime, Problem::NotAScalar { .. }) => ErrorCode::E6005,
            (Phase::Runtime, Problem::NotAUnit { .. }) => ErrorCode::E6006,
            (Phase::Runtime, Problem::BaseDimensionsMismatch { .. }) => ErrorCode::E6007,
            (Phase::Runtime, Problem::TypeMismatch { .. }) => ErrorCode::E6008,
            (Phase::Runtime, Problem::OperationNotDefined { .. }) => ErrorCode::E6009,
            (Phase::Runtime, Problem::VarMustHaveTypeOrValue) => ErrorCode::E6010,
            (Phase::Runtime, Problem::OperationFailed { .. }) => ErrorCode::E6011,
        }
    }
}

#[cfg(test)]
mod tests;
