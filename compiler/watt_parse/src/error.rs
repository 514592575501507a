//! Parse errors.

use watt_diagnostic::{Diagnostic, ErrorCode};
use watt_ir::Location;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("invalid character")]
    InvalidCharacter,

    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("expected expression, found {found}")]
    ExpectedExpression { found: String },

    #[error("expected identifier, found {found}")]
    ExpectedIdentifier { found: String },

    #[error("expected numeric exponent, found {found}")]
    ExpectedExponent { found: String },
}

/// A parse failure at a source location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{location} - {kind}")]
pub struct ParseError {
    pub location: Location,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(location: Location, kind: ParseErrorKind) -> Self {
        ParseError { location, kind }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::InvalidCharacter => ErrorCode::E0001,
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } | ParseErrorKind::ExpectedExponent { .. } => {
                ErrorCode::E1002
            }
            ParseErrorKind::ExpectedIdentifier { .. } => ErrorCode::E1003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.kind.to_string(), self.location)
    }
}
