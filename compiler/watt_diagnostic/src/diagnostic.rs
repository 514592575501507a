//! Phase-independent error record.

use std::fmt;

use watt_ir::Location;

use crate::ErrorCode;

/// A reportable error: what went wrong and where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub location: Location,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>, location: Location) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            location,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} - {}", self.code, self.location, self.message)
    }
}
