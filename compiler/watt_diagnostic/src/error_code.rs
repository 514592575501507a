//! Error codes for all diagnostics.
//!
//! Format: E#### where the first digit indicates the phase:
//! - E0xxx: Lexer errors
//! - E1xxx: Parser errors
//! - E2xxx: Type errors
//! - E6xxx: Runtime errors

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0001,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Expected identifier
    E1003,

    // Type Errors (E2xxx)
    /// Name is not defined
    E2001,
    /// Not a boolean
    E2002,
    /// Not a number
    E2003,
    /// Not a number or unit
    E2004,
    /// Not a scalar
    E2005,
    /// Not a unit
    E2006,
    /// Base dimensions do not match
    E2007,
    /// Type mismatch
    E2008,
    /// Operation not defined for operands
    E2009,
    /// `var` without annotation or initializer
    E2010,
    /// Operation failed
    E2011,
    /// Unit defined from a value known only at runtime
    E2012,

    // Runtime Errors (E6xxx)
    /// Name is not defined
    E6001,
    /// Not a boolean
    E6002,
    /// Not a number
    E6003,
    /// Not a number or unit
    E6004,
    /// Not a scalar
    E6005,
    /// Not a unit
    E6006,
    /// Base dimensions do not match
    E6007,
    /// Type mismatch
    E6008,
    /// Operation not defined for operands
    E6009,
    /// `var` without annotation or initializer
    E6010,
    /// Operation failed
    E6011,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E2011 => "E2011",
            ErrorCode::E2012 => "E2012",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
        }
    }

    /// Check if this is a static (type) error.
    pub fn is_type_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this is a runtime error.
    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
