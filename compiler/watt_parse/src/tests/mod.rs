//! Parser tests.
//!
//! - `parser`: expression precedence, statements, locations
//! - `errors`: rejected input and the error kinds it produces
