//! Diagnostics shared by every phase.
//!
//! - [`ErrorCode`]: stable `E####` identifiers, first digit is the phase.
//! - [`Problem`]: the semantic error taxonomy shared by the static (`TypeError`) and
//!   dynamic (`RuntimeError`) families, which differ only in phase.
//! - [`Diagnostic`]: code + message + location, the currency handed to [`emitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
mod problem;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use problem::{Phase, Problem};
