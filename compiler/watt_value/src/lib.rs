//! Watt value domain.
//!
//! One closed [`Value`] type serves both semantic passes: type inference produces the
//! most precise value it can fold (falling back to abstract types), evaluation produces
//! concrete values. The [`Context`] holds both the type and value bindings.
//!
//! # Modules
//! - [`dimensions`]: exponent vectors over unit labels
//! - [`value`]: the seven value variants and their partial operations
//! - [`render`]: [`DisplayExpr`] trees for printing values and types
//! - [`context`]: persistent bindings with in-place reassignment

pub mod context;
pub mod dimensions;
pub mod render;
pub mod value;

pub use context::{AssignError, Context, LocalScope, ScopeMark};
pub use dimensions::Dimensions;
pub use render::{render_type, render_value, DisplayExpr};
pub use value::{DimConstructor, DimValue, Hole, UndefinedOperation, Value};
